use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpsertUserParam, UserRole},
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod set_role;
