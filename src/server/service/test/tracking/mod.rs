use crate::server::{error::AppError, model::user::User, service::tracking::TrackingService};
use test_utils::{builder::TestBuilder, factory};

mod can_publish;
mod latest_for_user;

fn as_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
