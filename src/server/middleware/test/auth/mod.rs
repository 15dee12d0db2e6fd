use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        claims::Claims,
    },
    model::user::UserRole,
};
use test_utils::{builder::TestBuilder, factory};


fn claims_for(sub: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        iat: 0,
        exp: i64::MAX,
    }
}
