//! User service for business logic.
//!
//! This module provides the `UserService` for profile management and role administration.
//! The first profile created while no admin exists bootstraps the admin role.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::Page,
        user::{SetRoleParam, UpsertUserParam, User, UserRole},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the caller's profile.
    ///
    /// New users become `admin` when no admin exists yet and `customer` otherwise.
    /// Existing users keep their role.
    ///
    /// # Arguments
    /// - `user_id` - Token subject of the caller
    /// - `name` - Display name, must not be blank
    /// - `phone` - Optional contact number
    ///
    /// # Returns
    /// - `Ok(User)` - The stored profile
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert_profile(
        &self,
        user_id: String,
        name: String,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        let initial_role = if user_repo.admin_exists().await? {
            UserRole::Customer
        } else {
            UserRole::Admin
        };

        let user = user_repo
            .upsert(UpsertUserParam {
                id: user_id,
                name,
                phone: phone.filter(|p| !p.trim().is_empty()),
                initial_role,
            })
            .await?;

        if user.role == UserRole::Admin && initial_role == UserRole::Admin {
            tracing::info!(user_id = %user.id, "Granted admin role to first user");
        }

        Ok(user)
    }

    /// Retrieves all users with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the requested page with pagination metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<Page<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo.get_all_paginated(page, per_page).await?;

        Ok(Page::new(users, total, page, per_page))
    }

    /// Changes the role of a user.
    ///
    /// # Arguments
    /// - `actor` - Admin performing the change
    /// - `param` - Target user and new role
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - Admin attempted to demote themselves
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn set_role(&self, actor: &User, param: SetRoleParam) -> Result<User, AppError> {
        if actor.id == param.user_id && param.role != UserRole::Admin {
            return Err(AppError::BadRequest(
                "Admins cannot remove their own admin role".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .set_role(&param.user_id, param.role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            actor = %actor.id,
            user_id = %user.id,
            role = %user.role,
            "Changed user role"
        );

        Ok(user)
    }
}
