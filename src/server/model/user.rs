//! User domain models and parameters.
//!
//! Provides the user domain model with its marketplace role, and parameter types for
//! profile upserts and role changes.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_stored},
};

/// Marketplace role of a user.
///
/// Determines which endpoints a user may call. `Admin` passes every role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Customer,
    Courier,
    Partner,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Courier => "courier",
            Self::Partner => "partner",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "courier" => Ok(Self::Courier),
            "partner" => Ok(Self::Partner),
            "admin" => Ok(Self::Admin),
            _ => Err(()),
        }
    }
}

/// User with identity-provider subject, profile data, and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Token subject issued by the identity provider.
    pub id: String,
    /// Display name of the user.
    pub name: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Marketplace role.
    pub role: UserRole,
    /// When the profile was first created.
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            phone: self.phone,
            role: self.role.to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_stored("user.role", entity.role)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for upserting the caller's own profile.
///
/// The role is only applied when a new row is inserted; existing users keep theirs.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Token subject of the caller.
    pub id: String,
    /// Display name of the user.
    pub name: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Role assigned if the user does not exist yet.
    pub initial_role: UserRole,
}

/// Parameters for changing a user's role.
#[derive(Debug, Clone)]
pub struct SetRoleParam {
    /// User to modify.
    pub user_id: String,
    /// New role.
    pub role: UserRole,
}
