use sea_orm::DatabaseConnection;

use crate::server::{
    data::{partner::PartnerRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::claims::Claims,
    model::user::{User, UserRole},
};

pub enum Permission {
    Admin,
    /// The user holds this role. Admins pass every role check.
    Role(UserRole),
    /// The user owns the partner, or is an admin.
    ManagePartner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    claims: &'a Claims,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, claims: &'a Claims) -> Self {
        Self { db, claims }
    }

    /// Resolves the token subject to a user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Caller with all permissions satisfied
    /// - `Err(AuthError::UserNotInDatabase)` - No profile exists for the subject
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    /// - `Err(AppError::NotFound)` - A partner named by `ManagePartner` does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(&self.claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(self.claims.sub.clone()).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            "endpoint requires admin".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Role(role) => {
                    if user.role != *role && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            format!("endpoint requires role {}", role),
                        )
                        .into());
                    }
                }
                Permission::ManagePartner(partner_id) => {
                    let Some(partner) = PartnerRepository::new(self.db)
                        .find_by_id(*partner_id)
                        .await?
                    else {
                        return Err(AppError::NotFound("Partner not found".to_string()));
                    };

                    if partner.owner_id != user.id && !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            format!("user does not own partner {}", partner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
