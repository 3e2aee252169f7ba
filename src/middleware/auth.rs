use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Identity of the authenticated caller, resolved once per request by the
/// auth guard and passed explicitly through the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: i32,
    pub is_admin: bool,
}

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session into a caller, enforcing the given permissions.
    ///
    /// # Returns
    /// - `Ok(Caller)` - Authenticated user satisfying every permission
    /// - `Err(AppError::AuthErr(_))` - Not logged in, stale session, or
    ///   missing a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<Caller, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.get_active_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "This action requires administrator permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(Caller {
            id: user.id,
            is_admin: user.admin,
        })
    }
}
