//! Access decisions shared by every profile module.
//!
//! These are pure functions over already-loaded entities; loading the caller
//! and the target profile is the job of the calling service.

use crate::modules::access::application::domain::entities::{User, UserId, UserRole};
use crate::shared::errors::ServiceError;

pub const UNVERIFIED_ACCOUNT: &str = "Please verify your account";

/// Anything that belongs to exactly one user account.
pub trait Owned {
    fn owner(&self) -> UserId;
}

pub fn is_admin(user: &User) -> bool {
    user.role == UserRole::Admin
}

pub fn is_owner<T: Owned + ?Sized>(resource: &T, user_id: UserId) -> bool {
    resource.owner() == user_id
}

/// Guard for role-restricted operations.
///
/// Returns the user untouched when the account is verified and carries the
/// expected role.
pub fn is_user_verified(user: &User, expected: UserRole) -> Result<&User, ServiceError> {
    if !user.is_verified {
        return Err(ServiceError::Forbidden(UNVERIFIED_ACCOUNT.to_string()));
    }

    if user.role != expected {
        return Err(ServiceError::Forbidden(format!(
            "Only {} accounts can perform this action",
            expected
        )));
    }

    Ok(user)
}
