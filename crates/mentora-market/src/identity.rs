//! Identity entry points: profile creation and lookup.

use mentora_core::{AccountId, MarketError, NewUser, Result, User};

use crate::Marketplace;

impl Marketplace {
    /// Create a profile for the calling account.
    ///
    /// One account holds at most one profile, and usernames and emails are
    /// unique across profiles. The role is fixed here and never reassigned.
    ///
    /// # Errors
    ///
    /// Returns `ProfileExists` if the account already has a profile or the
    /// username or email is taken.
    pub fn create_user(&self, caller: &AccountId, profile: NewUser) -> Result<User> {
        if self.store().get_user(caller)?.is_some() {
            return Err(MarketError::ProfileExists {
                detail: format!("account {caller}"),
            });
        }
        if self
            .store()
            .find_user_by_username(&profile.username)?
            .is_some()
        {
            return Err(MarketError::ProfileExists {
                detail: format!("username {}", profile.username),
            });
        }
        if self.store().find_user_by_email(&profile.email)?.is_some() {
            return Err(MarketError::ProfileExists {
                detail: format!("email {}", profile.email),
            });
        }

        let user = profile.into_user(caller.clone());
        self.store().put_user(&user)?;

        tracing::info!(account = %user.account_id, username = %user.username, role = ?user.role, "user created");
        Ok(user)
    }

    /// Look up a profile by account id.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the account has no profile.
    pub fn get_user_by_id(&self, account_id: &AccountId) -> Result<User> {
        self.user(account_id)
    }
}
