use async_trait::async_trait;

use crate::{Result, User};

/// Authentication collaborator. Sign-in and sign-up make the account the
/// current user; sign-out clears it.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_out(&self) -> Result<()>;

    fn current_user(&self) -> Option<User>;

    /// True while the provider is still resolving the initial session.
    fn is_loading(&self) -> bool;
}
