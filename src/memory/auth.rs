use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use fridgeplan_shared::{Result, User, auth::AuthProvider};
use std::{collections::HashMap, sync::RwLock};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate)]
struct SignUpInput {
    #[validate(email)]
    email: String,
    #[validate(length(min = 8, max = 20))]
    password: String,
}

#[derive(Validate)]
struct SignInInput {
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    password: String,
}

struct Account {
    user: User,
    password_hash: String,
}

/// Email and password accounts held in memory, hashed with argon2.
#[derive(Default)]
pub struct MemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    current: RwLock<Option<User>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_current(&self, user: Option<User>) -> Result<()> {
        *super::write(&self.current)? = user;

        Ok(())
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let input = SignInInput {
            email: email.trim().to_lowercase(),
            password: password.to_owned(),
        };
        input.validate()?;

        let user = {
            let accounts = super::read(&self.accounts)?;
            let Some(account) = accounts.get(&input.email) else {
                fridgeplan_shared::unauthenticated!("Invalid email or password");
            };

            let parsed_hash = PasswordHash::new(&account.password_hash)?;
            if Argon2::default()
                .verify_password(input.password.as_bytes(), &parsed_hash)
                .is_err()
            {
                fridgeplan_shared::unauthenticated!("Invalid email or password");
            }

            account.user.clone()
        };

        self.set_current(Some(user.clone()))?;
        tracing::info!(user.id = %user.id, "signed in");

        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let input = SignUpInput {
            email: email.trim().to_lowercase(),
            password: password.to_owned(),
        };
        input.validate()?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let user = {
            let mut accounts = super::write(&self.accounts)?;
            if accounts.contains_key(&input.email) {
                fridgeplan_shared::unauthenticated!("Email already exists");
            }

            let user = User {
                id: Ulid::new().to_string(),
                email: input.email.to_owned(),
                name: None,
                is_premium: false,
                created_at: OffsetDateTime::now_utc(),
            };

            accounts.insert(
                input.email,
                Account {
                    user: user.clone(),
                    password_hash,
                },
            );

            user
        };

        self.set_current(Some(user.clone()))?;
        tracing::info!(user.id = %user.id, "signed up");

        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        self.set_current(None)
    }

    fn current_user(&self) -> Option<User> {
        match super::read(&self.current) {
            Ok(user) => user.clone(),
            Err(err) => {
                tracing::warn!(error = %err, "current user unavailable");
                None
            }
        }
    }

    fn is_loading(&self) -> bool {
        false
    }
}
