// src/infrastructure/identity/postgres.rs
//
// Credential adapter behind the IdentityProvider port. The audit subsystem
// only sees the pass/fail outcome; hashing and storage stay in here.
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::identity::{IdentityOutcome, IdentityProvider};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresIdentityProvider {
    pool: PgPool,
}

impl PostgresIdentityProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the default admin/user accounts when the table is empty, so a
    /// fresh deployment is immediately usable.
    pub async fn seed_default_accounts(&self) -> ApplicationResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        if count > 0 {
            return Ok(());
        }

        for username in ["admin", "user"] {
            if let IdentityOutcome::Rejected(reason) =
                self.register(username, "password123").await?
            {
                tracing::warn!(username, %reason, "seed account not created");
            }
        }

        tracing::info!("seeded default accounts");
        Ok(())
    }

    async fn hash_password(password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify_password(password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}

#[async_trait]
impl IdentityProvider for PostgresIdentityProvider {
    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<IdentityOutcome> {
        if username.trim().is_empty() {
            return Ok(IdentityOutcome::Rejected("username is required".into()));
        }
        if password.len() < 8 {
            return Ok(IdentityOutcome::Rejected(
                "password must be at least 8 characters".into(),
            ));
        }

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM accounts WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        if existing.is_some() {
            return Ok(IdentityOutcome::Rejected("username already exists".into()));
        }

        let hash = Self::hash_password(password).await?;

        sqlx::query("INSERT INTO accounts (username, password_hash) VALUES ($1, $2)")
            .bind(username)
            .bind(&hash)
            .execute(&self.pool)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(IdentityOutcome::Success)
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<IdentityOutcome> {
        let stored: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM accounts WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let Some(hash) = stored else {
            return Ok(IdentityOutcome::InvalidUsername);
        };

        if Self::verify_password(password, &hash).await? {
            Ok(IdentityOutcome::Success)
        } else {
            Ok(IdentityOutcome::InvalidPassword)
        }
    }
}
