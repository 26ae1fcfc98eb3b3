//! Registration, login, and profile service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use wishhub_auth::jwt::encoder::JwtEncoder;
use wishhub_auth::password::{PasswordHasher, PasswordValidator};
use wishhub_core::error::AppError;
use wishhub_database::repositories::user::UserRepository;
use wishhub_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// A successfully authenticated user together with a fresh bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user record.
    pub user: User,
    /// Signed bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Manages registration, login, and profile lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher (Argon2id).
    hasher: Arc<PasswordHasher>,
    /// Password policy for new accounts.
    password_validator: Arc<PasswordValidator>,
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_validator,
            jwt_encoder,
        }
    }

    /// Registers a new account and returns it with a bearer token.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        self.password_validator.validate(password)?;

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("An account with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let (token, expires_at) = self.jwt_encoder.generate_token(user.id, &user.email)?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthenticatedUser {
            user,
            token,
            expires_at,
        })
    }

    /// Verifies credentials and returns the user with a fresh bearer token.
    ///
    /// Unknown email and wrong password produce the same error, so callers
    /// cannot probe which addresses are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let (token, expires_at) = self.jwt_encoder.generate_token(user.id, &user.email)?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedUser {
            user,
            token,
            expires_at,
        })
    }

    /// Returns the profile of the current user.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
