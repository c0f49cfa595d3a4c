//! Mock authentication.
//!
//! Nothing is verified and no password is stored: after a simulated round
//! trip the form input is validated and a [`User`] is derived from it.

use super::error::{GalleryError, GalleryResult};
use super::persistence::PersistedUser;
use crate::gallery::User;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_SIGN_IN_DELAY: Duration = Duration::from_millis(1000);
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_NAME_LENGTH: usize = 2;

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Credentials {
    SignIn {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
    },
}

impl Credentials {
    pub fn sign_in<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Credentials::SignIn {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn register<N: Into<String>, E: Into<String>, P: Into<String>>(
        name: N,
        email: E,
        password: P,
    ) -> Self {
        Credentials::Register {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    fn email(&self) -> &str {
        match self {
            Credentials::SignIn { email, .. } | Credentials::Register { email, .. } => email,
        }
    }

    fn password(&self) -> &str {
        match self {
            Credentials::SignIn { password, .. } | Credentials::Register { password, .. } => {
                password
            }
        }
    }
}

/// Validates the form and derives the user, without any delay.
pub fn validate_credentials(credentials: &Credentials) -> GalleryResult<User> {
    let email = credentials.email().trim();
    if email.is_empty() {
        return Err(GalleryError::validation("Please enter your email address"));
    }

    if credentials.password().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(GalleryError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let name = match credentials {
        Credentials::SignIn { .. } => email.split('@').next().unwrap_or(email).to_owned(),
        Credentials::Register { name, .. } => {
            if name.chars().count() < MIN_NAME_LENGTH {
                return Err(GalleryError::validation("Please enter a valid name"));
            }
            name.clone()
        }
    };

    Ok(User {
        name,
        email: email.to_owned(),
    })
}

pub struct MockAuthenticator {
    delay: Duration,
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_SIGN_IN_DELAY)
    }
}

impl MockAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn authenticate(&self, credentials: &Credentials) -> GalleryResult<User> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        validate_credentials(credentials)
    }
}

/// The signed-in user plus its persisted mirror.
pub struct AuthSession {
    user: Option<User>,
    persisted: PersistedUser,
    authenticator: MockAuthenticator,
}

impl AuthSession {
    pub fn new(persisted: PersistedUser, authenticator: MockAuthenticator) -> Self {
        Self {
            user: None,
            persisted,
            authenticator,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Picks up the user persisted by a previous run.
    pub fn restore(&mut self) -> GalleryResult<Option<&User>> {
        self.user = self.persisted.load()?;
        if let Some(user) = &self.user {
            info!("Restored session for {}", user.email);
        }
        Ok(self.user.as_ref())
    }

    pub async fn sign_in(&mut self, credentials: &Credentials) -> GalleryResult<User> {
        let user = self.authenticator.authenticate(credentials).await?;
        self.persisted.save(&user)?;
        self.user = Some(user.clone());
        info!("Signed in as {} <{}>", user.name, user.email);
        Ok(user)
    }

    pub fn sign_out(&mut self) -> GalleryResult<()> {
        if let Some(user) = self.user.take() {
            debug!("Signing out {}", user.email);
        }
        self.persisted.clear()
    }
}
