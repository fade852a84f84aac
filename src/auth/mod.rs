//! Credential registration and verification.
//!
//! [`AuthService`] owns the [`store::CredentialStore`] exclusively; nothing
//! reads or writes accounts except through `register` and `authenticate`.
//! Each operation is a single check-then-act step with no multi-step
//! protocol, no retries, and no recovery beyond returning an [`AuthError`].

pub mod hasher;
pub mod store;

use self::hasher::PasswordHasher;
use self::store::CredentialStore;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password empty or absent.
    #[error("email and password are required")]
    MissingField,
    /// An account with this email already exists.
    #[error("email already exists")]
    DuplicateAccount,
    /// Unknown email or wrong password. One variant for both, so a caller
    /// cannot learn which half of the credential pair was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The hashing primitive failed. Not a client error.
    #[error("password hashing failed: {0}")]
    Hasher(#[from] bcrypt::BcryptError),
}

#[derive(Debug, Clone)]
pub struct AuthService {
    store: CredentialStore,
    hasher: PasswordHasher,
}

impl AuthService {
    #[must_use]
    pub fn new(store: CredentialStore, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Register a new account.
    ///
    /// # Errors
    /// `MissingField` if either input is empty, `DuplicateAccount` if the
    /// email is already registered, `Hasher` if the primitive fails.
    pub fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        // Fast pre-check so a taken email skips the hash work. The insert
        // below re-checks under the lock and stays the single authority.
        if self.store.get(email).is_some() {
            return Err(AuthError::DuplicateAccount);
        }

        let password_hash = self.hasher.hash(password)?;

        if !self.store.put_if_absent(email, password_hash) {
            return Err(AuthError::DuplicateAccount);
        }

        info!("user registered: {email}");

        Ok(())
    }

    /// Verify credentials and return the authenticated email. No token or
    /// session artifact is produced.
    ///
    /// # Errors
    /// `MissingField` if either input is empty, `InvalidCredentials` for an
    /// unknown email or a wrong password, `Hasher` if the stored hash cannot
    /// be parsed.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<String, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        let Some(account) = self.store.get(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        if self.hasher.verify(password, &account.password_hash)? {
            info!("user logged in: {email}");

            Ok(email.to_string())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
