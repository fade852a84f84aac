//! # Sezamo
//!
//! `sezamo` is a minimal authentication backend: register an email/password
//! pair, hash the password with bcrypt, keep it in process memory, and verify
//! credentials on login.
//!
//! ## State model
//!
//! Credentials live in an in-memory map owned by the [`auth::AuthService`].
//! The map starts empty at process start and is discarded at process stop;
//! there is no persistence, no session or token issuance, and no
//! password-reset flow.
//!
//! ## HTTP surface
//!
//! Exactly two routes, JSON in and out:
//!
//! - `POST /api/signup` registers an account (201, 400, 409)
//! - `POST /api/login` verifies credentials (200, 400, 401)
//!
//! Login failures do not reveal whether the email or the password was wrong:
//! unknown accounts and bad passwords both answer 401 with the same body.

pub mod auth;
pub mod cli;
pub mod sezamo;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
