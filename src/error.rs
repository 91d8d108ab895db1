//! Error types for the portal core.
//!
//! Startup failures (`MissingDatabaseUrl`, `Connect`, `Ping`, `PingTimeout`,
//! `Schema`, `InsecureConfig`) are fatal: the binary reports them and exits.
//! The remaining variants are produced by [`PortalStore`](crate::PortalStore)
//! operations and map onto the `{error}` envelope of the HTTP layer.

use std::time::Duration;

use sea_orm::DbErr;

use crate::status::ApplicationStatus;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong in configuration, startup or a store call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `DATABASE_URL` was unset or empty when a pool was requested.
    #[error("DATABASE_URL is required")]
    MissingDatabaseUrl,

    /// The connection string could not be parsed or the pool could not be built.
    #[error("unable to create connection pool: {0}")]
    Connect(#[source] DbErr),

    /// The liveness ping reached the server but failed.
    #[error("unable to ping database: {0}")]
    Ping(#[source] DbErr),

    /// The liveness ping did not answer within the configured timeout.
    #[error("database did not answer within {0:?}")]
    PingTimeout(Duration),

    /// A schema statement failed during startup.
    #[error("failed to initialize schema: {0}")]
    Schema(#[source] DbErr),

    /// Placeholder secrets left in place outside development.
    #[error("insecure configuration for environment `{env}`: set {}", .variables.join(", "))]
    InsecureConfig {
        env: String,
        variables: Vec<&'static str>,
    },

    /// Any other database failure during a store operation.
    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("user with this email already exists")]
    EmailTaken,

    #[error("an intern with this email has already been selected")]
    InternExists,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid status `{0}`")]
    InvalidStatus(String),

    #[error("cannot move application from {from} to {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    /// `selected` was requested through a plain status update.
    #[error("selecting an application requires an intern password")]
    SelectionNeedsCredential,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl Error {
    /// True for errors that should abort process startup.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingDatabaseUrl
                | Self::Connect(_)
                | Self::Ping(_)
                | Self::PingTimeout(_)
                | Self::Schema(_)
                | Self::InsecureConfig { .. }
        )
    }
}
