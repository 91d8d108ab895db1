//! # ZGenAI internship portal core
//!
//! Configuration and persistence for the ZGenAI recruitment portal, built on
//! [Sea-ORM](https://crates.io/crates/sea-orm) with PostgreSQL.
//!
//! The HTTP layer is a separate concern. This crate gives it:
//!
//! - [`Config`]: one immutable value read from the environment at startup
//! - [`db::connect`]: a bounded connection pool checked with a ping
//! - [`db::ensure_schema`]: idempotent creation of the five portal tables and
//!   their indexes
//! - [`PortalStore`]: the signup, login, application review and email log
//!   operations the handlers call
//! - [`dto`]: the JSON shapes those handlers exchange
//!
//! ## Startup
//!
//! ```no_run
//! use zgenai_portal::{db, Config, PortalStore};
//!
//! # async fn example() -> zgenai_portal::Result<()> {
//! let config = Config::from_env();
//! config.ensure_secure()?;
//!
//! let conn = db::connect(&config.database_url, &config.pool).await?;
//! db::ensure_schema(&conn).await?;
//!
//! let store = PortalStore::from_config(conn, &config);
//! let stats = store.admin_stats().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Application review
//!
//! Applications start `pending` and only move forward. Selecting one creates
//! the intern record in the same transaction:
//!
//! ```no_run
//! use zgenai_portal::dto::UpdateStatusRequest;
//! use zgenai_portal::PortalStore;
//!
//! # async fn example(store: PortalStore, id: i32) -> zgenai_portal::Result<()> {
//! store
//!     .update_application_status(id, UpdateStatusRequest { status: "interview".into() })
//!     .await?;
//! let intern = store.select_application(id, "first-login-password").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
mod error;
pub mod migration;
pub mod password;
pub mod status;
mod store;

pub use config::{AllowedOrigins, Config};
pub use error::{Error, Result};
pub use status::ApplicationStatus;
pub use store::PortalStore;
