//! User Registry - a single-endpoint user registration API.
//!
//! The crate accepts a candidate user record over HTTP, validates it
//! against a fixed rule set, rejects duplicate emails, persists the
//! record with a generated id, and returns the stored representation.
//!
//! Layering, outermost first:
//!
//! - [`cli`] / [`commands`]: the binary surface (`serve`, `migrate`)
//! - [`api`]: router, handlers, extractors, OpenAPI docs
//! - [`services`]: the registration use case
//! - [`domain`]: the user entity, its draft form, and validation rules
//! - [`infra`]: SeaORM store, migrations, connection handling
//! - [`config`] / [`errors`]: shared settings and the error type

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, User};
pub use errors::{AppError, AppResult};
