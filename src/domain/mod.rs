//! Domain layer: the user entity, its unvalidated draft form, and the
//! registration validation rules. No infrastructure concerns live here.

pub mod user;
pub mod validation;

pub use user::{NewUser, User, UserResponse};
pub use validation::validate;
