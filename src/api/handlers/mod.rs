//! Request handlers, grouped per resource.

pub mod user_handler;

pub use user_handler::user_routes;
