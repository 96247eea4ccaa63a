//! Request extractors with rejections mapped to the application error
//! shape.

mod json_body;

pub use json_body::JsonBody;
