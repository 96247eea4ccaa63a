//! SeaORM entities, kept separate from the domain types they map to.

pub mod user;
