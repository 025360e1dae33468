//! Persistence of candidate state
//! Key/value JSON store, application tracker and user data

pub mod keys;
pub mod json_store;
pub mod tracker;
pub mod user;
