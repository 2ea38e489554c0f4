//! Calls to the scripture service, one module per endpoint.

pub mod navigation;
pub mod book_metadata;
pub mod chapter;
pub mod health;
pub mod search;
