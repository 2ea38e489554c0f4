//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod error;
pub mod search_terms;
pub mod verse_range;
pub mod filter_set;
pub mod search_query;
pub mod search_result;
pub mod result_navigator;
pub mod search_const;
