//! Collaborator client plumbing shared by the API calls.

pub mod config;
pub mod scripture_client;
