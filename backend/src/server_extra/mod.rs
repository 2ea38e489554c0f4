//! Extra axum routes mounted next to the app's server functions.

pub mod collaborator_health;
