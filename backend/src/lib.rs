//! Server-side access to the remote scripture service.

pub mod api;
pub mod client_utils;
pub mod server_extra;
