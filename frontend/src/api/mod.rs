pub mod scripture_api;
