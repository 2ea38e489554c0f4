pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod scripture_sidebar;
pub mod search_components;
