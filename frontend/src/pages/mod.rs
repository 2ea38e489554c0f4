pub mod scripture_page;
