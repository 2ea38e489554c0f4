/// Result cap sent with the POST search variant when none is configured.
pub const DEFAULT_POST_SEARCH_LIMIT: u32 = 100;

/// Books list separator in the GET search query string.
pub const BOOKS_PARAM_SEPARATOR: &str = ",";
