pub mod quick_search_bar;
pub mod advanced_search;
pub mod search_term_labels;
pub mod filter_panel;
pub mod search_result_item_card;
