use dioxus::prelude::*;

use crate::{
    components::search_components::{
        advanced_search::AdvancedSearch, quick_search_bar::QuickSearchBar, search_result_item_card::SearchResultItemCard,
    },
    data_definitions::app_state::AppStateControl,
};

#[component]
pub fn SearchResultsView() -> Element {
    let result_navigator = use_context::<AppStateControl>().result_navigator;
    let results = use_memo(move || result_navigator.read().results().to_vec());

    rsx! {
        div {
            id: "x-search-results-container",
            style: "padding: 24px; box-sizing: border-box;",
            div {
                style: "max-width: 896px; margin: 0 auto;",
                div {
                    style: "
                        background: white;
                        border-radius: 8px;
                        padding: 24px;
                        margin-bottom: 24px;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                    ",
                    QuickSearchBar {}
                    AdvancedSearch {}
                }
                h2 {
                    style: "font-size: 24px; font-weight: 700; color: #111827; margin: 0 0 16px 0;",
                    "Search Results ({results.read().len()})"
                }
                div {
                    id: "x-search-result-list",
                    for (result_index, result) in results().into_iter().enumerate() {
                        SearchResultItemCard {
                            key: "{result_index}-{result.reference()}",
                            result,
                            result_index,
                        }
                    }
                }
            }
        }
    }
}
