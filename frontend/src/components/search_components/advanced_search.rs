//! Advanced search card: query box, term labels and the filter panel.

use common::search_query::QueryRequest;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_content_icons::MdFilterList}};

use crate::{
    components::search_components::{filter_panel::FilterPanel, search_term_labels::SearchTermLabels},
    data_definitions::app_state::AppStateControl,
};

#[component]
pub fn AdvancedSearch() -> Element {
    let app_state = use_context::<AppStateControl>();
    let mut result_navigator = app_state.result_navigator;
    let filters = app_state.filters;
    let mut show_filters = use_signal(|| false);

    let search_query = use_memo(move || result_navigator.read().search_query().to_string());
    let is_loading = use_memo(move || result_navigator.read().is_loading());
    let active_filter_count = use_memo(move || filters.read().active_filter_count());
    let search_disabled = use_memo(move || is_loading() || search_query.read().trim().is_empty());

    let trigger_search = move |_: ()| {
        let request = {
            let filters = filters.read();
            QueryRequest::compose(&search_query.read(), &filters.verse_range().to_string(), filters.filter_set())
        };
        match request {
            Ok(request) => app_state.perform_search(request),
            Err(e) => tracing::debug!("search not sent: {e}"),
        }
    };

    rsx! {
        div {
            id: "x-advanced-search-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 16px;
                background-color: white;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 18px; font-weight: 600;",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                "Advanced Scripture Search"
            }

            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                input {
                    r#type: "text",
                    placeholder: "Search for words or phrases...",
                    style: "
                        flex: 1;
                        border: 1px solid #D1D5DB;
                        border-radius: 6px;
                        outline: none;
                        padding: 8px 12px;
                        font-size: 16px;
                    ",
                    value: "{search_query}",
                    oninput: move |event: Event<FormData>| result_navigator.write().set_search_query(event.value()),
                    onkeydown: move |event: Event<KeyboardData>| {
                        if event.key() == Key::Enter {
                            trigger_search(());
                        }
                    },
                }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        border: 1px solid #D1D5DB;
                        border-radius: 6px;
                        background-color: white;
                        padding: 8px 12px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let shown = *show_filters.read();
                        show_filters.set(!shown);
                    },
                    Icon { icon: MdFilterList, style: "width: 16px; height: 16px;" }
                    "Filters"
                    if active_filter_count() > 0 {
                        span {
                            style: "
                                background-color: #111827;
                                color: white;
                                border-radius: 1000px;
                                padding: 2px 8px;
                                font-size: 12px;
                            ",
                            "{active_filter_count}"
                        }
                    }
                }
                button {
                    style: "
                        border: none;
                        border-radius: 6px;
                        background-color: #111827;
                        color: white;
                        padding: 8px 16px;
                        cursor: pointer;
                    ",
                    disabled: search_disabled(),
                    onclick: move |_| trigger_search(()),
                    if is_loading() { "Searching..." } else { "Search" }
                }
            }

            SearchTermLabels {
                search_query,
                on_query_change: move |query: String| result_navigator.write().set_search_query(query),
            }

            if show_filters() {
                FilterPanel { on_close: move |_| show_filters.set(false) }
            }
        }
    }
}
