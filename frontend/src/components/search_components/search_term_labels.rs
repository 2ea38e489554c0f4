use common::search_terms::{SearchTerm, parse_search_terms, remove_search_term};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

/// Live chips for the terms in `search_query`. Removing a chip writes the
/// re-joined remaining terms back through `on_query_change`.
#[component]
pub fn SearchTermLabels(search_query: ReadSignal<String>, on_query_change: Callback<String>) -> Element {
    let terms = use_memo(move || parse_search_terms(&search_query.read()));
    if terms.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-search-term-labels",
            style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
            div {
                style: "font-size: 14px; color: #6B7280; margin-right: 8px;",
                "Search terms:"
            }
            for (index, term) in terms.read().iter().cloned().enumerate() {
                SearchTermChip {
                    key: "{index}-{term.text}",
                    term,
                    on_remove: move |_| {
                        let query = remove_search_term(&search_query.read(), index);
                        on_query_change.call(query);
                    },
                }
            }
            if terms.read().len() > 1 {
                button {
                    style: "
                        border: 1px solid #D1D5DB;
                        border-radius: 6px;
                        background-color: white;
                        padding: 2px 8px;
                        font-size: 12px;
                        cursor: pointer;
                    ",
                    onclick: move |_| on_query_change.call(String::new()),
                    "Clear all"
                }
            }
        }
    }
}

#[component]
fn SearchTermChip(term: SearchTerm, on_remove: Callback<()>) -> Element {
    let (background, color, border) = if term.is_phrase {
        ("#DBEAFE", "#1E40AF", "#BFDBFE")
    } else {
        ("#DCFCE7", "#166534", "#BBF7D0")
    };

    rsx! {
        div {
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 4px 12px;
                border-radius: 1000px;
                font-size: 14px;
                background-color: {background};
                color: {color};
                border: 1px solid {border};
            ",
            span { style: "font-size: 12px; opacity: 0.75;", "{term.kind_label()}:" }
            span { style: "font-weight: 500;", "\"{term.text}\"" }
            button {
                style: "border: none; background: none; cursor: pointer; padding: 0; display: flex;",
                onclick: move |_| on_remove.call(()),
                Icon { icon: MdClose, style: "width: 12px; height: 12px; color: {color};" }
            }
        }
    }
}
