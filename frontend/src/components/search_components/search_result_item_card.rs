//! Search result item card component.

use common::search_result::SearchResult;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdBook};

use crate::data_definitions::app_state::AppStateControl;

#[component]
pub fn SearchResultItemCard(result: ReadSignal<SearchResult>, result_index: usize) -> Element {
    let app_state = use_context::<AppStateControl>();
    let SearchResult { highlighted_text, collection, .. } = result.read().clone();
    let reference = result.read().reference();
    let item_index = result_index + 1;

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 0px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
                cursor: pointer;
                box-sizing: border-box;
            ",
            onclick: move |_| app_state.select_result(result.read().clone()),
            // Row 1: INDEX - REFERENCE - SPACER - COLLECTION
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 16px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{item_index}."
                }
                h3 {
                    style: "font-size: 18px; font-weight: 600; color: #2563EB; margin: 0;",
                    "{reference}"
                }
                div { style: "flex: 1 1 auto;" }
                if let Some(collection) = collection {
                    CollectionLabel { collection }
                }
            }
            // Row 2: HIGHLIGHTED TEXT, markup supplied by the search service
            p {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: #374151;
                    margin: 0;
                ",
                dangerous_inner_html: "{highlighted_text}",
            }
        }
    }
}

#[component]
fn CollectionLabel(collection: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 4px; color: rgba(0, 0, 0, 0.5);",
            Icon { icon: MdBook, style: "width: 16px; height: 16px;" }
            span {
                style: "font-size: 14px; font-weight: 300; font-style: italic;",
                "{collection}"
            }
        }
    }
}
