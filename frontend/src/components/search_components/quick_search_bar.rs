use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::app_state::AppStateControl;

/// One-line search: default range, no filters. The text is also copied into
/// the advanced search box.
#[component]
pub fn QuickSearchBar() -> Element {
    let app_state = use_context::<AppStateControl>();
    let mut quick_query = use_signal(String::new);
    let is_loading = use_memo(move || app_state.result_navigator.read().is_loading());
    let trigger_search = move |_: ()| {
        let text = quick_query.read().clone();
        if text.trim().is_empty() {
            return;
        }
        app_state.quick_search(text);
    };

    rsx! {
        div {
            id: "x-quick-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 8px;
                margin-bottom: 16px;
            ",
            input {
                r#type: "text",
                placeholder: "Quick search...",
                style: "
                    flex:1;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    outline: none;
                    padding: 8px 12px;
                    color: #111827;
                    font-size: 16px;
                ",
                value: "{quick_query}",
                oninput: move |event: Event<FormData>| quick_query.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
            button {
                style: "
                    border: none;
                    border-radius: 6px;
                    background-color: #111827;
                    padding: 8px 12px;
                    cursor: pointer;
                ",
                disabled: is_loading(),
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 16px; height: 16px; color: white;" }
            }
        }
    }
}
