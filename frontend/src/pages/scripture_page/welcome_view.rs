use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdBook};

use crate::components::search_components::{advanced_search::AdvancedSearch, quick_search_bar::QuickSearchBar};

#[component]
pub fn WelcomeView() -> Element {
    rsx! {
        div {
            id: "x-welcome-container",
            style: "
                display:flex;
                flex: 1;
                align-items: center;
                justify-content: center;
                padding: 36px 16px;
                box-sizing: border-box;
            ",
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    max-width: 672px;
                    width: 100%;
                ",
                Icon { icon: MdBook, style: "width: 64px; height: 64px; color: #2563EB; margin-bottom: 24px;" }
                h1 {
                    style: "font-size: 36px; font-weight: 700; color: #111827; margin: 0 0 16px 0;",
                    "Search Diligently"
                }
                p {
                    style: "font-size: 20px; color: #4B5563; margin: 0 0 32px 0;",
                    "Advanced Scripture Search Tool - Explore the LDS Canon with powerful search capabilities"
                }
                div {
                    style: "
                        width: 100%;
                        background: white;
                        border-radius: 8px;
                        padding: 24px;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                        box-sizing: border-box;
                        text-align: left;
                    ",
                    QuickSearchBar {}
                    AdvancedSearch {}
                }
            }
        }
    }
}
