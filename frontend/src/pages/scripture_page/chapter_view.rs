use common::search_result::Verse;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowBack};

use crate::data_definitions::app_state::AppStateControl;

/// Chapter text. The back button exists only when a search snapshot does.
#[component]
pub fn ChapterView() -> Element {
    let app_state = use_context::<AppStateControl>();
    let result_navigator = app_state.result_navigator;
    let can_go_back = use_memo(move || result_navigator.read().can_go_back());
    let chapter = use_memo(move || result_navigator.read().chapter().cloned());
    let highlight_verse = use_memo(move || result_navigator.read().highlight_verse());

    rsx! {
        div {
            id: "x-chapter-container",
            style: "padding: 24px; box-sizing: border-box;",
            div {
                style: "max-width: 896px; margin: 0 auto;",
                if can_go_back() {
                    button {
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 8px;
                            border: 1px solid #D1D5DB;
                            border-radius: 6px;
                            background: white;
                            padding: 8px 12px;
                            margin-bottom: 16px;
                            cursor: pointer;
                        ",
                        onclick: move |_| app_state.go_back(),
                        Icon { icon: MdArrowBack, style: "width: 16px; height: 16px;" }
                        "Back to Search Results"
                    }
                }
                if let Some(chapter) = chapter() {
                    div {
                        style: "
                            background: white;
                            border-radius: 8px;
                            padding: 24px;
                            box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                        ",
                        h1 {
                            style: "font-size: 30px; font-weight: 700; color: #111827; margin: 0 0 24px 0;",
                            "{chapter.book_title} Chapter {chapter.chapter_number}"
                        }
                        for verse in chapter.verses {
                            VerseRow {
                                key: "{verse.verse_number}",
                                is_highlighted: highlight_verse() == Some(verse.verse_number),
                                verse,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VerseRow(verse: Verse, is_highlighted: bool) -> Element {
    let (background, border) = if is_highlighted {
        ("#FEF9C3", "4px solid #EAB308")
    } else {
        ("transparent", "4px solid transparent")
    };

    rsx! {
        div {
            style: "
                padding: 12px;
                border-radius: 4px;
                margin-bottom: 8px;
                background-color: {background};
                border-left: {border};
            ",
            span {
                style: "font-weight: 600; color: #2563EB; margin-right: 8px;",
                "{verse.verse_number}"
            }
            span { style: "color: #1F2937;", "{verse.text}" }
        }
    }
}
