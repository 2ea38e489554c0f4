//! Volume, book and chapter browser. Chapters opened here carry no way back.

use common::search_result::{NavigationBook, NavigationVolume};
use dioxus::{logger::tracing, prelude::*};

use crate::{api::scripture_api::fetch_navigation, data_definitions::app_state::AppStateControl};

#[component]
pub fn ScriptureSidebar() -> Element {
    let navigation = use_resource(move || fetch_navigation()).suspend()?.cloned();
    let volumes = match navigation {
        Ok(volumes) => volumes,
        Err(e) => {
            tracing::error!("Error fetching navigation data: {e}");
            Vec::new()
        }
    };

    rsx! {
        div {
            id: "x-scripture-sidebar",
            style: "padding: 16px; min-width: 288px;",
            h2 {
                style: "font-size: 18px; font-weight: 600; color: #111827; margin: 0 0 16px 0;",
                "Scriptures"
            }
            for volume in volumes {
                SidebarVolume { key: "{volume.volume_title}", volume }
            }
        }
    }
}

#[component]
fn SidebarVolume(volume: NavigationVolume) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h3 {
                style: "font-size: 16px; font-weight: 500; color: #1F2937; margin: 0 0 8px 0;",
                "{volume.volume_title}"
            }
            div {
                style: "margin-left: 8px;",
                for book in volume.books {
                    SidebarBook { key: "{book.book_title}", book }
                }
            }
        }
    }
}

#[component]
fn SidebarBook(book: NavigationBook) -> Element {
    let app_state = use_context::<AppStateControl>();
    let chapters = book.chapters();
    let book_title = book.book_title.clone();

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h4 {
                style: "font-size: 14px; font-weight: 500; color: #374151; margin: 0 0 4px 0;",
                "{book.book_title}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px; margin-left: 8px;",
                for chapter_number in chapters {
                    button {
                        key: "{chapter_number}",
                        style: "
                            padding: 4px 8px;
                            font-size: 12px;
                            background-color: #F3F4F6;
                            border: none;
                            border-radius: 4px;
                            cursor: pointer;
                        ",
                        onclick: {
                            let book_title = book_title.clone();
                            move |_| app_state.open_chapter(book_title.clone(), chapter_number)
                        },
                        "{chapter_number}"
                    }
                }
            }
        }
    }
}
