//! Verse range picker, volume/book checkboxes and the active filter summary.

use std::collections::BTreeSet;

use common::{filter_set::BookName, verse_range::VerseRange};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::{MdArrowDropDown, MdClose}, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::app_state::AppStateControl;

#[component]
pub fn FilterPanel(on_close: Callback<()>) -> Element {
    let mut filters = use_context::<AppStateControl>().filters;

    rsx! {
        div {
            id: "x-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 16px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h3 { style: "font-size: 16px; font-weight: 600; margin: 0;", "Search Filters" }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: "border: 1px solid #D1D5DB; border-radius: 6px; background: white; padding: 4px 10px; cursor: pointer;",
                        onclick: move |_| filters.write().clear(),
                        "Clear All"
                    }
                    button {
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    }
                }
            }
            VerseRangePicker {}
            ScriptureSelection {}
            ActiveFilters {}
        }
    }
}

#[component]
fn VerseRangePicker() -> Element {
    let mut filters = use_context::<AppStateControl>().filters;
    let verse_range = use_memo(move || filters.read().verse_range());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            label { style: "font-size: 14px; font-weight: 500;", "Search Range" }
            select {
                style: "border: 1px solid #D1D5DB; border-radius: 6px; padding: 6px 8px; font-size: 14px;",
                value: "{verse_range}",
                onchange: move |event: Event<FormData>| match event.value().parse::<VerseRange>() {
                    Ok(range) => filters.write().set_verse_range(range),
                    Err(e) => tracing::warn!("ignoring range selection: {e}"),
                },
                for range in VerseRange::ALL {
                    option {
                        key: "{range}",
                        value: "{range}",
                        selected: range == verse_range(),
                        "{range.label()}"
                    }
                }
            }
            p { style: "font-size: 12px; color: #6B7280; margin: 0;", "{verse_range().description()}" }
        }
    }
}

#[component]
fn ScriptureSelection() -> Element {
    let filters = use_context::<AppStateControl>().filters;
    let book_metadata = use_memo(move || filters.read().book_metadata().clone());
    let mut expanded_volumes = use_signal(BTreeSet::<String>::new);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            label { style: "font-size: 14px; font-weight: 500;", "Scripture Selection" }
            div {
                style: "
                    max-height: 256px;
                    overflow-y: auto;
                    border: 1px solid #E5E7EB;
                    border-radius: 6px;
                    padding: 8px;
                ",
                for (volume, books) in book_metadata() {
                    div {
                        key: "{volume}",
                        div {
                            style: "display: flex; flex-direction: row; align-items: center;",
                            VolumeCheckbox { volume: volume.clone() }
                            button {
                                style: "border: none; background: none; cursor: pointer; display: flex; padding: 0;",
                                onclick: {
                                    let volume = volume.clone();
                                    move |_| {
                                        let mut expanded = expanded_volumes.write();
                                        if !expanded.remove(&volume) {
                                            expanded.insert(volume.clone());
                                        }
                                    }
                                },
                                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
                            }
                        }
                        if expanded_volumes.read().contains(&volume) {
                            div {
                                style: "margin-left: 24px;",
                                for book in books {
                                    BookCheckbox { key: "{book}", book, volume: volume.clone() }
                                }
                            }
                        }
                    }
                }
            }
            p {
                style: "font-size: 12px; color: #6B7280; margin: 0;",
                "Leave empty to search all scriptures, or select specific volumes/books to limit your search."
            }
        }
    }
}

#[component]
fn VolumeCheckbox(volume: ReadSignal<String>) -> Element {
    let mut filters = use_context::<AppStateControl>().filters;
    let is_checked = use_memo(move || filters.read().filter_set().has_volume(&volume.read()));

    rsx! {
        FilterCheckbox {
            is_checked,
            text: volume,
            font_size: 16,
            on_toggle: move |_| filters.write().toggle_volume(&volume.read()),
        }
    }
}

#[component]
fn BookCheckbox(book: ReadSignal<BookName>, volume: ReadSignal<String>) -> Element {
    let mut filters = use_context::<AppStateControl>().filters;
    let is_checked = use_memo(move || filters.read().filter_set().has_book(&book.read()));

    rsx! {
        FilterCheckbox {
            is_checked,
            text: book,
            font_size: 14,
            on_toggle: move |_| filters.write().toggle_book(&book.read(), &volume.read()),
        }
    }
}

#[component]
fn FilterCheckbox(is_checked: ReadSignal<bool>, text: ReadSignal<String>, font_size: u32, on_toggle: Callback<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 2px;
                align-items: center;
            ",
            onclick: move |_| on_toggle.call(()),
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: {font_size}px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{text}"
            }
        }
    }
}

/// Removable chips for every selected volume and book.
#[component]
fn ActiveFilters() -> Element {
    let mut filters = use_context::<AppStateControl>().filters;
    let filter_set = use_memo(move || filters.read().filter_set().clone());
    if filter_set.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            label { style: "font-size: 14px; font-weight: 500;", "Active Filters" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px;",
                for volume in filter_set().volumes {
                    FilterChip {
                        key: "volume-{volume}",
                        text: volume.clone(),
                        background: "#E0E7FF",
                        on_remove: move |_| filters.write().toggle_volume(&volume),
                    }
                }
                for book in filter_set().books {
                    FilterChip {
                        key: "book-{book}",
                        text: book.clone(),
                        background: "#F3F4F6",
                        on_remove: move |_| filters.write().remove_book(&book),
                    }
                }
            }
        }
    }
}

#[component]
fn FilterChip(text: String, background: &'static str, on_remove: Callback<()>) -> Element {
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 4px 8px;
                border-radius: 6px;
                font-size: 12px;
                background-color: {background};
            ",
            "{text}"
            button {
                style: "border: none; background: none; cursor: pointer; padding: 0; display: flex;",
                onclick: move |_| on_remove.call(()),
                Icon { icon: MdClose, style: "width: 12px; height: 12px;" }
            }
        }
    }
}
