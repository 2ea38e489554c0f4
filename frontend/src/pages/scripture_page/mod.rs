mod chapter_view;
mod search_results_view;
mod welcome_view;

use common::result_navigator::View;
use dioxus::prelude::*;

use crate::data_definitions::app_state::AppStateControl;
use chapter_view::ChapterView;
use search_results_view::SearchResultsView;
use welcome_view::WelcomeView;

/// Single page; the navigator picks which view is shown.
#[component]
pub fn ScripturePage() -> Element {
    let result_navigator = use_context::<AppStateControl>().result_navigator;
    let view = use_memo(move || result_navigator.read().view());

    rsx! {
        Title { "Search Diligently" }
        match view() {
            View::Welcome => rsx! { WelcomeView {} },
            View::SearchResults => rsx! { SearchResultsView {} },
            View::ChapterView => rsx! { ChapterView {} },
        }
    }
}
