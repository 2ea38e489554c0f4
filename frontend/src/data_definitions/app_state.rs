//! App-wide state: the view navigator and the search filters.
//!
//! Both live above the router so that filters and the advanced query
//! survive switching between the welcome, results and chapter views.

use common::{
    error::ServiceError,
    filter_set::FilterSetManager,
    result_navigator::{Completion, ResultNavigator},
    search_query::QueryRequest,
    search_result::{ChapterRef, SearchResult},
};
use dioxus::{logger::tracing, prelude::*};

use crate::api::scripture_api::{fetch_book_metadata, fetch_chapter, search_scripture};

#[derive(Clone, Copy, PartialEq)]
pub struct AppStateControl {
    pub result_navigator: Signal<ResultNavigator>,
    pub filters: Signal<FilterSetManager>,
    pub sidebar_open: Signal<bool>,
}

fn to_service_error(e: ServerFnError) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

fn log_completion(what: &str, completion: Completion) {
    match completion {
        Completion::Applied => {}
        Completion::Stale => tracing::info!("{what}: response superseded by a newer request, dropped"),
        Completion::Failed(e) => tracing::error!("{what}: {e}"),
    }
}

/// Creates the app state, provides it as context and starts the one-off
/// book metadata load for the filter picker.
pub fn use_app_state_provider() -> AppStateControl {
    let result_navigator = use_signal(ResultNavigator::new);
    let mut filters = use_signal(FilterSetManager::default);
    let sidebar_open = use_signal(|| true);

    use_future(move || async move {
        match fetch_book_metadata().await {
            Ok(book_metadata) => filters.write().set_book_metadata(book_metadata),
            Err(e) => tracing::error!("Error fetching book metadata: {e}"),
        }
    });

    use_context_provider(|| AppStateControl { result_navigator, filters, sidebar_open })
}

impl AppStateControl {
    pub fn is_loading(&self) -> bool {
        self.result_navigator.read().is_loading()
    }

    /// Sends `request`; the loading flag is cleared whatever the outcome.
    pub fn perform_search(self, request: QueryRequest) {
        let mut result_navigator = self.result_navigator;
        spawn(async move {
            let ticket = result_navigator.write().begin_search(request.clone());
            let outcome = search_scripture(request).await.map_err(to_service_error);
            let completion = result_navigator.write().finish_search(ticket, outcome);
            log_completion("search", completion);
        });
    }

    /// Quick search: copies the text into the advanced box, then searches
    /// with default range and no filters.
    pub fn quick_search(self, text: String) {
        let Ok(request) = QueryRequest::quick(&text) else {
            return;
        };
        let mut result_navigator = self.result_navigator;
        result_navigator.write().set_search_query(text);
        self.perform_search(request);
    }

    pub fn select_result(self, result: SearchResult) {
        let mut result_navigator = self.result_navigator;
        let chapter_ref = result_navigator.write().select_result(&result);
        self.load_chapter(chapter_ref);
    }

    pub fn open_chapter(self, book_title: String, chapter_number: u32) {
        let chapter_ref = self.result_navigator.read().open_chapter(&book_title, chapter_number);
        self.load_chapter(chapter_ref);
    }

    fn load_chapter(self, chapter_ref: ChapterRef) {
        let mut result_navigator = self.result_navigator;
        spawn(async move {
            let ticket = result_navigator.write().begin_chapter();
            let outcome = fetch_chapter(chapter_ref.book_title.clone(), chapter_ref.chapter_number)
                .await
                .map_err(to_service_error);
            let completion = result_navigator.write().finish_chapter(ticket, &chapter_ref, outcome);
            log_completion("chapter", completion);
        });
    }

    pub fn go_back(self) {
        let mut result_navigator = self.result_navigator;
        if !result_navigator.write().back() {
            tracing::debug!("back: nothing to go back to");
        }
    }
}
