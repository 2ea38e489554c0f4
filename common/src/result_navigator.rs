//! View state machine: welcome, search results and chapter reader.
//!
//! Opening a chapter from a search result saves a single snapshot of the
//! result list so that one "back" step can restore it without re-fetching.
//! The snapshot slot is overwritten, never stacked.
//!
//! Every collaborator call is bracketed by a `begin_*` / `finish_*` pair.
//! `begin_*` hands out a [`RequestTicket`]; a `finish_*` whose ticket has
//! been superseded by a newer request is dropped.

use serde::{Deserialize, Serialize};

use crate::{
    error::ServiceError,
    search_query::QueryRequest,
    search_result::{Chapter, ChapterRef, SearchResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Welcome,
    SearchResults,
    ChapterView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub prior_view: View,
    pub results: Vec<SearchResult>,
    pub params: QueryRequest,
    pub raw_query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// What a `finish_*` call did with the response it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued; the response was dropped.
    Stale,
    /// State left unchanged.
    Failed(ServiceError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultNavigator {
    view: View,
    search_query: String,
    results: Vec<SearchResult>,
    last_params: Option<QueryRequest>,
    chapter: Option<Chapter>,
    highlight_verse: Option<u32>,
    snapshot: Option<NavigationSnapshot>,
    loading: bool,
    latest_ticket: u64,
    pending_search: Option<(RequestTicket, QueryRequest)>,
}

impl ResultNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn last_params(&self) -> Option<&QueryRequest> {
        self.last_params.as_ref()
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapter.as_ref()
    }

    pub fn highlight_verse(&self) -> Option<u32> {
        self.highlight_verse
    }

    pub fn snapshot(&self) -> Option<&NavigationSnapshot> {
        self.snapshot.as_ref()
    }

    /// Text of the advanced search box.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn can_go_back(&self) -> bool {
        self.view == View::ChapterView && self.snapshot.is_some()
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.latest_ticket += 1;
        self.loading = true;
        RequestTicket(self.latest_ticket)
    }

    /// Returns false for a superseded ticket. Clears loading for the latest one.
    fn settle(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn begin_search(&mut self, request: QueryRequest) -> RequestTicket {
        let ticket = self.issue_ticket();
        self.pending_search = Some((ticket, request));
        ticket
    }

    pub fn finish_search(&mut self, ticket: RequestTicket, outcome: Result<Vec<SearchResult>, ServiceError>) -> Completion {
        if !self.settle(ticket) {
            return Completion::Stale;
        }
        let request = match self.pending_search.take() {
            Some((pending_ticket, request)) if pending_ticket == ticket => request,
            _ => return Completion::Stale,
        };
        match outcome {
            Ok(results) => {
                self.results = results;
                self.last_params = Some(request);
                self.view = View::SearchResults;
                Completion::Applied
            }
            Err(e) => Completion::Failed(e),
        }
    }

    /// Picks a result to read in context. When leaving the result list this
    /// overwrites the back-navigation snapshot.
    pub fn select_result(&mut self, result: &SearchResult) -> ChapterRef {
        if self.view == View::SearchResults {
            if let Some(params) = self.last_params.clone() {
                self.snapshot = Some(NavigationSnapshot {
                    prior_view: View::SearchResults,
                    results: self.results.clone(),
                    params,
                    raw_query: self.search_query.clone(),
                });
            }
        }
        result.chapter_ref()
    }

    /// Sidebar chapter pick. Takes no snapshot.
    pub fn open_chapter(&self, book_title: &str, chapter_number: u32) -> ChapterRef {
        ChapterRef {
            book_title: book_title.to_string(),
            chapter_number,
            verse_number: None,
        }
    }

    pub fn begin_chapter(&mut self) -> RequestTicket {
        self.issue_ticket()
    }

    pub fn finish_chapter(
        &mut self,
        ticket: RequestTicket,
        chapter_ref: &ChapterRef,
        outcome: Result<Chapter, ServiceError>,
    ) -> Completion {
        if !self.settle(ticket) {
            return Completion::Stale;
        }
        match outcome {
            Ok(chapter) => {
                self.chapter = Some(chapter);
                self.highlight_verse = chapter_ref.verse_number;
                self.view = View::ChapterView;
                Completion::Applied
            }
            Err(e) => Completion::Failed(e),
        }
    }

    /// Returns to the saved result list. No-op without a snapshot.
    pub fn back(&mut self) -> bool {
        if self.view != View::ChapterView {
            return false;
        }
        let Some(snapshot) = self.snapshot.take() else {
            return false;
        };
        self.results = snapshot.results;
        self.last_params = Some(snapshot.params);
        self.search_query = snapshot.raw_query;
        self.view = snapshot.prior_view;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(book: &str, chapter: u32, verse: u32) -> SearchResult {
        SearchResult {
            book_title: book.to_string(),
            chapter_number: chapter,
            verse_number: verse,
            highlighted_text: format!("text of {book} {chapter}:{verse} with <mark>light</mark>"),
            collection: None,
        }
    }

    fn chapter(book: &str, number: u32) -> Chapter {
        Chapter { book_title: book.to_string(), chapter_number: number, verses: vec![] }
    }

    fn searched(query: &str, results: Vec<SearchResult>) -> ResultNavigator {
        let mut nav = ResultNavigator::new();
        nav.set_search_query(query);
        let ticket = nav.begin_search(QueryRequest::quick(query).unwrap());
        assert_eq!(nav.finish_search(ticket, Ok(results)), Completion::Applied);
        nav
    }

    fn open_result(nav: &mut ResultNavigator, index: usize) {
        let picked = nav.results()[index].clone();
        let chapter_ref = nav.select_result(&picked);
        let ticket = nav.begin_chapter();
        let outcome = Ok(chapter(&chapter_ref.book_title, chapter_ref.chapter_number));
        assert_eq!(nav.finish_chapter(ticket, &chapter_ref, outcome), Completion::Applied);
    }

    #[test]
    fn starts_on_welcome() {
        let nav = ResultNavigator::new();
        assert_eq!(nav.view(), View::Welcome);
        assert!(!nav.is_loading());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn successful_search_shows_results() {
        let mut nav = ResultNavigator::new();
        let ticket = nav.begin_search(QueryRequest::quick("light").unwrap());
        assert!(nav.is_loading());

        nav.finish_search(ticket, Ok(vec![result("John", 1, 5)]));

        assert!(!nav.is_loading());
        assert_eq!(nav.view(), View::SearchResults);
        assert_eq!(nav.results().len(), 1);
        assert_eq!(nav.last_params().map(|p| p.raw_query.as_str()), Some("light"));
    }

    #[test]
    fn failed_search_keeps_state_and_clears_loading() {
        let mut nav = ResultNavigator::new();
        let ticket = nav.begin_search(QueryRequest::quick("light").unwrap());
        let error = ServiceError::Transport("connection refused".into());

        assert_eq!(nav.finish_search(ticket, Err(error.clone())), Completion::Failed(error));
        assert_eq!(nav.view(), View::Welcome);
        assert!(!nav.is_loading());

        let ticket = nav.begin_search(QueryRequest::quick("light").unwrap());
        nav.finish_search(ticket, Err(ServiceError::Collaborator("index offline".into())));
        assert!(!nav.is_loading());
        assert!(nav.last_params().is_none());
    }

    #[test]
    fn back_restores_results_and_query_by_value() {
        let results = vec![result("Genesis", 1, 3), result("John", 1, 5)];
        let mut nav = searched("light, darkness", results.clone());
        nav.set_search_query("light, darkness");

        open_result(&mut nav, 1);
        assert_eq!(nav.view(), View::ChapterView);
        assert_eq!(nav.highlight_verse(), Some(5));
        assert!(nav.can_go_back());

        nav.set_search_query("something typed meanwhile");
        assert!(nav.back());

        assert_eq!(nav.view(), View::SearchResults);
        assert_eq!(nav.results(), results.as_slice());
        assert_eq!(nav.search_query(), "light, darkness");
        assert!(nav.snapshot().is_none());
    }

    #[test]
    fn back_is_single_use() {
        let mut nav = searched("light", vec![result("John", 1, 5)]);
        open_result(&mut nav, 0);
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.view(), View::SearchResults);
    }

    #[test]
    fn sidebar_chapter_has_no_back() {
        let mut nav = ResultNavigator::new();
        let chapter_ref = nav.open_chapter("Isaiah", 53);
        let ticket = nav.begin_chapter();
        nav.finish_chapter(ticket, &chapter_ref, Ok(chapter("Isaiah", 53)));

        assert_eq!(nav.view(), View::ChapterView);
        assert_eq!(nav.highlight_verse(), None);
        assert!(!nav.can_go_back());
        assert!(!nav.back());
        assert_eq!(nav.view(), View::ChapterView);
    }

    #[test]
    fn snapshot_is_overwritten_not_stacked() {
        let mut nav = searched("light", vec![result("John", 1, 5)]);
        open_result(&mut nav, 0);
        nav.back();

        let ticket = nav.begin_search(QueryRequest::quick("grace").unwrap());
        nav.finish_search(ticket, Ok(vec![result("Ephesians", 2, 8)]));
        nav.set_search_query("grace");
        open_result(&mut nav, 0);

        let snapshot = nav.snapshot().unwrap();
        assert_eq!(snapshot.params.raw_query, "grace");
        assert_eq!(snapshot.results[0].book_title, "Ephesians");
    }

    #[test]
    fn failed_chapter_load_stays_on_results() {
        let mut nav = searched("light", vec![result("John", 1, 5)]);
        let picked = nav.results()[0].clone();
        let chapter_ref = nav.select_result(&picked);
        let ticket = nav.begin_chapter();

        let completion = nav.finish_chapter(ticket, &chapter_ref, Err(ServiceError::Transport("timeout".into())));

        assert!(matches!(completion, Completion::Failed(_)));
        assert_eq!(nav.view(), View::SearchResults);
        assert!(!nav.is_loading());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn stale_search_response_is_dropped() {
        let mut nav = ResultNavigator::new();
        let first = nav.begin_search(QueryRequest::quick("first").unwrap());
        let second = nav.begin_search(QueryRequest::quick("second").unwrap());

        assert_eq!(nav.finish_search(second, Ok(vec![result("Alma", 32, 21)])), Completion::Applied);
        assert_eq!(nav.finish_search(first, Ok(vec![result("John", 1, 1)])), Completion::Stale);

        assert_eq!(nav.results()[0].book_title, "Alma");
        assert_eq!(nav.last_params().unwrap().raw_query, "second");
        assert!(!nav.is_loading());
    }

    #[test]
    fn loading_stays_on_until_latest_request_finishes() {
        let mut nav = ResultNavigator::new();
        let first = nav.begin_search(QueryRequest::quick("first").unwrap());
        let second = nav.begin_chapter();

        assert_eq!(nav.finish_search(first, Ok(vec![])), Completion::Stale);
        assert!(nav.is_loading());

        let chapter_ref = nav.open_chapter("Moroni", 10);
        nav.finish_chapter(second, &chapter_ref, Ok(chapter("Moroni", 10)));
        assert!(!nav.is_loading());
        assert_eq!(nav.view(), View::ChapterView);
    }
}
