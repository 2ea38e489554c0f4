//! Client API calls for the scripture service.

use common::{
    filter_set::BookMetadata,
    search_query::QueryRequest,
    search_result::{Chapter, NavigationVolume, SearchResult},
};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

#[cfg(feature = "server")]
fn scripture_client() -> Result<backend::client_utils::scripture_client::ScriptureClient, ServerFnError> {
    backend::client_utils::scripture_client::get_scripture_client().map_err(server_error)
}


#[server]
pub async fn fetch_navigation() -> Result<Vec<NavigationVolume>, ServerFnError> {
    let client = scripture_client()?;
    let x = backend::api::navigation::fetch_navigation(&client).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_book_metadata() -> Result<BookMetadata, ServerFnError> {
    let client = scripture_client()?;
    let x = backend::api::book_metadata::fetch_book_metadata(&client).await;
    x.map_err(server_error)
}

#[server]
pub async fn search_scripture(request: QueryRequest) -> Result<Vec<SearchResult>, ServerFnError> {
    let client = scripture_client()?;
    let x = backend::api::search::search_verses(&client, &request).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_chapter(book_title: String, chapter_number: u32) -> Result<Chapter, ServerFnError> {
    let client = scripture_client()?;
    let x = backend::api::chapter::fetch_chapter(&client, &book_title, chapter_number).await;
    x.map_err(server_error)
}
