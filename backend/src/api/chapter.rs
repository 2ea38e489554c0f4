//! Full chapter text.

use common::{error::ServiceError, search_result::Chapter};
use serde::Deserialize;

use crate::client_utils::scripture_client::{Envelope, ScriptureClient, unwrap_envelope};

#[derive(Debug, Deserialize)]
struct ChapterResponse {
    success: bool,
    chapter: Option<Chapter>,
    error: Option<String>,
}

impl Envelope for ChapterResponse {
    type Payload = Chapter;
    fn into_payload(self) -> Result<Self::Payload, ServiceError> {
        unwrap_envelope(self.success, self.chapter, self.error, "chapter")
    }
}

pub async fn fetch_chapter(client: &ScriptureClient, book_title: &str, chapter_number: u32) -> Result<Chapter, ServiceError> {
    let query = [("book", book_title.to_string()), ("chapter", chapter_number.to_string())];
    let response: ChapterResponse = client.get_json("chapter", &query).await?;
    let chapter = response.into_payload()?;
    tracing::info!("chapter: {} {} ({} verses)", chapter.book_title, chapter.chapter_number, chapter.verses.len());
    Ok(chapter)
}
