use serde::{Deserialize, Serialize};

use crate::filter_set::VolumeName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub book_title: String,
    pub chapter_number: u32,
    pub verse_number: u32,
    /// Markup from the service, embedded as-is.
    pub highlighted_text: String,
    /// Only reported by the POST search variant.
    #[serde(default)]
    pub collection: Option<VolumeName>,
}

impl SearchResult {
    pub fn chapter_ref(&self) -> ChapterRef {
        ChapterRef {
            book_title: self.book_title.clone(),
            chapter_number: self.chapter_number,
            verse_number: Some(self.verse_number),
        }
    }

    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book_title, self.chapter_number, self.verse_number)
    }
}

/// Chapter to open, with the verse to highlight when coming from a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRef {
    pub book_title: String,
    pub chapter_number: u32,
    pub verse_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub verse_number: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub book_title: String,
    pub chapter_number: u32,
    pub verses: Vec<Verse>,
}

/// Sidebar entry: a volume with its books and their chapter counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationVolume {
    pub volume_title: String,
    pub books: Vec<NavigationBook>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationBook {
    pub book_title: String,
    pub chapter_count: u32,
}

impl NavigationBook {
    pub fn chapters(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.chapter_count
    }
}
