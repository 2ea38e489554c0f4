//! Volume and book selection for narrowing a search.
//!
//! Volumes and books form a two-level hierarchy. Every toggle ends with a
//! single call to [`FilterSetManager::reconcile`], which restores the
//! "selected book implies selected parent volume" rule and cascades volume
//! deselection down to that volume's books.

use std::collections::BTreeMap;
use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::verse_range::VerseRange;

pub type VolumeName = String;
pub type BookName = String;

/// Volume -> books, as served by the `/book-metadata` endpoint.
///
/// Volumes keep the order the service sent them in. On the wire this is a
/// JSON object; a repeated volume key replaces the earlier entry in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookMetadata(Vec<(VolumeName, Vec<BookName>)>);

impl BookMetadata {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BookName])> {
        self.0.iter().map(|(volume, books)| (volume.as_str(), books.as_slice()))
    }

    pub fn volumes(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(volume, _)| volume)
    }

    pub fn books_of(&self, volume: &str) -> Option<&[BookName]> {
        self.iter().find(|(v, _)| *v == volume).map(|(_, books)| books)
    }

    /// First volume, in service order, that lists `book`.
    pub fn volume_of(&self, book: &str) -> Option<&str> {
        self.iter().find(|(_, books)| books.iter().any(|b| b == book)).map(|(volume, _)| volume)
    }

    fn insert(&mut self, volume: VolumeName, books: Vec<BookName>) {
        match self.0.iter_mut().find(|(v, _)| *v == volume) {
            Some(entry) => entry.1 = books,
            None => self.0.push((volume, books)),
        }
    }
}

impl FromIterator<(VolumeName, Vec<BookName>)> for BookMetadata {
    fn from_iter<I: IntoIterator<Item = (VolumeName, Vec<BookName>)>>(iter: I) -> Self {
        let mut metadata = Self::default();
        for (volume, books) in iter {
            metadata.insert(volume, books);
        }
        metadata
    }
}

impl IntoIterator for BookMetadata {
    type Item = (VolumeName, Vec<BookName>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for BookMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (volume, books) in &self.0 {
            map.serialize_entry(volume, books)?;
        }
        map.end()
    }
}

struct BookMetadataVisitor;

impl<'de> Visitor<'de> for BookMetadataVisitor {
    type Value = BookMetadata;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of volume names to book name lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut metadata = BookMetadata(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((volume, books)) = access.next_entry::<VolumeName, Vec<BookName>>()? {
            metadata.insert(volume, books);
        }
        Ok(metadata)
    }
}

impl<'de> Deserialize<'de> for BookMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BookMetadataVisitor)
    }
}

/// Selected volumes and books, each kept in insertion order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub volumes: Vec<VolumeName>,
    pub books: Vec<BookName>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty() && self.books.is_empty()
    }

    pub fn has_volume(&self, volume: &str) -> bool {
        self.volumes.iter().any(|v| v == volume)
    }

    pub fn has_book(&self, book: &str) -> bool {
        self.books.iter().any(|b| b == book)
    }

    fn insert_volume(&mut self, volume: &str) {
        if !self.has_volume(volume) {
            self.volumes.push(volume.to_string());
        }
    }
}

/// Toggle that was just applied, as seen by [`FilterSetManager::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterChange<'a> {
    VolumeSelected,
    VolumeDeselected(&'a str),
    /// Carries the parent volume the caller named for the book.
    BookSelected(&'a str),
    BookDeselected,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSetManager {
    filter_set: FilterSet,
    verse_range: VerseRange,
    book_metadata: BookMetadata,
    /// Parent named by the last `toggle_book` call for each book.
    book_parents: BTreeMap<BookName, VolumeName>,
}

impl FilterSetManager {
    pub fn new(book_metadata: BookMetadata) -> Self {
        Self { book_metadata, ..Self::default() }
    }

    pub fn filter_set(&self) -> &FilterSet {
        &self.filter_set
    }

    pub fn verse_range(&self) -> VerseRange {
        self.verse_range
    }

    pub fn book_metadata(&self) -> &BookMetadata {
        &self.book_metadata
    }

    pub fn set_book_metadata(&mut self, book_metadata: BookMetadata) {
        self.book_metadata = book_metadata;
    }

    pub fn set_verse_range(&mut self, verse_range: VerseRange) {
        self.verse_range = verse_range;
    }

    pub fn toggle_volume(&mut self, volume: &str) {
        let change = if self.filter_set.has_volume(volume) {
            self.filter_set.volumes.retain(|v| v != volume);
            FilterChange::VolumeDeselected(volume)
        } else {
            self.filter_set.volumes.push(volume.to_string());
            FilterChange::VolumeSelected
        };
        self.reconcile(change);
    }

    pub fn toggle_book(&mut self, book: &str, parent_volume: &str) {
        self.book_parents.insert(book.to_string(), parent_volume.to_string());
        let change = if self.filter_set.has_book(book) {
            self.filter_set.books.retain(|b| b != book);
            FilterChange::BookDeselected
        } else {
            self.filter_set.books.push(book.to_string());
            FilterChange::BookSelected(parent_volume)
        };
        self.reconcile(change);
    }

    /// Drops one book from the selection. Its volume stays selected.
    pub fn remove_book(&mut self, book: &str) {
        if self.filter_set.has_book(book) {
            self.filter_set.books.retain(|b| b != book);
            self.reconcile(FilterChange::BookDeselected);
        }
    }

    pub fn clear(&mut self) {
        self.filter_set = FilterSet::default();
        self.verse_range = VerseRange::default();
    }

    /// Number shown on the "Filters" badge.
    pub fn active_filter_count(&self) -> usize {
        let range_changed = usize::from(self.verse_range != VerseRange::default());
        self.filter_set.volumes.len() + self.filter_set.books.len() + range_changed
    }

    /// The parent named when the book was toggled, else the first volume in
    /// the metadata that lists it.
    pub fn parent_of(&self, book: &str) -> Option<&str> {
        self.book_parents
            .get(book)
            .map(String::as_str)
            .or_else(|| self.book_metadata.volume_of(book))
    }

    fn belongs_to(&self, book: &str, volume: &str) -> bool {
        self.parent_of(book) == Some(volume)
            || self.book_metadata.books_of(volume).is_some_and(|books| books.iter().any(|b| b == book))
    }

    /// Restores parent/child consistency after `change`.
    ///
    /// Downward: a deselected volume takes its books with it.
    /// Upward: a newly selected book brings the parent it was toggled with,
    /// and every selected book with a known parent has that parent selected.
    fn reconcile(&mut self, change: FilterChange<'_>) {
        match change {
            FilterChange::VolumeDeselected(volume) => {
                let orphaned: Vec<BookName> = self
                    .filter_set
                    .books
                    .iter()
                    .filter(|book| self.belongs_to(book, volume))
                    .cloned()
                    .collect();
                self.filter_set.books.retain(|book| !orphaned.contains(book));
            }
            FilterChange::BookSelected(parent_volume) => self.filter_set.insert_volume(parent_volume),
            FilterChange::VolumeSelected | FilterChange::BookDeselected => {}
        }

        let missing_parents: Vec<VolumeName> = self
            .filter_set
            .books
            .iter()
            .filter_map(|book| self.parent_of(book))
            .filter(|parent| !self.filter_set.has_volume(parent))
            .map(str::to_string)
            .collect();
        for parent in missing_parents {
            self.filter_set.insert_volume(&parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> BookMetadata {
        [
            ("Old Testament".to_string(), vec!["Genesis".to_string(), "Exodus".to_string(), "Isaiah".to_string()]),
            ("New Testament".to_string(), vec!["Matthew".to_string(), "John".to_string()]),
        ]
        .into_iter()
        .collect()
    }

    fn assert_consistent(manager: &FilterSetManager) {
        for book in &manager.filter_set().books {
            let parent = manager.parent_of(book).expect("parent known");
            assert!(manager.filter_set().has_volume(parent), "{book} selected without {parent}");
        }
    }

    #[test]
    fn selecting_a_book_selects_its_volume() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_book("Genesis", "Old Testament");

        assert_eq!(manager.filter_set().books, vec!["Genesis"]);
        assert_eq!(manager.filter_set().volumes, vec!["Old Testament"]);
    }

    #[test]
    fn selecting_a_book_without_metadata_uses_the_given_parent() {
        let mut manager = FilterSetManager::default();
        manager.toggle_book("Genesis", "Old Testament");
        assert!(manager.filter_set().has_volume("Old Testament"));

        manager.toggle_volume("Old Testament");
        assert!(manager.filter_set().is_empty());
    }

    #[test]
    fn deselecting_a_volume_drops_its_books() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_book("Genesis", "Old Testament");
        manager.toggle_book("Exodus", "Old Testament");
        manager.toggle_book("John", "New Testament");

        manager.toggle_volume("Old Testament");

        assert_eq!(manager.filter_set().books, vec!["John"]);
        assert_eq!(manager.filter_set().volumes, vec!["New Testament"]);
        assert_consistent(&manager);
    }

    #[test]
    fn selecting_a_volume_leaves_books_alone() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_volume("New Testament");

        assert_eq!(manager.filter_set().volumes, vec!["New Testament"]);
        assert!(manager.filter_set().books.is_empty());
    }

    #[test]
    fn deselecting_a_book_keeps_the_volume() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_book("Isaiah", "Old Testament");
        manager.toggle_book("Isaiah", "Old Testament");

        assert!(manager.filter_set().books.is_empty());
        assert_eq!(manager.filter_set().volumes, vec!["Old Testament"]);
    }

    #[test]
    fn remove_book_keeps_the_volume() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_book("Matthew", "New Testament");
        manager.remove_book("Matthew");
        manager.remove_book("Matthew");

        assert!(manager.filter_set().books.is_empty());
        assert_eq!(manager.filter_set().volumes, vec!["New Testament"]);
    }

    #[test]
    fn selection_order_is_insertion_order() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_volume("New Testament");
        manager.toggle_book("Exodus", "Old Testament");
        manager.toggle_book("Genesis", "Old Testament");
        manager.toggle_volume("New Testament");
        manager.toggle_volume("New Testament");

        assert_eq!(manager.filter_set().volumes, vec!["Old Testament", "New Testament"]);
        assert_eq!(manager.filter_set().books, vec!["Exodus", "Genesis"]);
    }

    #[test]
    fn clear_resets_sets_and_range() {
        let mut manager = FilterSetManager::new(metadata());
        manager.toggle_book("John", "New Testament");
        manager.set_verse_range(VerseRange::Chapter);
        assert_eq!(manager.active_filter_count(), 3);

        manager.clear();

        assert!(manager.filter_set().is_empty());
        assert_eq!(manager.verse_range(), VerseRange::One);
        assert_eq!(manager.active_filter_count(), 0);
        assert_eq!(manager.book_metadata().len(), 2);
    }

    #[test]
    fn every_toggle_sequence_stays_consistent() {
        let mut manager = FilterSetManager::new(metadata());
        let steps: [(&str, Option<&str>); 8] = [
            ("Genesis", Some("Old Testament")),
            ("New Testament", None),
            ("John", Some("New Testament")),
            ("Old Testament", None),
            ("Exodus", Some("Old Testament")),
            ("New Testament", None),
            ("Matthew", Some("New Testament")),
            ("Exodus", Some("Old Testament")),
        ];
        for (name, parent) in steps {
            match parent {
                Some(parent) => manager.toggle_book(name, parent),
                None => manager.toggle_volume(name),
            }
            assert_consistent(&manager);
        }
    }

    #[test]
    fn the_named_parent_is_selected_even_when_metadata_disagrees() {
        let mut manager = FilterSetManager::new([("Old Testament".to_string(), vec!["Genesis".to_string()])].into_iter().collect());
        manager.toggle_book("Genesis", "Pentateuch");

        assert_eq!(manager.filter_set().volumes, vec!["Pentateuch"]);
        assert_eq!(manager.parent_of("Genesis"), Some("Pentateuch"));
        assert_consistent(&manager);
    }

    #[test]
    fn book_metadata_keeps_service_order() {
        let json = r#"{
            "Old Testament": ["Genesis", "Exodus"],
            "New Testament": ["Matthew"],
            "Book of Mormon": ["1 Nephi"],
            "Doctrine and Covenants": ["Doctrine and Covenants"],
            "Pearl of Great Price": ["Moses"]
        }"#;
        let metadata: BookMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(
            metadata.volumes().collect::<Vec<_>>(),
            vec!["Old Testament", "New Testament", "Book of Mormon", "Doctrine and Covenants", "Pearl of Great Price"]
        );
        assert_eq!(metadata.books_of("Old Testament"), Some(&["Genesis".to_string(), "Exodus".to_string()][..]));
        assert_eq!(serde_json::to_string(&metadata).unwrap().find("Old Testament"), Some(2));
    }

    #[test]
    fn shared_book_names_resolve_to_the_first_listed_volume() {
        let metadata: BookMetadata = serde_json::from_str(
            r#"{"Pearl of Great Price": ["Moses"], "Book of Moses": ["Moses"]}"#,
        )
        .unwrap();

        assert_eq!(metadata.volume_of("Moses"), Some("Pearl of Great Price"));
    }
}
