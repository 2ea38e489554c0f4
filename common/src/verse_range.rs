//! Proximity parameter: how many consecutive verses all terms must fall in.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

const CHAPTER_LITERAL: &str = "chapter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "VerseRangeRepr", into = "VerseRangeRepr")]
pub enum VerseRange {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Chapter,
}

impl VerseRange {
    /// Options in the order the range picker lists them.
    pub const ALL: [VerseRange; 6] = [
        VerseRange::One,
        VerseRange::Two,
        VerseRange::Three,
        VerseRange::Four,
        VerseRange::Five,
        VerseRange::Chapter,
    ];

    pub fn from_verse_count(count: u32) -> Result<Self, QueryError> {
        match count {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(QueryError::InvalidRange(other.to_string())),
        }
    }

    /// `None` for the whole-chapter range.
    pub fn verse_count(&self) -> Option<u32> {
        match self {
            Self::One => Some(1),
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Chapter => None,
        }
    }

    pub fn label(&self) -> String {
        match self.verse_count() {
            Some(1) => "Single verse".to_string(),
            Some(n) => format!("Within {n} verses"),
            None => "Entire chapter".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self.verse_count() {
            Some(1) => "Search for all words within a single verse".to_string(),
            Some(n) => format!("Search for all words within {n} consecutive verses"),
            None => "Search for all words within the same chapter".to_string(),
        }
    }
}

/// Form value: the bare verse count or `chapter`.
impl Display for VerseRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verse_count() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "{CHAPTER_LITERAL}"),
        }
    }
}

impl FromStr for VerseRange {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == CHAPTER_LITERAL {
            return Ok(Self::Chapter);
        }
        let count = s
            .parse::<u32>()
            .map_err(|_| QueryError::InvalidRange(s.to_string()))?;
        Self::from_verse_count(count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum VerseRangeRepr {
    Count(u32),
    Literal(String),
}

impl From<VerseRange> for VerseRangeRepr {
    fn from(value: VerseRange) -> Self {
        match value.verse_count() {
            Some(n) => VerseRangeRepr::Count(n),
            None => VerseRangeRepr::Literal(CHAPTER_LITERAL.to_string()),
        }
    }
}

impl TryFrom<VerseRangeRepr> for VerseRange {
    type Error = QueryError;

    fn try_from(value: VerseRangeRepr) -> Result<Self, Self::Error> {
        match value {
            VerseRangeRepr::Count(n) => VerseRange::from_verse_count(n),
            VerseRangeRepr::Literal(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_verse() {
        assert_eq!(VerseRange::default(), VerseRange::One);
        assert_eq!(VerseRange::default().label(), "Single verse");
    }

    #[test]
    fn parses_form_values() {
        assert_eq!("3".parse::<VerseRange>(), Ok(VerseRange::Three));
        assert_eq!("chapter".parse::<VerseRange>(), Ok(VerseRange::Chapter));
        for range in VerseRange::ALL {
            assert_eq!(range.to_string().parse::<VerseRange>(), Ok(range));
        }
    }

    #[test]
    fn rejects_values_outside_the_enumeration() {
        for bad in ["0", "6", "-1", "Chapter", "", "two"] {
            assert!(
                matches!(bad.parse::<VerseRange>(), Err(QueryError::InvalidRange(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_bare_integer_or_literal() {
        assert_eq!(serde_json::to_string(&VerseRange::Four).unwrap(), "4");
        assert_eq!(serde_json::to_string(&VerseRange::Chapter).unwrap(), "\"chapter\"");
        assert_eq!(serde_json::from_str::<VerseRange>("2").unwrap(), VerseRange::Two);
        assert!(serde_json::from_str::<VerseRange>("9").is_err());
    }

    #[test]
    fn descriptions_match_the_picker_text() {
        assert_eq!(VerseRange::Three.description(), "Search for all words within 3 consecutive verses");
        assert_eq!(VerseRange::Chapter.label(), "Entire chapter");
    }
}
