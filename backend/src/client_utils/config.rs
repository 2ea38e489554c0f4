//! Collaborator settings, read from the environment.

use std::time::Duration;

use anyhow::Context;
use common::search_const::DEFAULT_POST_SEARCH_LIMIT;

pub const DEFAULT_SCRIPTURE_API_URL: &str = "https://scripture-search-backend.vercel.app/api/scripture";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which `/search` flavour the collaborator speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchVariant {
    /// `GET /search?query=&verse_range=&books=`
    #[default]
    Get,
    /// `POST /search` with `{ query, collections, books, limit }`
    Post,
}

impl std::str::FromStr for SearchVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            other => anyhow::bail!("unknown search variant {:?} (expected \"get\" or \"post\")", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub search_variant: SearchVariant,
    pub search_limit: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SCRIPTURE_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            search_variant: SearchVariant::default(),
            search_limit: DEFAULT_POST_SEARCH_LIMIT,
        }
    }
}

impl ServiceConfig {
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys take defaults;
    /// set but malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let base_url = lookup("SCRIPTURE_API_URL").unwrap_or(defaults.base_url);
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("SCRIPTURE_API_URL is empty");
        }

        let timeout = match lookup("SCRIPTURE_API_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.trim().parse::<u64>().with_context(|| format!("SCRIPTURE_API_TIMEOUT_SECS is not a number: {v:?}"))?),
            None => defaults.timeout,
        };
        let search_variant = match lookup("SCRIPTURE_API_VARIANT") {
            Some(v) => v.parse::<SearchVariant>().context("SCRIPTURE_API_VARIANT")?,
            None => defaults.search_variant,
        };
        let search_limit = match lookup("SCRIPTURE_API_SEARCH_LIMIT") {
            Some(v) => v.trim().parse::<u32>().with_context(|| format!("SCRIPTURE_API_SEARCH_LIMIT is not a number: {v:?}"))?,
            None => defaults.search_limit,
        };

        Ok(Self { base_url, timeout, search_variant, search_limit })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
