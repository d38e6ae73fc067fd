//! Title and tag search over the catalog.
//!
//! Searches return [`SearchResults`], an ordered candidate list numbered
//! from 1. The caller may turn a user's answer into a video with
//! [`SearchResults::select`]; anything that is not a number in range is
//! treated as "no selection".

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::VideoCatalog;
use crate::video::{VideoRecord, sort_by_title};

/// Character every searchable tag must contain.
pub const TAG_MARKER: char = '#';

/// What a search matched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "query", rename_all = "lowercase")]
pub enum SearchQuery {
    /// Case-insensitive title substring.
    Title(String),
    /// Case-insensitive exact tag.
    Tag(String),
}

impl SearchQuery {
    /// The text the user searched for.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Title(text) | Self::Tag(text) => text,
        }
    }
}

/// Ordered search hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    query: SearchQuery,
    videos: Vec<Arc<VideoRecord>>,
}

impl SearchResults {
    /// The query that produced these results.
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Matching videos, sorted by title.
    #[must_use]
    pub fn videos(&self) -> &[Arc<VideoRecord>] {
        &self.videos
    }

    /// Matches paired with their 1-based position.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Arc<VideoRecord>)> {
        self.videos.iter().enumerate().map(|(i, video)| (i + 1, video))
    }

    /// Video at a 1-based position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Arc<VideoRecord>> {
        position.checked_sub(1).and_then(|i| self.videos.get(i))
    }

    /// Resolve a user's answer to a video.
    ///
    /// Surrounding whitespace is ignored. Non-numeric answers, zero and
    /// out-of-range numbers yield `None`.
    #[must_use]
    pub fn select(&self, answer: &str) -> Option<&Arc<VideoRecord>> {
        let position = answer.trim().parse::<usize>().ok()?;
        self.get(position)
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Read-only search over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    catalog: &'a VideoCatalog,
}

impl<'a> SearchEngine<'a> {
    /// Search the given catalog.
    #[must_use]
    pub const fn new(catalog: &'a VideoCatalog) -> Self {
        Self { catalog }
    }

    /// Videos whose title contains `term`, ignoring case.
    #[must_use]
    pub fn by_title(&self, term: &str) -> SearchResults {
        let needle = term.to_lowercase();
        let videos = self.collect(|video| video.title().to_lowercase().contains(&needle));
        debug!("Title search '{}': {} matches", term, videos.len());
        SearchResults {
            query: SearchQuery::Title(term.to_string()),
            videos,
        }
    }

    /// Videos tagged with `tag`, ignoring case.
    ///
    /// A tag without `#` never matches anything.
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> SearchResults {
        let videos = if tag.contains(TAG_MARKER) {
            self.collect(|video| video.has_tag(tag))
        } else {
            Vec::new()
        };
        debug!("Tag search '{}': {} matches", tag, videos.len());
        SearchResults {
            query: SearchQuery::Tag(tag.to_string()),
            videos,
        }
    }

    fn collect(&self, predicate: impl Fn(&VideoRecord) -> bool) -> Vec<Arc<VideoRecord>> {
        let mut videos: Vec<Arc<VideoRecord>> = self
            .catalog
            .iter()
            .filter(|video| predicate(video))
            .cloned()
            .collect();
        sort_by_title(&mut videos);
        videos
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn test_catalog() -> VideoCatalog {
        VideoCatalog::new([
            VideoRecord::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
            VideoRecord::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
            VideoRecord::new("another_cat_video_id", "Another Cat Video", ["#cat", "#animal"]),
            VideoRecord::new("life_at_google_video_id", "Life at Google", ["#google", "#career"]),
            VideoRecord::new("nothing_video_id", "Video about nothing", Vec::<String>::new()),
        ])
    }

    fn ids(results: &SearchResults) -> Vec<&str> {
        results.videos().iter().map(|v| v.id()).collect()
    }

    #[test]
    fn test_by_title_ignores_case_and_sorts() {
        let catalog = test_catalog();
        let results = SearchEngine::new(&catalog).by_title("CAT");
        assert_eq!(ids(&results), ["amazing_cats_video_id", "another_cat_video_id"]);
        assert_eq!(results.query(), &SearchQuery::Title("CAT".to_string()));
    }

    #[test]
    fn test_by_title_no_match() {
        let catalog = test_catalog();
        let results = SearchEngine::new(&catalog).by_title("blah");
        assert!(results.is_empty());
    }

    #[test]
    fn test_by_tag_requires_marker() {
        let catalog = test_catalog();
        let engine = SearchEngine::new(&catalog);
        assert!(engine.by_tag("cat").is_empty());
        assert!(engine.by_tag("animal").is_empty());
    }

    #[test]
    fn test_by_tag_exact_ignoring_case() {
        let catalog = test_catalog();
        let engine = SearchEngine::new(&catalog);

        let results = engine.by_tag("#ANIMAL");
        assert_eq!(
            ids(&results),
            [
                "amazing_cats_video_id",
                "another_cat_video_id",
                "funny_dogs_video_id"
            ]
        );
        // Exact match only.
        assert!(engine.by_tag("#anim").is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = VideoCatalog::new([
            VideoRecord::new("second", "Same", ["#t"]),
            VideoRecord::new("first", "Same", ["#t"]),
        ]);
        let results = SearchEngine::new(&catalog).by_tag("#t");
        assert_eq!(ids(&results), ["second", "first"]);
    }

    #[test]
    fn test_numbered_from_one() {
        let catalog = test_catalog();
        let results = SearchEngine::new(&catalog).by_title("cat");
        let numbered: Vec<_> = results.numbered().map(|(n, v)| (n, v.id())).collect();
        assert_eq!(
            numbered,
            [(1, "amazing_cats_video_id"), (2, "another_cat_video_id")]
        );
    }

    #[test]
    fn test_select() {
        let catalog = test_catalog();
        let results = SearchEngine::new(&catalog).by_title("cat");

        assert_eq!(results.select("1").unwrap().id(), "amazing_cats_video_id");
        assert_eq!(results.select(" 2 \n").unwrap().id(), "another_cat_video_id");
        assert!(results.select("0").is_none());
        assert!(results.select("3").is_none());
        assert!(results.select("-1").is_none());
        assert!(results.select("No").is_none());
        assert!(results.select("").is_none());
    }
}
