//! Video records and the keyed collection that holds them.
//!
//! A [`VideoCollection`] backs both the catalog and every playlist. Records
//! are stored behind [`Arc`] so the player and playlists can hold on to a
//! catalog entry without copying it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    id: String,
    title: String,
    tags: Vec<String>,
}

impl VideoRecord {
    /// Create a new record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Unique video id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tags in their original case and order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check whether the record carries `tag`, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// Formats as `Title (id) [#tag1 #tag2]`.
impl fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// Keyed container of video records.
///
/// At most one record is kept per id. Adding a record whose id is already
/// present replaces the old record in place (last write wins) and keeps its
/// original position, so [`VideoCollection::all`] stays in first-insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct VideoCollection {
    videos: IndexMap<String, Arc<VideoRecord>>,
}

impl VideoCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record by id.
    pub fn add(&mut self, video: impl Into<Arc<VideoRecord>>) {
        let video = video.into();
        self.videos.insert(video.id().to_string(), video);
    }

    /// Remove a record, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Arc<VideoRecord>> {
        self.videos.shift_remove(id)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Whether a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.videos.contains_key(id)
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<VideoRecord>> {
        self.videos.get(id)
    }

    /// Record at a position in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Arc<VideoRecord>> {
        self.videos.get_index(index).map(|(_, video)| video)
    }

    /// Snapshot of all records in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<VideoRecord>> {
        self.videos.values().cloned().collect()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<VideoRecord>> {
        self.videos.values()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the collection has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<VideoRecord> for VideoCollection {
    fn from_iter<I: IntoIterator<Item = VideoRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for video in iter {
            collection.add(video);
        }
        collection
    }
}

/// Sort records by title (case-sensitive, ascending).
///
/// The sort is stable, so equal titles keep their incoming order.
pub fn sort_by_title(videos: &mut [Arc<VideoRecord>]) {
    videos.sort_by(|a, b| a.title().cmp(b.title()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn cat_video() -> VideoRecord {
        VideoRecord::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"])
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            cat_video().to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
        let untagged = VideoRecord::new("id", "Video about nothing", Vec::<String>::new());
        assert_eq!(untagged.to_string(), "Video about nothing (id) []");
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let video = VideoRecord::new("v", "Cats", ["#Cat"]);
        assert!(video.has_tag("#cat"));
        assert!(video.has_tag("#CAT"));
        assert!(!video.has_tag("cat"));
        assert!(!video.has_tag("#ca"));
    }

    #[test]
    fn test_add_and_get() {
        let mut collection = VideoCollection::new();
        collection.add(cat_video());

        assert!(collection.contains("amazing_cats_video_id"));
        assert_eq!(collection.len(), 1);
        let video = collection.get("amazing_cats_video_id").expect("video should exist");
        assert_eq!(video.title(), "Amazing Cats");
        assert!(collection.get("missing").is_none());
    }

    #[test]
    fn test_add_overwrites_last_write_wins() {
        let mut collection = VideoCollection::new();
        collection.add(VideoRecord::new("a", "First", ["#x"]));
        collection.add(VideoRecord::new("b", "Other", ["#y"]));
        collection.add(VideoRecord::new("a", "Second", ["#z"]));

        assert_eq!(collection.len(), 2);
        let video = collection.get("a").expect("video should exist");
        assert_eq!(video.title(), "Second");
        assert_eq!(video.tags(), ["#z"]);
        // The replaced record keeps its original slot.
        let ids: Vec<_> = collection.iter().map(|v| v.id().to_string()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut collection = VideoCollection::new();
        collection.add(cat_video());

        assert!(collection.remove("missing").is_none());
        assert_eq!(collection.len(), 1);

        let removed = collection.remove("amazing_cats_video_id");
        assert!(removed.is_some());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_remove_preserves_order_of_the_rest() {
        let mut collection: VideoCollection = ["a", "b", "c"]
            .into_iter()
            .map(|id| VideoRecord::new(id, id.to_uppercase(), Vec::<String>::new()))
            .collect();

        collection.remove("b");
        let ids: Vec<_> = collection.all().iter().map(|v| v.id().to_string()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut collection = VideoCollection::new();
        collection.add(cat_video());
        collection.add(VideoRecord::new("dog", "Dogs", ["#dog"]));

        collection.clear();
        assert!(collection.is_empty());
        assert!(collection.all().is_empty());
    }

    #[test]
    fn test_sort_by_title_is_stable() {
        let mut videos: Vec<Arc<VideoRecord>> = vec![
            Arc::new(VideoRecord::new("3", "Zebra", Vec::<String>::new())),
            Arc::new(VideoRecord::new("1", "Apple", Vec::<String>::new())),
            Arc::new(VideoRecord::new("2", "Apple", Vec::<String>::new())),
            Arc::new(VideoRecord::new("4", "apple", Vec::<String>::new())),
        ];
        sort_by_title(&mut videos);

        let ids: Vec<_> = videos.iter().map(|v| v.id()).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }
}
