//! Playlist management module.
//!
//! Playlists are named collections of catalog videos. Names are unique
//! ignoring case: the registry keys every playlist by its lowercased name
//! while the playlist keeps the name exactly as it was created, which is the
//! name used whenever a playlist is reported back.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::VideoCatalog;
use crate::error::{Error, PlaylistError, Result};
use crate::video::{VideoCollection, VideoRecord};

/// A named, user-managed set of videos.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    videos: VideoCollection,
}

impl Playlist {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: VideoCollection::new(),
        }
    }

    /// Name as given at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Videos in the order they were added.
    #[must_use]
    pub fn videos(&self) -> Vec<Arc<VideoRecord>> {
        self.videos.all()
    }

    /// Whether the playlist holds this video.
    #[must_use]
    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.contains(video_id)
    }

    /// Number of videos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the playlist has no videos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Summary used when listing playlists.
    #[must_use]
    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            name: self.name.clone(),
            video_count: self.videos.len(),
        }
    }
}

/// Lightweight description of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    /// Display name.
    pub name: String,
    /// Number of videos.
    pub video_count: usize,
}

/// Registry owning every playlist, keyed by lowercased name.
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    playlists: IndexMap<String, Playlist>,
}

impl PlaylistRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist.
    ///
    /// Returns the display name of the new playlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or already taken (ignoring case).
    pub fn create(&mut self, name: &str) -> Result<String> {
        validate_playlist_name(name)?;

        let key = playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::AlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        self.playlists.insert(key, Playlist::new(name));
        info!("Created playlist: {}", name);
        Ok(name.to_string())
    }

    /// Add a catalog video to a playlist.
    ///
    /// Returns the playlist's display name and the added video.
    ///
    /// # Errors
    ///
    /// Checked in order: the playlist must exist, the video must be in the
    /// catalog, and the video must not already be in the playlist.
    pub fn add_video(
        &mut self,
        catalog: &VideoCatalog,
        name: &str,
        video_id: &str,
    ) -> Result<(String, Arc<VideoRecord>)> {
        let playlist = self.get_mut(name)?;
        let video = catalog
            .get(video_id)
            .ok_or_else(|| Error::video_not_found(video_id))?;

        if playlist.contains(video_id) {
            return Err(PlaylistError::AlreadyInPlaylist {
                playlist: playlist.name.clone(),
                video_id: video_id.to_string(),
            }
            .into());
        }

        playlist.videos.add(Arc::clone(video));
        info!("Added {} to playlist {}", video_id, playlist.name);
        Ok((playlist.name.clone(), Arc::clone(video)))
    }

    /// Remove a video from a playlist.
    ///
    /// Returns the playlist's display name and the removed video.
    ///
    /// # Errors
    ///
    /// Checked in order: the playlist must exist, the video must be in the
    /// catalog, and the video must be in the playlist.
    pub fn remove_video(
        &mut self,
        catalog: &VideoCatalog,
        name: &str,
        video_id: &str,
    ) -> Result<(String, Arc<VideoRecord>)> {
        let playlist = self.get_mut(name)?;
        if catalog.get(video_id).is_none() {
            return Err(Error::video_not_found(video_id));
        }

        let removed = playlist.videos.remove(video_id).ok_or_else(|| {
            Error::from(PlaylistError::NotInPlaylist {
                playlist: playlist.name.clone(),
                video_id: video_id.to_string(),
            })
        })?;

        info!("Removed {} from playlist {}", video_id, playlist.name);
        Ok((playlist.name.clone(), removed))
    }

    /// Remove every video from a playlist, keeping the playlist.
    ///
    /// Returns the playlist's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the playlist does not exist.
    pub fn clear(&mut self, name: &str) -> Result<String> {
        let playlist = self.get_mut(name)?;
        let removed = playlist.videos.len();
        playlist.videos.clear();
        info!("Cleared {} videos from playlist {}", removed, playlist.name);
        Ok(playlist.name.clone())
    }

    /// Delete a playlist.
    ///
    /// Returns the deleted playlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the playlist does not exist.
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .shift_remove(&playlist_key(name))
            .ok_or_else(|| not_found(name))?;
        info!("Deleted playlist: {}", playlist.name);
        Ok(playlist)
    }

    /// All playlists sorted by display name.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| a.name.cmp(&b.name));
        playlists
    }

    /// Look up a playlist, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the playlist does not exist.
    pub fn get(&self, name: &str) -> Result<&Playlist> {
        let found = self.playlists.get(&playlist_key(name));
        debug!("Playlist lookup '{}': found={}", name, found.is_some());
        found.ok_or_else(|| not_found(name))
    }

    /// Display name and videos of a playlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the playlist does not exist.
    pub fn show(&self, name: &str) -> Result<(String, Vec<Arc<VideoRecord>>)> {
        let playlist = self.get(name)?;
        Ok((playlist.name.clone(), playlist.videos()))
    }

    /// Whether a playlist with this name exists, ignoring case.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.playlists.contains_key(&playlist_key(name))
    }

    /// Number of playlists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether there are no playlists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| not_found(name))
    }
}

/// Validate a playlist name.
///
/// # Errors
///
/// Returns an error if the name is empty or only whitespace.
pub fn validate_playlist_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PlaylistError::InvalidName {
            name: name.to_string(),
            reason: "Playlist name cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

fn not_found(name: &str) -> Error {
    PlaylistError::NotFound {
        name: name.to_string(),
    }
    .into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn test_catalog() -> VideoCatalog {
        VideoCatalog::new([
            VideoRecord::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
            VideoRecord::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
            VideoRecord::new("life_at_google_video_id", "Life at Google", ["#google"]),
        ])
    }

    fn setup_registry() -> (PlaylistRegistry, VideoCatalog) {
        (PlaylistRegistry::new(), test_catalog())
    }

    #[test]
    fn test_create_playlist() {
        let (mut registry, _) = setup_registry();
        let name = registry.create("my_PLAYlist").unwrap();

        assert_eq!(name, "my_PLAYlist");
        assert!(registry.exists("MY_playlist"));
        assert_eq!(registry.get("my_playlist").unwrap().name(), "my_PLAYlist");
    }

    #[test]
    fn test_create_duplicate_ignores_case() {
        let (mut registry, _) = setup_registry();
        registry.create("Foo").unwrap();

        let err = registry.create("foo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(registry.len(), 1);
        // The original casing survives.
        assert_eq!(registry.get("FOO").unwrap().name(), "Foo");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let (mut registry, _) = setup_registry();
        assert_eq!(registry.create("").unwrap_err().kind(), ErrorKind::InvalidName);
        assert_eq!(registry.create("   ").unwrap_err().kind(), ErrorKind::InvalidName);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_video_ignores_name_case() {
        let (mut registry, catalog) = setup_registry();
        registry.create("My List").unwrap();

        let (name, video) = registry
            .add_video(&catalog, "my list", "funny_dogs_video_id")
            .unwrap();
        assert_eq!(name, "My List");
        assert_eq!(video.title(), "Funny Dogs");

        let (_, videos) = registry.show("MY LIST").unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id(), "funny_dogs_video_id");
    }

    #[test]
    fn test_add_video_twice_is_rejected() {
        let (mut registry, catalog) = setup_registry();
        registry.create("list").unwrap();
        registry
            .add_video(&catalog, "list", "amazing_cats_video_id")
            .unwrap();

        let err = registry
            .add_video(&catalog, "list", "amazing_cats_video_id")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyInPlaylist);
        assert_eq!(registry.get("list").unwrap().len(), 1);
    }

    #[test]
    fn test_add_video_error_precedence() {
        let (mut registry, catalog) = setup_registry();

        // Missing playlist wins over missing video.
        let err = registry.add_video(&catalog, "nope", "missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaylistNotFound);

        registry.create("list").unwrap();
        let err = registry.add_video(&catalog, "list", "missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VideoNotFound);
        assert!(registry.get("list").unwrap().is_empty());
    }

    #[test]
    fn test_remove_video() {
        let (mut registry, catalog) = setup_registry();
        registry.create("list").unwrap();
        registry
            .add_video(&catalog, "list", "amazing_cats_video_id")
            .unwrap();

        let (name, removed) = registry
            .remove_video(&catalog, "LIST", "amazing_cats_video_id")
            .unwrap();
        assert_eq!(name, "list");
        assert_eq!(removed.title(), "Amazing Cats");
        assert!(registry.get("list").unwrap().is_empty());
    }

    #[test]
    fn test_remove_video_error_precedence() {
        let (mut registry, catalog) = setup_registry();

        let err = registry
            .remove_video(&catalog, "nope", "missing")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaylistNotFound);

        registry.create("list").unwrap();
        let err = registry
            .remove_video(&catalog, "list", "missing")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VideoNotFound);

        let err = registry
            .remove_video(&catalog, "list", "funny_dogs_video_id")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotInPlaylist);
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let (mut registry, catalog) = setup_registry();
        registry.create("list").unwrap();
        registry
            .add_video(&catalog, "list", "amazing_cats_video_id")
            .unwrap();
        registry
            .add_video(&catalog, "list", "funny_dogs_video_id")
            .unwrap();

        assert_eq!(registry.clear("LiSt").unwrap(), "list");
        assert!(registry.exists("list"));
        assert!(registry.get("list").unwrap().is_empty());

        let err = registry.clear("other").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaylistNotFound);
    }

    #[test]
    fn test_delete_playlist() {
        let (mut registry, _) = setup_registry();
        registry.create("Watch Later").unwrap();

        let deleted = registry.delete("watch later").unwrap();
        assert_eq!(deleted.name(), "Watch Later");
        assert!(!registry.exists("watch later"));

        let err = registry.delete("watch later").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaylistNotFound);
    }

    #[test]
    fn test_delete_then_recreate() {
        let (mut registry, catalog) = setup_registry();
        registry.create("list").unwrap();
        registry
            .add_video(&catalog, "list", "amazing_cats_video_id")
            .unwrap();
        registry.delete("list").unwrap();

        registry.create("LIST").unwrap();
        let (name, videos) = registry.show("list").unwrap();
        assert_eq!(name, "LIST");
        assert!(videos.is_empty());
    }

    #[test]
    fn test_list_all_sorted_by_name() {
        let (mut registry, _) = setup_registry();
        assert!(registry.list_all().is_empty());

        registry.create("zeta").unwrap();
        registry.create("Alpha").unwrap();
        registry.create("beta").unwrap();

        let names: Vec<_> = registry.list_all().iter().map(|p| p.name()).collect();
        // Case-sensitive ordering puts uppercase first.
        assert_eq!(names, ["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_show_keeps_insertion_order() {
        let (mut registry, catalog) = setup_registry();
        registry.create("list").unwrap();
        for id in ["life_at_google_video_id", "amazing_cats_video_id"] {
            registry.add_video(&catalog, "list", id).unwrap();
        }

        let (_, videos) = registry.show("list").unwrap();
        let ids: Vec<_> = videos.iter().map(|v| v.id()).collect();
        assert_eq!(ids, ["life_at_google_video_id", "amazing_cats_video_id"]);

        let err = registry.show("missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaylistNotFound);
    }

    #[test]
    fn test_summary() {
        let (mut registry, catalog) = setup_registry();
        registry.create("list").unwrap();
        registry
            .add_video(&catalog, "list", "amazing_cats_video_id")
            .unwrap();

        let summary = registry.get("list").unwrap().summary();
        assert_eq!(
            summary,
            PlaylistSummary {
                name: "list".to_string(),
                video_count: 1,
            }
        );
    }
}
