//! The player session: one object owning the catalog, the playlists and
//! the playback state.
//!
//! This is the surface a front end talks to. Every operation returns a
//! value to render or a typed [`Error`](crate::Error) describing why the
//! request was refused; nothing here prints.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::catalog::VideoCatalog;
use crate::error::Result;
use crate::playback::{PlayOutcome, PlaybackSession, PlaybackState, VideoPicker};
use crate::playlist::{PlaylistRegistry, PlaylistSummary};
use crate::search::{SearchEngine, SearchResults};
use crate::video::VideoRecord;

/// A single-user video player session.
#[derive(Debug)]
pub struct VideoPlayer {
    catalog: VideoCatalog,
    playlists: PlaylistRegistry,
    playback: PlaybackSession,
}

impl VideoPlayer {
    /// Create a session over a catalog.
    #[must_use]
    pub fn new(catalog: VideoCatalog) -> Self {
        Self::with_playback(catalog, PlaybackSession::new())
    }

    /// Create a session with a custom picker for random playback.
    pub fn with_picker(catalog: VideoCatalog, picker: impl VideoPicker + 'static) -> Self {
        Self::with_playback(catalog, PlaybackSession::with_picker(picker))
    }

    fn with_playback(catalog: VideoCatalog, playback: PlaybackSession) -> Self {
        debug!("Player session created with {} videos", catalog.count());
        Self {
            catalog,
            playlists: PlaylistRegistry::new(),
            playback,
        }
    }

    /// The catalog backing this session.
    #[must_use]
    pub const fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    /// Number of videos in the catalog.
    #[must_use]
    pub fn number_of_videos(&self) -> usize {
        self.catalog.count()
    }

    /// Every catalog video, sorted by title.
    #[must_use]
    pub fn list_videos(&self) -> Vec<Arc<VideoRecord>> {
        self.catalog.sorted()
    }

    /// Play a video by id.
    #[instrument(skip(self))]
    pub fn play(&mut self, video_id: &str) -> Result<PlayOutcome> {
        self.playback.play(&self.catalog, video_id)
    }

    /// Stop the loaded video.
    pub fn stop(&mut self) -> Result<Arc<VideoRecord>> {
        self.playback.stop()
    }

    /// Play a random catalog video.
    pub fn play_random(&mut self) -> Result<PlayOutcome> {
        self.playback.play_random(&self.catalog)
    }

    /// Pause the playing video.
    pub fn pause(&mut self) -> Result<Arc<VideoRecord>> {
        self.playback.pause()
    }

    /// Resume the paused video.
    pub fn continue_video(&mut self) -> Result<Arc<VideoRecord>> {
        self.playback.resume()
    }

    /// What is loaded right now.
    #[must_use]
    pub const fn show_playing(&self) -> &PlaybackState {
        self.playback.status()
    }

    /// Create an empty playlist. Returns its display name.
    #[instrument(skip(self))]
    pub fn create_playlist(&mut self, name: &str) -> Result<String> {
        self.playlists.create(name)
    }

    /// Add a video to a playlist. Returns the display name and the video.
    #[instrument(skip(self))]
    pub fn add_to_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<(String, Arc<VideoRecord>)> {
        self.playlists.add_video(&self.catalog, name, video_id)
    }

    /// All playlists, sorted by display name.
    #[must_use]
    pub fn list_playlists(&self) -> Vec<PlaylistSummary> {
        self.playlists
            .list_all()
            .into_iter()
            .map(|playlist| playlist.summary())
            .collect()
    }

    /// Display name and videos of a playlist.
    pub fn show_playlist(&self, name: &str) -> Result<(String, Vec<Arc<VideoRecord>>)> {
        self.playlists.show(name)
    }

    /// Remove a video from a playlist. Returns the display name and the video.
    #[instrument(skip(self))]
    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<(String, Arc<VideoRecord>)> {
        self.playlists.remove_video(&self.catalog, name, video_id)
    }

    /// Empty a playlist. Returns its display name.
    #[instrument(skip(self))]
    pub fn clear_playlist(&mut self, name: &str) -> Result<String> {
        self.playlists.clear(name)
    }

    /// Delete a playlist. Returns its display name.
    #[instrument(skip(self))]
    pub fn delete_playlist(&mut self, name: &str) -> Result<String> {
        self.playlists
            .delete(name)
            .map(|playlist| playlist.name().to_string())
    }

    /// Videos whose title contains `term`.
    #[must_use]
    pub fn search_by_title(&self, term: &str) -> SearchResults {
        SearchEngine::new(&self.catalog).by_title(term)
    }

    /// Videos carrying `tag`.
    #[must_use]
    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        SearchEngine::new(&self.catalog).by_tag(tag)
    }

    /// Play the search hit the user picked.
    ///
    /// Returns `Ok(None)` when the answer does not name a result.
    pub fn play_selection(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> Result<Option<PlayOutcome>> {
        match results.select(answer) {
            Some(video) => {
                let video_id = video.id().to_string();
                self.play(&video_id).map(Some)
            }
            None => {
                debug!("No selection from answer {:?}", answer);
                Ok(None)
            }
        }
    }
}
