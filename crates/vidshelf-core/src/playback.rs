//! Playback state machine.
//!
//! ```text
//!            play(id)                 pause()
//! Stopped ─────────────▶ Playing ─────────────▶ Paused
//!    ▲                    │  ▲    continue()      │
//!    │       stop()       │  └────────────────────┘
//!    └────────────────────┴─────────────────────────┘
//! ```
//!
//! Playing a new video while another one is loaded stops the old one
//! first; the stop is reported in the returned [`PlayOutcome`]. Every
//! rejected transition leaves the state untouched.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::VideoCatalog;
use crate::error::{Error, PlaybackError, Result};
use crate::video::VideoRecord;

/// Current playback state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "video", rename_all = "lowercase")]
pub enum PlaybackState {
    /// Nothing loaded.
    #[default]
    Stopped,
    /// A video is playing.
    Playing(Arc<VideoRecord>),
    /// A video is loaded but paused.
    Paused(Arc<VideoRecord>),
}

impl PlaybackState {
    /// The loaded video, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Arc<VideoRecord>> {
        match self {
            Self::Stopped => None,
            Self::Playing(video) | Self::Paused(video) => Some(video),
        }
    }

    /// Whether a video is loaded and paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }

    /// Whether nothing is loaded.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// Result of a successful [`PlaybackSession::play`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayOutcome {
    /// Video that was implicitly stopped to make room, if any.
    pub stopped: Option<Arc<VideoRecord>>,
    /// Video now playing.
    pub started: Arc<VideoRecord>,
}

/// Chooses which catalog entry random playback should use.
#[cfg_attr(test, mockall::automock)]
pub trait VideoPicker: Send + Sync {
    /// Pick an index in `0..count`. `count` is never zero.
    fn pick(&self, count: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl VideoPicker for RandomPicker {
    fn pick(&self, count: usize) -> usize {
        rand::rng().random_range(0..count)
    }
}

/// The player's playback state and its transitions.
pub struct PlaybackSession {
    state: PlaybackState,
    picker: Box<dyn VideoPicker>,
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSession {
    /// Create a stopped session using [`RandomPicker`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_picker(RandomPicker)
    }

    /// Create a stopped session with a custom picker for random playback.
    pub fn with_picker(picker: impl VideoPicker + 'static) -> Self {
        Self {
            state: PlaybackState::Stopped,
            picker: Box::new(picker),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn status(&self) -> &PlaybackState {
        &self.state
    }

    /// Play a catalog video, stopping whatever is loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VideoNotFound`] if the id is not in the catalog; the
    /// current video keeps playing in that case.
    pub fn play(&mut self, catalog: &VideoCatalog, video_id: &str) -> Result<PlayOutcome> {
        let video = catalog.get(video_id).ok_or_else(|| {
            debug!("Cannot play unknown video {}", video_id);
            Error::video_not_found(video_id)
        })?;
        let video = Arc::clone(video);

        let stopped = self.stop().ok();
        info!("Playing video: {}", video.title());
        self.state = PlaybackState::Playing(Arc::clone(&video));

        Ok(PlayOutcome {
            stopped,
            started: video,
        })
    }

    /// Stop the loaded video.
    ///
    /// Returns the stopped video.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NothingPlaying`] when stopped.
    pub fn stop(&mut self) -> Result<Arc<VideoRecord>> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying.into()),
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => {
                info!("Stopping video: {}", video.title());
                Ok(video)
            }
        }
    }

    /// Play a random catalog video.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NoVideosAvailable`] for an empty catalog.
    pub fn play_random(&mut self, catalog: &VideoCatalog) -> Result<PlayOutcome> {
        if catalog.is_empty() {
            return Err(PlaybackError::NoVideosAvailable.into());
        }

        let index = self.picker.pick(catalog.count());
        let video_id = catalog
            .get_index(index)
            .map(|video| video.id().to_string())
            .ok_or(PlaybackError::NoVideosAvailable)?;
        debug!("Random pick {} of {}: {}", index, catalog.count(), video_id);
        self.play(catalog, &video_id)
    }

    /// Pause the playing video.
    ///
    /// Returns the paused video.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NothingPlaying`] when stopped and
    /// [`PlaybackError::AlreadyPaused`] when already paused.
    pub fn pause(&mut self) -> Result<Arc<VideoRecord>> {
        match &self.state {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying.into()),
            PlaybackState::Paused(video) => Err(PlaybackError::AlreadyPaused {
                title: video.title().to_string(),
            }
            .into()),
            PlaybackState::Playing(video) => {
                let video = Arc::clone(video);
                info!("Pausing video: {}", video.title());
                self.state = PlaybackState::Paused(Arc::clone(&video));
                Ok(video)
            }
        }
    }

    /// Resume the paused video.
    ///
    /// Returns the resumed video.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NothingPlaying`] when stopped and
    /// [`PlaybackError::NotPaused`] when playing.
    pub fn resume(&mut self) -> Result<Arc<VideoRecord>> {
        match &self.state {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying.into()),
            PlaybackState::Playing(video) => Err(PlaybackError::NotPaused {
                title: video.title().to_string(),
            }
            .into()),
            PlaybackState::Paused(video) => {
                let video = Arc::clone(video);
                info!("Continuing video: {}", video.title());
                self.state = PlaybackState::Playing(Arc::clone(&video));
                Ok(video)
            }
        }
    }
}
