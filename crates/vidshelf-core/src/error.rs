//! Error types for Vidshelf core operations.
//!
//! Every failure a user can trigger (unknown video, duplicate playlist,
//! pausing while nothing plays, ...) is a recoverable, reported outcome.
//! Errors are grouped by domain and wrapped by the top-level [`Error`]:
//!
//! - [`CatalogError`] for loading the video catalog
//! - [`PlaylistError`] for playlist registry operations
//! - [`PlaybackError`] for playback state transitions
//!
//! Use [`Error::kind`] when a caller needs to branch on the category
//! without matching the nested enums.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Vidshelf core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Video id is not in the catalog.
    #[error("Video not found: {id}")]
    VideoNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Catalog loading error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Playlist registry error.
    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    /// Playback state error.
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while reading a catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A line did not have the `title | id | tags` shape.
    #[error("Malformed catalog line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The catalog file could not be read.
    #[error("Failed to read catalog at {path}: {reason}")]
    ReadFailed {
        /// Catalog file path.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },
}

/// Errors raised by playlist registry operations.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// No playlist with that name (case-insensitive).
    #[error("Playlist not found: {name}")]
    NotFound {
        /// Name as given by the caller.
        name: String,
    },

    /// A playlist with the same case-insensitive name exists.
    #[error("Playlist already exists: {name}")]
    AlreadyExists {
        /// Name as given by the caller.
        name: String,
    },

    /// The name cannot be used for a playlist.
    #[error("Invalid playlist name '{name}': {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The video is already in the playlist.
    #[error("Video {video_id} is already in playlist {playlist}")]
    AlreadyInPlaylist {
        /// Playlist display name.
        playlist: String,
        /// Video id.
        video_id: String,
    },

    /// The video is not in the playlist.
    #[error("Video {video_id} is not in playlist {playlist}")]
    NotInPlaylist {
        /// Playlist display name.
        playlist: String,
        /// Video id.
        video_id: String,
    },
}

/// Errors raised by playback transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// Stop, pause or continue was requested with no video loaded.
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause was requested on a paused video.
    #[error("Video already paused: {title}")]
    AlreadyPaused {
        /// Title of the paused video.
        title: String,
    },

    /// Continue was requested on a video that is playing.
    #[error("Video is not paused: {title}")]
    NotPaused {
        /// Title of the playing video.
        title: String,
    },

    /// Random playback was requested on an empty catalog.
    #[error("No videos available")]
    NoVideosAvailable,
}

/// Flat error category, for callers that do not care about payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown video id.
    VideoNotFound,
    /// Unknown playlist name.
    PlaylistNotFound,
    /// Duplicate playlist name.
    AlreadyExists,
    /// Unusable playlist name.
    InvalidName,
    /// Video already in playlist.
    AlreadyInPlaylist,
    /// Video missing from playlist.
    NotInPlaylist,
    /// Nothing is loaded in the player.
    NothingPlaying,
    /// Player is already paused.
    AlreadyPaused,
    /// Player is not paused.
    NotPaused,
    /// Catalog is empty.
    NoVideosAvailable,
    /// Catalog source could not be parsed or read.
    Catalog,
    /// Configuration could not be loaded or saved.
    Configuration,
    /// Underlying IO failure.
    Io,
    /// JSON (de)serialization failure.
    Serialization,
}

impl Error {
    /// Shorthand for [`Error::VideoNotFound`].
    pub fn video_not_found(id: impl Into<String>) -> Self {
        Self::VideoNotFound { id: id.into() }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VideoNotFound { .. } => ErrorKind::VideoNotFound,
            Self::Catalog(_) => ErrorKind::Catalog,
            Self::Playlist(e) => match e {
                PlaylistError::NotFound { .. } => ErrorKind::PlaylistNotFound,
                PlaylistError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
                PlaylistError::InvalidName { .. } => ErrorKind::InvalidName,
                PlaylistError::AlreadyInPlaylist { .. } => ErrorKind::AlreadyInPlaylist,
                PlaylistError::NotInPlaylist { .. } => ErrorKind::NotInPlaylist,
            },
            Self::Playback(e) => match e {
                PlaybackError::NothingPlaying => ErrorKind::NothingPlaying,
                PlaybackError::AlreadyPaused { .. } => ErrorKind::AlreadyPaused,
                PlaybackError::NotPaused { .. } => ErrorKind::NotPaused,
                PlaybackError::NoVideosAvailable => ErrorKind::NoVideosAvailable,
            },
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io(_) => ErrorKind::Io,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Whether the error was caused by what the user asked for, as opposed
    /// to the environment (files, configuration).
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(
            self.kind(),
            ErrorKind::Catalog | ErrorKind::Configuration | ErrorKind::Io | ErrorKind::Serialization
        )
    }
}
