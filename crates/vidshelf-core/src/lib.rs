//! `Vidshelf` Core Library
//!
//! This crate provides the core functionality for the `Vidshelf` video player:
//! - A read-only video catalog loaded from a `|`-delimited source
//! - Playback state (stopped, playing, paused) and its transitions
//! - Named playlists with case-insensitive names
//! - Title and tag search with numbered results
//! - Application configuration management
//!
//! The [`VideoPlayer`] session ties these together and is what a front end
//! drives.
//!
//! # Error Handling
//!
//! Every refused request is a typed, recoverable error. See the [`error`]
//! module for details.
//!
//! ```rust,ignore
//! use vidshelf_core::{VideoCatalog, VideoPlayer, VideoRecord, Result};
//!
//! fn demo() -> Result<()> {
//!     let catalog = VideoCatalog::new([VideoRecord::new("v1", "Amazing Cats", ["#cat"])]);
//!     let mut player = VideoPlayer::new(catalog);
//!     player.play("v1")?;
//!     player.pause()?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod playback;
pub mod player;
pub mod playlist;
pub mod search;
pub mod video;

pub use catalog::{VideoCatalog, parse_catalog, parse_catalog_strict, parse_tags};
pub use config::{AppConfig, ConfigManager, DEFAULT_CATALOG_FILE};
pub use error::{CatalogError, Error, ErrorKind, PlaybackError, PlaylistError, Result};
pub use playback::{PlayOutcome, PlaybackSession, PlaybackState, RandomPicker, VideoPicker};
pub use player::VideoPlayer;
pub use playlist::{Playlist, PlaylistRegistry, PlaylistSummary, validate_playlist_name};
pub use search::{SearchEngine, SearchQuery, SearchResults, TAG_MARKER};
pub use video::{VideoCollection, VideoRecord};
