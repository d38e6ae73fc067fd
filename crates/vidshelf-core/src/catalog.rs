//! The video catalog and its loader.
//!
//! A catalog source has one video per line with three `|`-separated
//! fields: `title | id | tags`. Each field is trimmed and tags are a
//! comma-separated list:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! Once built, a [`VideoCatalog`] is never mutated.

use std::fs;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{CatalogError, Error, Result};
use crate::video::{VideoCollection, VideoRecord, sort_by_title};

/// Field separator in catalog sources.
pub const FIELD_SEPARATOR: char = '|';

/// Separator between tags inside the tag field.
pub const TAG_SEPARATOR: char = ',';

/// Read-only collection of every video available to the player.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: VideoCollection,
}

impl VideoCatalog {
    /// Build a catalog from records in source order.
    ///
    /// Duplicate ids keep the last record seen.
    pub fn new(videos: impl IntoIterator<Item = VideoRecord>) -> Self {
        let videos: VideoCollection = videos.into_iter().collect();
        debug!("Built catalog with {} videos", videos.len());
        Self { videos }
    }

    /// Load a catalog file, skipping malformed lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Catalog(CatalogError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        let catalog = Self::new(parse_catalog(&content));
        info!("Loaded {} videos from {}", catalog.count(), path.display());
        Ok(catalog)
    }

    /// Load a catalog from any buffered reader, skipping malformed lines.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut videos = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(&line, index + 1) {
                Ok(Some(video)) => videos.push(video),
                Ok(None) => {}
                Err(e) => warn!("Skipping catalog entry: {}", e),
            }
        }
        Ok(Self::new(videos))
    }

    /// Look up a video by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<VideoRecord>> {
        self.videos.get(id)
    }

    /// All videos in source order.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<VideoRecord>> {
        self.videos.all()
    }

    /// All videos sorted by title for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Arc<VideoRecord>> {
        let mut videos = self.videos.all();
        sort_by_title(&mut videos);
        videos
    }

    /// All video ids in source order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.videos.iter().map(|v| v.id()).collect()
    }

    /// Video at a position in source order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Arc<VideoRecord>> {
        self.videos.get_index(index)
    }

    /// Iterate over videos in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<VideoRecord>> {
        self.videos.iter()
    }

    /// Number of videos.
    #[must_use]
    pub fn count(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalog has no videos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Parse catalog text, skipping blank and malformed lines.
pub fn parse_catalog(content: &str) -> Vec<VideoRecord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match parse_line(line, index + 1) {
            Ok(video) => video,
            Err(e) => {
                warn!("Skipping catalog entry: {}", e);
                None
            }
        })
        .collect()
}

/// Parse catalog text, failing on the first malformed line.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedLine`] for a line that does not have
/// exactly three fields or has an empty title or id.
pub fn parse_catalog_strict(content: &str) -> Result<Vec<VideoRecord>> {
    let mut videos = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if let Some(video) = parse_line(line, index + 1)? {
            videos.push(video);
        }
    }
    Ok(videos)
}

/// Split a tag field into trimmed, non-empty tags.
pub fn parse_tags(field: &str) -> Vec<String> {
    field
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse one line. Blank lines yield `Ok(None)`.
fn parse_line(
    line: &str,
    line_number: usize,
) -> std::result::Result<Option<VideoRecord>, CatalogError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [title, id, tags] = fields.as_slice() else {
        return Err(CatalogError::MalformedLine {
            line: line_number,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    if id.is_empty() {
        return Err(CatalogError::MalformedLine {
            line: line_number,
            reason: "video id is empty".to_string(),
        });
    }
    if title.is_empty() {
        return Err(CatalogError::MalformedLine {
            line: line_number,
            reason: "title is empty".to_string(),
        });
    }

    Ok(Some(VideoRecord::new(*id, *title, parse_tags(tags))))
}
