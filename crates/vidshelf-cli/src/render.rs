//! Turns player outcomes into the lines printed by the shell.
//!
//! Every function here is pure: it takes the result of a player operation
//! and returns the text to show, so the wording can be tested without a
//! terminal.

use std::sync::Arc;

use vidshelf_core::{
    Error, ErrorKind, PlayOutcome, PlaybackError, PlaybackState, PlaylistSummary, Result,
    SearchResults, VideoRecord,
};

use crate::commands::USAGE;

/// Lines printed by one command.
pub type Lines = Vec<String>;

/// `NUMBER_OF_VIDEOS`.
pub fn number_of_videos(count: usize) -> Lines {
    vec![format!("{count} videos in the library")]
}

/// `SHOW_ALL_VIDEOS`.
pub fn all_videos(videos: &[Arc<VideoRecord>]) -> Lines {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|video| format!("  {video}")));
    lines
}

/// `PLAY`, `PLAY_RANDOM` and playing a search selection.
pub fn play(result: &Result<PlayOutcome>) -> Lines {
    match result {
        Ok(outcome) => {
            let mut lines = Vec::with_capacity(2);
            if let Some(stopped) = &outcome.stopped {
                lines.push(format!("Stopping video: {}", stopped.title()));
            }
            lines.push(format!("Playing video: {}", outcome.started.title()));
            lines
        }
        Err(e) => match e.kind() {
            ErrorKind::VideoNotFound => line("Cannot play video: Video does not exist"),
            ErrorKind::NoVideosAvailable => line("No videos available"),
            _ => unexpected(e),
        },
    }
}

/// `STOP`.
pub fn stop(result: &Result<Arc<VideoRecord>>) -> Lines {
    match result {
        Ok(video) => vec![format!("Stopping video: {}", video.title())],
        Err(e) if e.kind() == ErrorKind::NothingPlaying => {
            line("Cannot stop video: No video is currently playing")
        }
        Err(e) => unexpected(e),
    }
}

/// `PAUSE`.
pub fn pause(result: &Result<Arc<VideoRecord>>) -> Lines {
    match result {
        Ok(video) => vec![format!("Pausing video: {}", video.title())],
        Err(Error::Playback(PlaybackError::AlreadyPaused { title })) => {
            vec![format!("Video already paused: {title}")]
        }
        Err(e) if e.kind() == ErrorKind::NothingPlaying => {
            line("Cannot pause video: No video is currently playing")
        }
        Err(e) => unexpected(e),
    }
}

/// `CONTINUE`.
pub fn resume(result: &Result<Arc<VideoRecord>>) -> Lines {
    match result {
        Ok(video) => vec![format!("Continuing video: {}", video.title())],
        Err(e) => match e.kind() {
            ErrorKind::NotPaused => line("Cannot continue video: Video is not paused"),
            ErrorKind::NothingPlaying => {
                line("Cannot continue video: No video is currently playing")
            }
            _ => unexpected(e),
        },
    }
}

/// `SHOW_PLAYING`.
pub fn playing(state: &PlaybackState) -> Lines {
    match state {
        PlaybackState::Stopped => line("No video is currently playing"),
        PlaybackState::Playing(video) => vec![format!("Currently playing: {video}")],
        PlaybackState::Paused(video) => vec![format!("Currently playing: {video} - PAUSED")],
    }
}

/// `CREATE_PLAYLIST`.
pub fn create_playlist(result: &Result<String>) -> Lines {
    match result {
        Ok(name) => vec![format!("Successfully created new playlist: {name}")],
        Err(e) => match e.kind() {
            ErrorKind::AlreadyExists => {
                line("Cannot create playlist: A playlist with the same name already exists")
            }
            ErrorKind::InvalidName => line("Cannot create playlist: Playlist name cannot be empty"),
            _ => unexpected(e),
        },
    }
}

/// `ADD_TO_PLAYLIST`.
pub fn add_to_playlist(requested: &str, result: &Result<(String, Arc<VideoRecord>)>) -> Lines {
    match result {
        Ok((name, video)) => vec![format!("Added video to {name}: {}", video.title())],
        Err(e) => {
            let reason = match e.kind() {
                ErrorKind::PlaylistNotFound => "Playlist does not exist",
                ErrorKind::VideoNotFound => "Video does not exist",
                ErrorKind::AlreadyInPlaylist => "Video already added",
                _ => return unexpected(e),
            };
            vec![format!("Cannot add video to {requested}: {reason}")]
        }
    }
}

/// `SHOW_ALL_PLAYLISTS`.
pub fn all_playlists(playlists: &[PlaylistSummary]) -> Lines {
    if playlists.is_empty() {
        return line("No playlists exist yet");
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(playlists.iter().map(|playlist| {
        let plural = if playlist.video_count == 1 { "" } else { "s" };
        format!("  {} ({} video{plural})", playlist.name, playlist.video_count)
    }));
    lines
}

/// `SHOW_PLAYLIST`.
pub fn show_playlist(requested: &str, result: &Result<(String, Vec<Arc<VideoRecord>>)>) -> Lines {
    match result {
        Ok((name, videos)) => {
            let mut lines = vec![format!("Showing playlist: {name}")];
            if videos.is_empty() {
                lines.push("  No videos here yet".to_string());
            } else {
                lines.extend(videos.iter().map(|video| format!("  {video}")));
            }
            lines
        }
        Err(e) if e.kind() == ErrorKind::PlaylistNotFound => {
            vec![format!("Cannot show playlist {requested}: Playlist does not exist")]
        }
        Err(e) => unexpected(e),
    }
}

/// `REMOVE_FROM_PLAYLIST`.
pub fn remove_from_playlist(
    requested: &str,
    result: &Result<(String, Arc<VideoRecord>)>,
) -> Lines {
    match result {
        Ok((name, video)) => vec![format!("Removed video from {name}: {}", video.title())],
        Err(e) => {
            let reason = match e.kind() {
                ErrorKind::PlaylistNotFound => "Playlist does not exist",
                ErrorKind::VideoNotFound => "Video does not exist",
                ErrorKind::NotInPlaylist => "Video is not in playlist",
                _ => return unexpected(e),
            };
            vec![format!("Cannot remove video from {requested}: {reason}")]
        }
    }
}

/// `CLEAR_PLAYLIST`.
pub fn clear_playlist(requested: &str, result: &Result<String>) -> Lines {
    match result {
        Ok(name) => vec![format!("Successfully removed all videos from {name}")],
        Err(e) if e.kind() == ErrorKind::PlaylistNotFound => {
            vec![format!("Cannot clear playlist {requested}: Playlist does not exist")]
        }
        Err(e) => unexpected(e),
    }
}

/// `DELETE_PLAYLIST`.
pub fn delete_playlist(requested: &str, result: &Result<String>) -> Lines {
    match result {
        Ok(name) => vec![format!("Deleted playlist: {name}")],
        Err(e) if e.kind() == ErrorKind::PlaylistNotFound => {
            vec![format!("Cannot delete playlist {requested}: Playlist does not exist")]
        }
        Err(e) => unexpected(e),
    }
}

/// `SEARCH_VIDEOS` and `SEARCH_VIDEOS_WITH_TAG`.
///
/// A non-empty result ends with the selection prompt.
pub fn search_results(results: &SearchResults) -> Lines {
    let query = results.query().text();
    if results.is_empty() {
        return vec![format!("No search results for {query}")];
    }

    let mut lines = vec![format!("Here are the results for {query}:")];
    lines.extend(
        results
            .numbered()
            .map(|(position, video)| format!("  {position}) {video}")),
    );
    lines.push(
        "Would you like to play any of the above? If yes, specify the number of the video."
            .to_string(),
    );
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
    lines
}

/// `HELP`.
pub fn help() -> Lines {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        USAGE
            .iter()
            .map(|(usage, description)| format!("    {usage} - {description}")),
    );
    lines
}

fn line(text: &str) -> Lines {
    vec![text.to_string()]
}

fn unexpected(e: &Error) -> Lines {
    vec![format!("Error: {e}")]
}
