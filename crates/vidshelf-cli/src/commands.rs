//! Parsing of shell input lines into commands.

use std::fmt;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print how many videos the catalog holds.
    NumberOfVideos,
    /// List every video.
    ShowAllVideos,
    /// Play a video by id.
    Play(String),
    /// Stop the current video.
    Stop,
    /// Play a random video.
    PlayRandom,
    /// Pause the current video.
    Pause,
    /// Resume the current video.
    Continue,
    /// Show what is playing.
    ShowPlaying,
    /// Create a playlist.
    CreatePlaylist(String),
    /// Add a video to a playlist.
    AddToPlaylist {
        /// Playlist name.
        playlist: String,
        /// Video id.
        video_id: String,
    },
    /// List playlists.
    ShowAllPlaylists,
    /// Show one playlist.
    ShowPlaylist(String),
    /// Remove a video from a playlist.
    RemoveFromPlaylist {
        /// Playlist name.
        playlist: String,
        /// Video id.
        video_id: String,
    },
    /// Empty a playlist.
    ClearPlaylist(String),
    /// Delete a playlist.
    DeletePlaylist(String),
    /// Search titles.
    SearchVideos(String),
    /// Search tags.
    SearchVideosWithTag(String),
    /// Print usage.
    Help,
    /// Leave the shell.
    Exit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing was typed.
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Empty,

    /// The command word is not known.
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    /// The command is known but got the wrong number of arguments.
    #[error("Usage: {usage}")]
    WrongArguments {
        /// Correct usage line.
        usage: &'static str,
    },
}

impl Command {
    /// Parse one input line. Command words are case-insensitive.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseError::Empty);
        };
        let args: Vec<&str> = words.collect();
        let word = word.to_uppercase();

        let command = match (word.as_str(), args.as_slice()) {
            ("NUMBER_OF_VIDEOS", []) => Self::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Self::ShowAllVideos,
            ("PLAY", [id]) => Self::Play((*id).to_string()),
            ("STOP", []) => Self::Stop,
            ("PLAY_RANDOM", []) => Self::PlayRandom,
            ("PAUSE", []) => Self::Pause,
            ("CONTINUE", []) => Self::Continue,
            ("SHOW_PLAYING", []) => Self::ShowPlaying,
            ("CREATE_PLAYLIST", [name]) => Self::CreatePlaylist((*name).to_string()),
            ("ADD_TO_PLAYLIST", [name, id]) => Self::AddToPlaylist {
                playlist: (*name).to_string(),
                video_id: (*id).to_string(),
            },
            ("SHOW_ALL_PLAYLISTS", []) => Self::ShowAllPlaylists,
            ("SHOW_PLAYLIST", [name]) => Self::ShowPlaylist((*name).to_string()),
            ("REMOVE_FROM_PLAYLIST", [name, id]) => Self::RemoveFromPlaylist {
                playlist: (*name).to_string(),
                video_id: (*id).to_string(),
            },
            ("CLEAR_PLAYLIST", [name]) => Self::ClearPlaylist((*name).to_string()),
            ("DELETE_PLAYLIST", [name]) => Self::DeletePlaylist((*name).to_string()),
            ("SEARCH_VIDEOS", [term]) => Self::SearchVideos((*term).to_string()),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Self::SearchVideosWithTag((*tag).to_string()),
            ("HELP", []) => Self::Help,
            ("EXIT", []) => Self::Exit,
            (other, _) => {
                return Err(usage_for(other).map_or_else(
                    || ParseError::Unknown(other.to_string()),
                    |usage| ParseError::WrongArguments { usage },
                ));
            }
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberOfVideos => write!(f, "NUMBER_OF_VIDEOS"),
            Self::ShowAllVideos => write!(f, "SHOW_ALL_VIDEOS"),
            Self::Play(id) => write!(f, "PLAY {id}"),
            Self::Stop => write!(f, "STOP"),
            Self::PlayRandom => write!(f, "PLAY_RANDOM"),
            Self::Pause => write!(f, "PAUSE"),
            Self::Continue => write!(f, "CONTINUE"),
            Self::ShowPlaying => write!(f, "SHOW_PLAYING"),
            Self::CreatePlaylist(name) => write!(f, "CREATE_PLAYLIST {name}"),
            Self::AddToPlaylist { playlist, video_id } => {
                write!(f, "ADD_TO_PLAYLIST {playlist} {video_id}")
            }
            Self::ShowAllPlaylists => write!(f, "SHOW_ALL_PLAYLISTS"),
            Self::ShowPlaylist(name) => write!(f, "SHOW_PLAYLIST {name}"),
            Self::RemoveFromPlaylist { playlist, video_id } => {
                write!(f, "REMOVE_FROM_PLAYLIST {playlist} {video_id}")
            }
            Self::ClearPlaylist(name) => write!(f, "CLEAR_PLAYLIST {name}"),
            Self::DeletePlaylist(name) => write!(f, "DELETE_PLAYLIST {name}"),
            Self::SearchVideos(term) => write!(f, "SEARCH_VIDEOS {term}"),
            Self::SearchVideosWithTag(tag) => write!(f, "SEARCH_VIDEOS_WITH_TAG {tag}"),
            Self::Help => write!(f, "HELP"),
            Self::Exit => write!(f, "EXIT"),
        }
    }
}

/// Usage line for every command, in help order.
pub const USAGE: &[(&str, &str)] = &[
    ("NUMBER_OF_VIDEOS", "Shows how many videos are in the library."),
    ("SHOW_ALL_VIDEOS", "Lists all videos from the library."),
    ("PLAY <video_id>", "Plays specified video."),
    ("PLAY_RANDOM", "Plays a random video from the library."),
    ("STOP", "Stop the current video."),
    ("PAUSE", "Pause the current video."),
    ("CONTINUE", "Resume the current paused video."),
    ("SHOW_PLAYING", "Displays the title, url and paused status of the video that is currently playing (or paused)."),
    ("CREATE_PLAYLIST <playlist_name>", "Creates a new (empty) playlist with the provided name."),
    ("ADD_TO_PLAYLIST <playlist_name> <video_id>", "Adds the requested video to the playlist."),
    ("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>", "Removes the specified video from the specified playlist"),
    ("CLEAR_PLAYLIST <playlist_name>", "Removes all videos from the playlist."),
    ("DELETE_PLAYLIST <playlist_name>", "Deletes the playlist."),
    ("SHOW_PLAYLIST <playlist_name>", "List all the videos in this playlist."),
    ("SHOW_ALL_PLAYLISTS", "Display all the available playlists."),
    ("SEARCH_VIDEOS <search_term>", "Display all the videos whose titles contain the search_term."),
    ("SEARCH_VIDEOS_WITH_TAG <tag_name>", "Display all videos whose tags contains the provided tag."),
    ("HELP", "Displays help."),
    ("EXIT", "Terminates the program execution."),
];

fn usage_for(word: &str) -> Option<&'static str> {
    USAGE
        .iter()
        .map(|(usage, _)| *usage)
        .find(|usage| usage.split_whitespace().next() == Some(word))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("STOP").unwrap(), Command::Stop);
        assert_eq!(Command::parse("  pause  ").unwrap(), Command::Pause);
        assert_eq!(Command::parse("Play_Random").unwrap(), Command::PlayRandom);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_arguments_keep_case() {
        assert_eq!(
            Command::parse("play Amazing_Cats_Video_Id").unwrap(),
            Command::Play("Amazing_Cats_Video_Id".to_string())
        );
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST My_List funny_dogs_video_id").unwrap(),
            Command::AddToPlaylist {
                playlist: "My_List".to_string(),
                video_id: "funny_dogs_video_id".to_string(),
            }
        );
        assert_eq!(
            Command::parse("SEARCH_VIDEOS_WITH_TAG #Cat").unwrap(),
            Command::SearchVideosWithTag("#Cat".to_string())
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(Command::parse("   ").unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("DANCE now").unwrap_err();
        assert_eq!(err, ParseError::Unknown("DANCE".to_string()));
        assert!(err.to_string().contains("HELP"));
    }

    #[test]
    fn test_parse_wrong_arity() {
        let err = Command::parse("PLAY").unwrap_err();
        assert_eq!(
            err,
            ParseError::WrongArguments {
                usage: "PLAY <video_id>"
            }
        );

        let err = Command::parse("STOP now").unwrap_err();
        assert_eq!(err, ParseError::WrongArguments { usage: "STOP" });
    }

    #[test]
    fn test_display_round_trips() {
        for line in [
            "PLAY abc",
            "ADD_TO_PLAYLIST list abc",
            "SEARCH_VIDEOS cat",
            "SHOW_ALL_PLAYLISTS",
        ] {
            assert_eq!(Command::parse(line).unwrap().to_string(), line);
        }
    }

    #[test]
    fn test_every_usage_word_parses_with_placeholders() {
        for (usage, _) in USAGE {
            let line = usage.replace('<', "").replace('>', "");
            assert!(Command::parse(&line).is_ok(), "failed to parse {line}");
        }
    }
}
