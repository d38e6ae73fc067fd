//! Interactive command loop.
//!
//! Reads one command per line, runs it against the player and prints the
//! rendered outcome. After a search with results the next line is read as
//! the answer to "which one should I play?".

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use vidshelf_core::{SearchResults, VideoPlayer};

use crate::commands::Command;
use crate::render::{self, Lines};

/// Prompt shown before each command.
pub const PROMPT: &str = "VS> ";

/// Command loop over arbitrary input and output streams.
pub struct Shell<R, W> {
    player: VideoPlayer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell driving `player`.
    pub const fn new(player: VideoPlayer, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
        }
    }

    /// Run until `EXIT` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.print(&[
            "Hello and welcome to Vidshelf, what would you like to do?".to_string(),
            "Enter HELP for list of available commands or EXIT to terminate.".to_string(),
        ])?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input");
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Exit) => break,
                Ok(command) => {
                    debug!("Running command: {}", command);
                    self.execute(command)?;
                }
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line, e);
                    self.print(&[e.to_string()])?;
                }
            }
        }

        self.print(&[
            "Vidshelf has now terminated its execution. Thank you and goodbye!".to_string(),
        ])
    }

    /// Consume the shell and return the player, for inspecting state.
    #[cfg(test)]
    pub fn into_player(self) -> VideoPlayer {
        self.player
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        let player = &mut self.player;
        let lines = match command {
            Command::NumberOfVideos => render::number_of_videos(player.number_of_videos()),
            Command::ShowAllVideos => render::all_videos(&player.list_videos()),
            Command::Play(id) => render::play(&player.play(&id)),
            Command::Stop => render::stop(&player.stop()),
            Command::PlayRandom => render::play(&player.play_random()),
            Command::Pause => render::pause(&player.pause()),
            Command::Continue => render::resume(&player.continue_video()),
            Command::ShowPlaying => render::playing(player.show_playing()),
            Command::CreatePlaylist(name) => render::create_playlist(&player.create_playlist(&name)),
            Command::AddToPlaylist { playlist, video_id } => {
                render::add_to_playlist(&playlist, &player.add_to_playlist(&playlist, &video_id))
            }
            Command::ShowAllPlaylists => render::all_playlists(&player.list_playlists()),
            Command::ShowPlaylist(name) => {
                render::show_playlist(&name, &player.show_playlist(&name))
            }
            Command::RemoveFromPlaylist { playlist, video_id } => render::remove_from_playlist(
                &playlist,
                &player.remove_from_playlist(&playlist, &video_id),
            ),
            Command::ClearPlaylist(name) => {
                render::clear_playlist(&name, &player.clear_playlist(&name))
            }
            Command::DeletePlaylist(name) => {
                render::delete_playlist(&name, &player.delete_playlist(&name))
            }
            Command::SearchVideos(term) => {
                let results = player.search_by_title(&term);
                return self.offer_results(&results);
            }
            Command::SearchVideosWithTag(tag) => {
                let results = player.search_by_tag(&tag);
                return self.offer_results(&results);
            }
            Command::Help => render::help(),
            Command::Exit => Lines::new(),
        };
        self.print(&lines)
    }

    fn offer_results(&mut self, results: &SearchResults) -> io::Result<()> {
        self.print(&render::search_results(results))?;
        if results.is_empty() {
            return Ok(());
        }

        let answer = self.read_line()?.unwrap_or_default();
        let lines = match self.player.play_selection(results, &answer) {
            Ok(None) => Lines::new(),
            Ok(Some(outcome)) => render::play(&Ok(outcome)),
            Err(e) => render::play(&Err(e)),
        };
        self.print(&lines)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vidshelf_core::{VideoCatalog, VideoRecord};

    fn test_player() -> VideoPlayer {
        VideoPlayer::new(VideoCatalog::new([
            VideoRecord::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
            VideoRecord::new("another_cat_video_id", "Another Cat Video", ["#cat", "#animal"]),
            VideoRecord::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
        ]))
    }

    fn run_script(script: &str) -> (String, VideoPlayer) {
        let mut output = Vec::new();
        let mut shell = Shell::new(test_player(), Cursor::new(script.to_string()), &mut output);
        shell.run().unwrap();
        let player = shell.into_player();
        (String::from_utf8(output).unwrap(), player)
    }

    #[test]
    fn test_exit_immediately() {
        let (output, _) = run_script("EXIT\n");
        assert!(output.starts_with("Hello and welcome to Vidshelf"));
        assert!(output.ends_with("Thank you and goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (output, _) = run_script("NUMBER_OF_VIDEOS\n");
        assert!(output.contains("3 videos in the library"));
        assert!(output.contains("goodbye"));
    }

    #[test]
    fn test_play_and_switch() {
        let (output, player) =
            run_script("PLAY funny_dogs_video_id\nPLAY amazing_cats_video_id\nSHOW_PLAYING\n");
        assert!(output.contains("Playing video: Funny Dogs"));
        assert!(output.contains("Stopping video: Funny Dogs\nPlaying video: Amazing Cats"));
        assert!(output.contains("Currently playing: Amazing Cats"));
        assert_eq!(
            player.show_playing().current().unwrap().id(),
            "amazing_cats_video_id"
        );
    }

    #[test]
    fn test_invalid_command() {
        let (output, _) = run_script("JUMP\n\nPLAY\n");
        assert!(output.contains("Please enter a valid command"));
        assert!(output.contains("Usage: PLAY <video_id>"));
    }

    #[test]
    fn test_search_and_pick() {
        let (output, player) = run_script("SEARCH_VIDEOS cat\n2\n");
        assert!(output.contains("Here are the results for cat:"));
        assert!(output.contains("Playing video: Another Cat Video"));
        assert_eq!(
            player.show_playing().current().unwrap().id(),
            "another_cat_video_id"
        );
    }

    #[test]
    fn test_search_answer_not_a_number() {
        let (output, player) = run_script("SEARCH_VIDEOS_WITH_TAG #animal\nno\nSTOP\n");
        assert!(output.contains("  3) Funny Dogs"));
        assert!(!output.contains("Playing video"));
        assert!(output.contains("Cannot stop video: No video is currently playing"));
        assert!(player.show_playing().is_stopped());
    }

    #[test]
    fn test_empty_search_does_not_consume_next_line() {
        let (output, player) = run_script("SEARCH_VIDEOS_WITH_TAG cat\nPLAY funny_dogs_video_id\n");
        assert!(output.contains("No search results for cat"));
        assert!(output.contains("Playing video: Funny Dogs"));
        assert!(!player.show_playing().is_stopped());
    }

    #[test]
    fn test_playlist_session() {
        let script = "\
CREATE_PLAYLIST My_List
ADD_TO_PLAYLIST my_list amazing_cats_video_id
SHOW_ALL_PLAYLISTS
SHOW_PLAYLIST MY_LIST
DELETE_PLAYLIST my_LIST
SHOW_ALL_PLAYLISTS
";
        let (output, _) = run_script(script);
        assert!(output.contains("Successfully created new playlist: My_List"));
        assert!(output.contains("Added video to My_List: Amazing Cats"));
        assert!(output.contains("  My_List (1 video)"));
        assert!(output.contains("Showing playlist: My_List"));
        assert!(output.contains("Deleted playlist: My_List"));
        assert!(output.contains("No playlists exist yet"));
    }
}
