//! Application state and input handling
//!
//! Owns one game and answers each line of input with lines of text.

use crate::error::Result;
use crate::game::{status_snapshot, Event, GameState, TurnEngine};
use crate::rng::RandomSource;
use crate::world::CaveGraph;

use super::command::{parse_command, Command};
use super::text;

/// What to print after a line of input, and whether to keep reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub keep_going: bool,
}

impl Reply {
    fn more(lines: Vec<String>) -> Self {
        Self { lines, keep_going: true }
    }
}

/// A running game plus the random source driving it
pub struct App<R: RandomSource> {
    graph: CaveGraph,
    state: GameState,
    random: R,
}

impl<R: RandomSource> App<R> {
    /// Start a fresh game
    pub fn new(mut random: R) -> Result<Self> {
        let graph = CaveGraph::dodecahedron();
        let state = GameState::initialize(&graph, &mut random)?;
        Ok(Self { graph, state, random })
    }

    /// Resume from an explicit state
    pub fn with_state(state: GameState, random: R) -> Self {
        Self {
            graph: CaveGraph::dodecahedron(),
            state,
            random,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Banner and first prompt
    pub fn intro(&self) -> Vec<String> {
        let mut lines = vec![text::BANNER.to_string(), String::new()];
        lines.extend(self.prompt());
        lines
    }

    /// Handle one line of input.
    ///
    /// Bad input and refused moves become messages. Only broken engine
    /// invariants come back as errors.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line.trim(), err);
                return Ok(Reply::more(vec![err.to_string()]));
            }
        };

        let engine = TurnEngine::new(&self.graph);
        let outcome = match command {
            Command::Help => return Ok(Reply::more(text::help_lines())),
            Command::Quit => {
                return Ok(Reply {
                    lines: vec!["Giving up already?".to_string()],
                    keep_going: false,
                })
            }
            Command::Move(destination) => engine
                .move_player(&mut self.state, &mut self.random, destination)
                .map(|result| narrate(&result.events)),
            Command::Shoot(targets) => engine
                .shoot(&mut self.state, &mut self.random, &targets)
                .map(|result| {
                    let mut lines = Vec::new();
                    if !result.path.is_empty() {
                        lines.push(text::arrow_path_line(&result.path));
                    }
                    lines.extend(narrate(&result.events));
                    lines
                }),
        };

        let mut lines = match outcome {
            Ok(lines) => lines,
            Err(err) if err.is_recoverable() => vec![err.to_string()],
            Err(err) => {
                log::error!("Engine invariant broken: {}", err);
                return Err(err);
            }
        };

        match text::outcome_line(self.state.status()) {
            Some(closing) => {
                lines.push(closing.to_string());
                Ok(Reply { lines, keep_going: false })
            }
            None => {
                lines.push(String::new());
                lines.extend(self.prompt());
                Ok(Reply::more(lines))
            }
        }
    }

    fn prompt(&self) -> Vec<String> {
        text::prompt_lines(&status_snapshot(&self.state, &self.graph))
    }
}

/// Event text, leaving warnings to the prompt
fn narrate(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter(|event| !event.is_warning())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::rng::{ScriptedRandom, StdRandom};
    use crate::world::Cave;

    fn cave(id: u32) -> Cave {
        Cave::new(id).unwrap()
    }

    fn app() -> App<ScriptedRandom> {
        let state =
            GameState::from_layout(cave(1), cave(13), [cave(3), cave(4)], [cave(15), cave(17)])
                .unwrap();
        App::with_state(state, ScriptedRandom::default())
    }

    #[test]
    fn test_intro_shows_prompt() {
        let lines = app().intro();
        assert_eq!(lines[0], text::BANNER);
        assert!(lines.contains(&"You are in cave 1.".to_string()));
    }

    #[test]
    fn test_move_then_prompt() {
        let mut app = app();
        let reply = app.handle_line("move 2").unwrap();
        assert!(reply.keep_going);
        assert_eq!(reply.lines[0], "Moving to cave 2.");
        assert!(reply.lines.contains(&"You are in cave 2.".to_string()));
        // warning printed once, by the prompt
        let drafts = reply.lines.iter().filter(|l| *l == "I feel a draft.").count();
        assert_eq!(drafts, 1);
    }

    #[test]
    fn test_invalid_input_leaves_state_alone() {
        let mut app = app();
        let before = app.state().clone();
        for line in ["move banana", "move 3", "move 99", "shoot", "fly 2"] {
            let reply = app.handle_line(line).unwrap();
            assert!(reply.keep_going, "{}", line);
            assert!(!reply.lines.is_empty());
        }
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_unreachable_message() {
        let mut app = app();
        let reply = app.handle_line("move 3").unwrap();
        assert_eq!(reply.lines[0], "No tunnel leads from cave 1 to cave 3");
    }

    #[test]
    fn test_winning_shot_ends_session() {
        let state =
            GameState::from_layout(cave(1), cave(2), [cave(3), cave(4)], [cave(15), cave(17)])
                .unwrap();
        let mut app = App::with_state(state, ScriptedRandom::default());
        let reply = app.handle_line("shoot 2").unwrap();
        assert!(!reply.keep_going);
        assert_eq!(reply.lines[0], "The arrow flies through 2.");
        assert_eq!(reply.lines[1], "Aha! You got the Wumpus!");
        assert_eq!(app.state().status(), GameStatus::Won);
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app();
        assert!(app.handle_line("help").unwrap().keep_going);
        assert!(!app.handle_line("quit").unwrap().keep_going);
    }

    #[test]
    fn test_seeded_game_runs_out_of_arrows() {
        let mut app = App::new(StdRandom::seeded(3)).unwrap();
        let graph = CaveGraph::dodecahedron();
        // five shots, then the empty quiver ends it
        for _ in 0..6 {
            let aim = graph.neighbors(app.state().player_cave())[0];
            let reply = app.handle_line(&format!("shoot {}", aim)).unwrap();
            if !reply.keep_going {
                break;
            }
        }
        assert!(app.state().status().is_over());
    }
}
