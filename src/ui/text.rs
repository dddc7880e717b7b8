//! Game text
//!
//! Prompt, help and end-of-game lines. Event text lives with the events.

use crate::game::{GameStatus, StatusSnapshot};
use crate::world::Cave;

/// Shown once at start-up
pub const BANNER: &str = "HUNT THE WUMPUS";

const HELP: &str = "\
Commands:
  move <cave>          walk through a tunnel to an adjacent cave (m)
  shoot <cave> ...     loose a crooked arrow through up to 5 caves (s)
                       caves may be separated by spaces or commas
  help                 show this text (?)
  quit                 give up (q)

The Wumpus sleeps in one of 20 caves. You can smell it one tunnel away.
Drafts mean a bottomless pit is near; rustling means giant bats.
An arrow aimed at a cave with no tunnel goes wild. Five arrows, no refills.";

/// Help text, one entry per line
pub fn help_lines() -> Vec<String> {
    HELP.lines().map(str::to_string).collect()
}

/// Lines describing where the player is, warnings last
pub fn prompt_lines(snapshot: &StatusSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("You are in cave {}.", snapshot.player_cave),
        format!("Tunnels lead to {}.", join_caves(&snapshot.neighbors)),
        format!("Arrows left: {}.", snapshot.arrows_remaining),
    ];
    lines.extend(snapshot.hazards.warnings().iter().map(ToString::to_string));
    lines
}

/// Describe an arrow's flight
pub fn arrow_path_line(path: &[Cave]) -> String {
    format!("The arrow flies through {}.", join_caves(path))
}

/// Closing line for a finished game
pub fn outcome_line(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won => Some("Hee hee hee. The Wumpus'll get you next time!"),
        GameStatus::Lost => Some("Ha ha ha. You lose!"),
    }
}

fn join_caves(caves: &[Cave]) -> String {
    caves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::HazardFlags;

    fn cave(id: u32) -> Cave {
        Cave::new(id).unwrap()
    }

    #[test]
    fn test_prompt() {
        let snapshot = StatusSnapshot {
            player_cave: cave(1),
            neighbors: [cave(2), cave(5), cave(8)],
            hazards: HazardFlags { wumpus_nearby: false, pit_nearby: true, bat_nearby: true },
            arrows_remaining: 3,
            status: GameStatus::Playing,
        };
        assert_eq!(
            prompt_lines(&snapshot),
            vec![
                "You are in cave 1.",
                "Tunnels lead to 2, 5, 8.",
                "Arrows left: 3.",
                "I feel a draft.",
                "Bats nearby!",
            ]
        );
    }

    #[test]
    fn test_arrow_path_line() {
        assert_eq!(
            arrow_path_line(&[cave(2), cave(10)]),
            "The arrow flies through 2, 10."
        );
    }

    #[test]
    fn test_outcome_only_when_over() {
        assert!(outcome_line(GameStatus::Playing).is_none());
        assert!(outcome_line(GameStatus::Won).is_some());
        assert!(outcome_line(GameStatus::Lost).is_some());
    }

    #[test]
    fn test_help_mentions_every_command() {
        let help = help_lines().join("\n");
        for word in ["move", "shoot", "help", "quit"] {
            assert!(help.contains(word));
        }
    }
}
