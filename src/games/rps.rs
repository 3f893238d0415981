//! Rock, paper, scissors: round resolution and best-of-N match scoring.

use crate::debug_invariants::DebugInvariants;
use crate::toolkit_error::ToolkitError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hand played in one round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    pub fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Choice::ALL
            .into_iter()
            .find(|c| s.eq_ignore_ascii_case(c.name()))
            .ok_or_else(|| ToolkitError::UnknownChoice(s.to_string()))
    }
}

/// One side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Player {
    User,
    Computer,
}

/// Result of a single round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Tie,
    UserWins,
    ComputerWins,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Tie => None,
            RoundOutcome::UserWins => Some(Player::User),
            RoundOutcome::ComputerWins => Some(Player::Computer),
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundOutcome::Tie => "It's a tie!",
            RoundOutcome::UserWins => "You win this round!",
            RoundOutcome::ComputerWins => "Computer wins this round!",
        })
    }
}

/// Resolve one round.
///
/// # Example
/// ```rust
/// use basics_toolkit::games::{Choice, RoundOutcome, determine_winner};
/// assert_eq!(determine_winner(Choice::Rock, Choice::Scissors), RoundOutcome::UserWins);
/// assert_eq!(determine_winner(Choice::Rock, Choice::Paper), RoundOutcome::ComputerWins);
/// ```
pub fn determine_winner(user: Choice, computer: Choice) -> RoundOutcome {
    if user == computer {
        RoundOutcome::Tie
    } else if user.beats() == computer {
        RoundOutcome::UserWins
    } else {
        RoundOutcome::ComputerWins
    }
}

/// Match lengths offered by the game menu.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    BestOfThree,
    BestOfFive,
}

impl GameMode {
    pub fn best_of(self) -> u32 {
        match self {
            GameMode::BestOfThree => 3,
            GameMode::BestOfFive => 5,
        }
    }
}

/// Parses the menu entry: `"1"` for best of 3, `"2"` for best of 5.
impl FromStr for GameMode {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(GameMode::BestOfThree),
            "2" => Ok(GameMode::BestOfFive),
            other => Err(ToolkitError::UnknownGameMode(other.to_string())),
        }
    }
}

/// Rounds won by each side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub user: u32,
    pub computer: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You: {}, Computer: {}", self.user, self.computer)
    }
}

/// A best-of-N match: the first side to win `N / 2 + 1` rounds takes it.
#[derive(Clone, Debug)]
pub struct RpsMatch {
    best_of: u32,
    score: Score,
    rounds_played: u32,
}

impl RpsMatch {
    /// `best_of` must be a positive odd number.
    pub fn new(best_of: u32) -> Result<Self, ToolkitError> {
        if best_of == 0 || best_of % 2 == 0 {
            return Err(ToolkitError::InvalidBestOf(best_of));
        }
        Ok(Self {
            best_of,
            score: Score::default(),
            rounds_played: 0,
        })
    }

    pub fn from_mode(mode: GameMode) -> Self {
        Self {
            best_of: mode.best_of(),
            score: Score::default(),
            rounds_played: 0,
        }
    }

    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    /// Round wins needed to take the match.
    pub fn games_needed(&self) -> u32 {
        self.best_of / 2 + 1
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Rounds played so far, ties included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// The side that reached [`games_needed`](Self::games_needed), if any.
    pub fn winner(&self) -> Option<Player> {
        let needed = self.games_needed();
        if self.score.user >= needed {
            Some(Player::User)
        } else if self.score.computer >= needed {
            Some(Player::Computer)
        } else {
            None
        }
    }

    /// Play one round. Ties are recorded as played but change no score.
    pub fn play_round(
        &mut self,
        user: Choice,
        computer: Choice,
    ) -> Result<RoundOutcome, ToolkitError> {
        if self.is_finished() {
            return Err(ToolkitError::MatchFinished);
        }
        let outcome = determine_winner(user, computer);
        match outcome.winner() {
            Some(Player::User) => self.score.user += 1,
            Some(Player::Computer) => self.score.computer += 1,
            None => {}
        }
        self.rounds_played += 1;
        if let Some(winner) = self.winner() {
            debug!(
                "rps: best of {} won by {winner:?} after {} rounds ({})",
                self.best_of, self.rounds_played, self.score
            );
        }
        crate::debug_invariants!(self.validate_invariants(), "RpsMatch::play_round");
        Ok(outcome)
    }
}

impl DebugInvariants for RpsMatch {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "RpsMatch");
    }

    fn validate_invariants(&self) -> Result<(), ToolkitError> {
        let needed = self.games_needed();
        if self.score.user > needed || self.score.computer > needed {
            return Err(ToolkitError::InvariantViolation(format!(
                "score {} exceeds the {needed} wins needed",
                self.score
            )));
        }
        if self.score.user == needed && self.score.computer == needed {
            return Err(ToolkitError::InvariantViolation(
                "both players reached the winning score".into(),
            ));
        }
        if self.score.user + self.score.computer > self.rounds_played {
            return Err(ToolkitError::InvariantViolation(format!(
                "{} round wins recorded in {} rounds",
                self.score.user + self.score.computer,
                self.rounds_played
            )));
        }
        Ok(())
    }
}
