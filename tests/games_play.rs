use basics_toolkit::games::{
    Choice, GameMode, GuessOutcome, GuessingGame, Player, RoundOutcome, RpsMatch,
};
use basics_toolkit::toolkit_error::ToolkitError;
use basics_toolkit::DebugInvariants;

/// Binary search finds any secret in 1..=100 within seven guesses.
#[test]
fn bisection_wins_quickly() {
    for secret in 1..=100 {
        let mut game = GuessingGame::new(1, 100, secret).unwrap();
        let (mut lo, mut hi) = game.bounds();
        loop {
            let mid = lo + (hi - lo) / 2;
            match game.guess(mid).unwrap() {
                GuessOutcome::TooLow => lo = mid + 1,
                GuessOutcome::TooHigh => hi = mid - 1,
                GuessOutcome::Correct { attempts } => {
                    assert!(attempts <= 7, "secret {secret} took {attempts}");
                    break;
                }
                GuessOutcome::OutOfRange { .. } => panic!("bisection left the range"),
            }
        }
        assert!(game.validate_invariants().is_ok());
    }
}

#[test]
fn guessing_intro_and_errors() {
    let game = GuessingGame::new(-10, 10, 0).unwrap();
    assert_eq!(game.intro(), "I'm thinking of a number between -10 and 10.");
    let err = GuessingGame::new(3, 1, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Maximum number must be greater than minimum number (got 3..=1)"
    );
}

#[test]
fn computer_sweeps_best_of_five() {
    let mut m = RpsMatch::from_mode(GameMode::BestOfFive);
    assert_eq!(m.games_needed(), 3);
    for _ in 0..3 {
        assert_eq!(
            m.play_round(Choice::Scissors, Choice::Rock),
            Ok(RoundOutcome::ComputerWins)
        );
    }
    assert_eq!(m.winner(), Some(Player::Computer));
    assert_eq!(m.score().to_string(), "You: 0, Computer: 3");
    assert_eq!(
        m.play_round(Choice::Rock, Choice::Scissors),
        Err(ToolkitError::MatchFinished)
    );
}

#[test]
fn long_match_with_ties() {
    let mut m = RpsMatch::new(3).unwrap();
    let rounds = [
        (Choice::Rock, Choice::Rock),
        (Choice::Paper, Choice::Scissors),
        (Choice::Scissors, Choice::Scissors),
        (Choice::Scissors, Choice::Paper),
        (Choice::Paper, Choice::Rock),
    ];
    for (user, computer) in rounds {
        m.play_round(user, computer).unwrap();
    }
    assert_eq!(m.rounds_played(), 5);
    assert_eq!(m.winner(), Some(Player::User));
    assert!(m.validate_invariants().is_ok());
}

#[test]
fn parse_user_input() {
    let choices: Result<Vec<Choice>, _> = ["rock", "Paper", " scissors\n"]
        .iter()
        .map(|s| s.parse())
        .collect();
    assert_eq!(
        choices.unwrap(),
        vec![Choice::Rock, Choice::Paper, Choice::Scissors]
    );
    assert_eq!(
        "quit".parse::<GameMode>(),
        Err(ToolkitError::UnknownGameMode("quit".into()))
    );
}
