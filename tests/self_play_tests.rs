//! Integration tests for the self-play driver.

use std::io::Cursor;

use td_tictactoe::agents::{Agent, InteractiveAgent, LineInput, TdAgent, TdConfig};
use td_tictactoe::core::{Board, GameRng, Player};
use td_tictactoe::error::PlayError;
use td_tictactoe::rules::GameResult;
use td_tictactoe::training::{ConsoleObserver, DriverConfig, SelfPlayDriver, SilentObserver};

fn td_pair(seed: u64, config: TdConfig) -> (TdAgent, TdAgent) {
    let mut rng = GameRng::new(seed);
    (
        TdAgent::with_rng("p1", config.clone(), rng.fork()),
        TdAgent::with_rng("p2", config, rng.fork()),
    )
}

fn scripted_human(lines: &str) -> InteractiveAgent<LineInput<Cursor<Vec<u8>>, Vec<u8>>> {
    InteractiveAgent::new(
        "human",
        LineInput::new(Cursor::new(lines.as_bytes().to_vec()), Vec::new()),
    )
}

// =============================================================================
// Training runs
// =============================================================================

#[test]
fn test_training_run_counts_every_episode() {
    let (x, o) = td_pair(42, TdConfig::default());
    let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(300));

    let summary = driver.run(&mut SilentObserver).unwrap();

    assert_eq!(summary.episodes, 300);
    assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 300);
    assert!(summary.total_moves >= 5 * 300);
    assert!(summary.total_moves <= 9 * 300);

    for player in Player::ALL {
        let agent = driver.agent(player);
        assert!(!agent.values().is_empty());
        assert!(agent.trajectory().is_empty());
        for (_, value) in agent.values().iter() {
            assert!((-1.0..=1.0).contains(&value), "{player} value {value}");
        }
    }
    assert_eq!(driver.state().board(), &Board::new());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed| {
        let (x, o) = td_pair(seed, TdConfig::default());
        let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(100));
        let summary = driver.run(&mut SilentObserver).unwrap();
        let (x, o) = driver.into_agents();
        (summary, x.values().clone(), o.values().clone())
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn test_seats_learn_only_their_own_boards() {
    let (x, o) = td_pair(3, TdConfig::default());
    let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(50));
    driver.run(&mut SilentObserver).unwrap();

    let count = |hash: &str, symbol: char| hash.chars().filter(|&c| c == symbol).count();

    // X's boards are produced by X moving, so X has one more mark than O.
    for (hash, _) in driver.agent(Player::X).values().iter() {
        assert_eq!(count(hash.as_str(), 'X'), count(hash.as_str(), 'O') + 1);
    }
    for (hash, _) in driver.agent(Player::O).values().iter() {
        assert_eq!(count(hash.as_str(), 'X'), count(hash.as_str(), 'O'));
    }
}

#[test]
fn test_zero_episodes_is_a_no_op() {
    let (x, o) = td_pair(1, TdConfig::default());
    let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(0));
    let summary = driver.run(&mut SilentObserver).unwrap();

    assert_eq!(summary.episodes, 0);
    assert!(driver.agent(Player::X).values().is_empty());
}

// =============================================================================
// Mixed seats
// =============================================================================

#[test]
fn test_human_versus_greedy_agent() {
    let computer = TdAgent::with_rng("computer", TdConfig::default().greedy(), GameRng::new(0));
    // The untrained greedy seat always takes the last open cell, so it fills
    // the bottom row while the human plays along the top.
    let human = scripted_human("0, 0\nnot a move\n0,0\n0, 1\n");

    let x: Box<dyn Agent> = Box::new(computer);
    let o: Box<dyn Agent> = Box::new(human);
    let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(1));
    let mut observer = ConsoleObserver::new(Vec::new());

    let summary = driver.run(&mut observer).unwrap();
    assert_eq!(summary.x_wins, 1);
    assert_eq!(summary.total_moves, 5);

    let output = String::from_utf8(observer.into_writer()).unwrap();
    assert!(output.contains("X plays (2, 2)"));
    assert!(output.contains("O plays (0, 1)"));
    assert!(output.contains("| X | X | X |"));
    assert!(output.ends_with("computer wins!\n"));

    let table = driver.agent(Player::X).value_table().unwrap();
    assert_eq!(table.len(), 3);
    assert!(driver.agent(Player::O).value_table().is_none());
}

#[test]
fn test_closed_input_aborts_and_resets() {
    let computer = TdAgent::with_rng("computer", TdConfig::default().greedy(), GameRng::new(0));
    let human = scripted_human("1, 1\n");

    let x: Box<dyn Agent> = Box::new(computer);
    let o: Box<dyn Agent> = Box::new(human);
    let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(3));

    let err = driver.run(&mut SilentObserver).unwrap_err();
    assert!(matches!(err, PlayError::InputClosed));

    // No reward was handed out and the board is ready for a new game.
    assert!(driver.agent(Player::X).value_table().unwrap().is_empty());
    assert_eq!(driver.state().board(), &Board::new());
    assert_eq!(driver.state().active_player(), Player::X);
}

#[test]
fn test_untrained_greedy_episode() {
    // Both seats take the last open cell; X completes the anti-diagonal on
    // the seventh move.
    let (x, o) = td_pair(5, TdConfig::default().greedy());
    let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default());
    let outcome = driver.play_episode(&mut SilentObserver).unwrap();

    assert!(outcome.result.is_terminal());
    assert_eq!(outcome.result, GameResult::Winner(Player::X));
    assert_eq!(outcome.moves, 7);
}
