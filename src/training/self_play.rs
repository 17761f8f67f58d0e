//! Self-play loop.
//!
//! The driver owns the board and both seats. Each episode alternates moves
//! between the seats, records every resulting board with the seat that
//! produced it, and on a terminal result hands each seat its reward before
//! clearing the episode state.

use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::{BoardState, Player, PlayerMap};
use crate::error::{ConfigError, PlayError};
use crate::rules::GameResult;

use super::observer::PlayObserver;
use super::stats::PlaySummary;

/// Reward for the winning seat.
pub const WIN_REWARD: f64 = 1.0;

/// Reward for the losing seat.
pub const LOSS_REWARD: f64 = -1.0;

/// Draw rewards. The first mover gets less for a draw than the second.
pub const DRAW_REWARDS: (f64, f64) = (0.1, 0.5);

/// Configuration for the self-play driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Episodes played by [`SelfPlayDriver::run`].
    pub episodes: usize,

    /// Log progress every this many episodes.
    pub progress_interval: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            progress_interval: 1000,
        }
    }
}

impl DriverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_interval == 0 {
            return Err(ConfigError::Validation(
                "driver.progress_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Per-seat rewards for a terminal result, or `None` while in progress.
#[must_use]
pub fn rewards(result: GameResult) -> Option<PlayerMap<f64>> {
    match result {
        GameResult::Winner(Player::X) => Some(PlayerMap::from_pair(WIN_REWARD, LOSS_REWARD)),
        GameResult::Winner(Player::O) => Some(PlayerMap::from_pair(LOSS_REWARD, WIN_REWARD)),
        GameResult::Draw => Some(PlayerMap::from_pair(DRAW_REWARDS.0, DRAW_REWARDS.1)),
        GameResult::InProgress => None,
    }
}

/// Result of a single finished episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeOutcome {
    pub result: GameResult,
    pub moves: usize,
}

/// Runs episodes between two seats.
///
/// Seat X moves first in every episode.
pub struct SelfPlayDriver<A: Agent = Box<dyn Agent>> {
    config: DriverConfig,
    state: BoardState,
    agents: PlayerMap<A>,
}

impl<A: Agent> SelfPlayDriver<A> {
    pub fn new(x: A, o: A, config: DriverConfig) -> Self {
        Self {
            config,
            state: BoardState::new(),
            agents: PlayerMap::from_pair(x, o),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The board between moves. Reset to empty between episodes.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[must_use]
    pub fn agent(&self, player: Player) -> &A {
        &self.agents[player]
    }

    pub fn agent_mut(&mut self, player: Player) -> &mut A {
        &mut self.agents[player]
    }

    /// Consume the driver, returning the (X, O) seats.
    pub fn into_agents(self) -> (A, A) {
        let [x, o] = self.agents.into_array();
        (x, o)
    }

    /// Play the configured number of episodes.
    ///
    /// Stops at the first episode that fails; the board and both seats'
    /// trajectories are cleared before the error is returned.
    pub fn run(&mut self, observer: &mut dyn PlayObserver) -> Result<PlaySummary, PlayError> {
        let total = self.config.episodes;
        let interval = self.config.progress_interval.max(1);
        let mut summary = PlaySummary::new();

        for episode in 0..total {
            if episode % interval == 0 {
                log::info!("episode {episode}/{total}");
            }
            let outcome = self.play_episode(observer)?;
            summary.record(outcome.result, outcome.moves);
        }

        log::info!(
            "finished {} episodes: {} wins {}, {} wins {}, {} draws",
            summary.episodes,
            self.agents[Player::X].name(),
            summary.x_wins,
            self.agents[Player::O].name(),
            summary.o_wins,
            summary.draws,
        );
        Ok(summary)
    }

    /// Play one episode to a terminal result and distribute rewards.
    pub fn play_episode(
        &mut self,
        observer: &mut dyn PlayObserver,
    ) -> Result<EpisodeOutcome, PlayError> {
        observer.on_episode_start(&self.state);

        let (result, moves) = match self.play_moves(observer) {
            Ok(finished) => finished,
            Err(err) => {
                log::debug!("episode aborted after error: {err}");
                self.clear_episode();
                return Err(err);
            }
        };

        if let Some(rewards) = rewards(result) {
            for (player, agent) in self.agents.iter_mut() {
                agent.propagate_reward(rewards[player]);
            }
        }

        let winner_name = result.winner().map(|p| self.agents[p].name().to_owned());
        observer.on_episode_end(result, winner_name.as_deref());
        log::debug!("episode finished after {moves} moves: {result:?}");

        self.clear_episode();
        Ok(EpisodeOutcome { result, moves })
    }

    fn play_moves(
        &mut self,
        observer: &mut dyn PlayObserver,
    ) -> Result<(GameResult, usize), PlayError> {
        let mut moves_played = 0;
        loop {
            let player = self.state.active_player();
            let moves = self.state.available_moves();
            let board = *self.state.board();

            let action = self.agents[player].choose_action(&moves, &board, player)?;
            self.state.apply_move(action)?;
            moves_played += 1;

            let hash = self.state.canonical_hash();
            self.agents[player].record_visited(hash);
            observer.on_move(player, action, &self.state);

            let result = self.state.evaluate_winner();
            if result.is_terminal() {
                return Ok((result, moves_played));
            }
        }
    }

    fn clear_episode(&mut self) {
        for (_, agent) in self.agents.iter_mut() {
            agent.end_episode();
        }
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{TdAgent, TdConfig};
    use crate::core::{Board, BoardHash, Coord, GameRng};
    use crate::training::SilentObserver;

    /// Plays a fixed list of moves and records what the driver tells it.
    struct ScriptedAgent {
        name: String,
        script: Vec<Coord>,
        next: usize,
        visited: Vec<BoardHash>,
        rewards: Vec<f64>,
        episodes_ended: usize,
    }

    impl ScriptedAgent {
        fn new(name: &str, script: &[(usize, usize)]) -> Self {
            Self {
                name: name.to_string(),
                script: script.iter().map(|&c| Coord::from(c)).collect(),
                next: 0,
                visited: Vec::new(),
                rewards: Vec::new(),
                episodes_ended: 0,
            }
        }
    }

    impl Agent for ScriptedAgent {
        fn name(&self) -> &str {
            &self.name
        }

        fn choose_action(
            &mut self,
            _moves: &[Coord],
            _board: &Board,
            _symbol: Player,
        ) -> Result<Coord, PlayError> {
            let coord = self
                .script
                .get(self.next)
                .copied()
                .ok_or(PlayError::NoAvailableMoves)?;
            self.next += 1;
            Ok(coord)
        }

        fn record_visited(&mut self, hash: BoardHash) {
            self.visited.push(hash);
        }

        fn propagate_reward(&mut self, reward: f64) {
            self.rewards.push(reward);
        }

        fn end_episode(&mut self) {
            self.episodes_ended += 1;
        }
    }

    fn scripted_driver(
        x: &[(usize, usize)],
        o: &[(usize, usize)],
    ) -> SelfPlayDriver<ScriptedAgent> {
        SelfPlayDriver::new(
            ScriptedAgent::new("p1", x),
            ScriptedAgent::new("p2", o),
            DriverConfig::default().with_episodes(1),
        )
    }

    #[test]
    fn test_rewards() {
        let x_win = rewards(GameResult::Winner(Player::X)).unwrap();
        assert_eq!((x_win[Player::X], x_win[Player::O]), (1.0, -1.0));

        let o_win = rewards(GameResult::Winner(Player::O)).unwrap();
        assert_eq!((o_win[Player::X], o_win[Player::O]), (-1.0, 1.0));

        let draw = rewards(GameResult::Draw).unwrap();
        assert_eq!((draw[Player::X], draw[Player::O]), (0.1, 0.5));

        assert!(rewards(GameResult::InProgress).is_none());
    }

    #[test]
    fn test_driver_config_validation() {
        assert!(DriverConfig::default().validate().is_ok());
        assert!(DriverConfig::default()
            .with_progress_interval(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_x_win_episode() {
        // X takes the top row.
        let mut driver = scripted_driver(&[(0, 0), (0, 1), (0, 2)], &[(1, 0), (1, 1)]);
        let outcome = driver.play_episode(&mut SilentObserver).unwrap();

        assert_eq!(outcome.result, GameResult::Winner(Player::X));
        assert_eq!(outcome.moves, 5);

        let x = driver.agent(Player::X);
        let o = driver.agent(Player::O);
        assert_eq!(x.rewards, vec![1.0]);
        assert_eq!(o.rewards, vec![-1.0]);
        assert_eq!(x.visited.len(), 3);
        assert_eq!(o.visited.len(), 2);
        assert_eq!(x.visited[2].as_str(), "XXXOO----");
        assert_eq!(o.visited[0].as_str(), "X--O-----");
        assert_eq!(x.episodes_ended, 1);
        assert_eq!(o.episodes_ended, 1);

        // Ready for the next episode.
        assert_eq!(driver.state().board(), &Board::new());
        assert_eq!(driver.state().active_player(), Player::X);
        assert!(!driver.state().is_terminal());
    }

    #[test]
    fn test_draw_episode() {
        // X O X
        // X O O
        // O X X
        let mut driver = scripted_driver(
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (2, 0), (1, 2)],
        );
        let outcome = driver.play_episode(&mut SilentObserver).unwrap();

        assert_eq!(outcome.result, GameResult::Draw);
        assert_eq!(outcome.moves, 9);
        assert_eq!(driver.agent(Player::X).rewards, vec![0.1]);
        assert_eq!(driver.agent(Player::O).rewards, vec![0.5]);
    }

    #[test]
    fn test_failed_episode_resets() {
        // O tries to play on X's cell.
        let mut driver = scripted_driver(&[(1, 1)], &[(1, 1)]);
        let err = driver.play_episode(&mut SilentObserver).unwrap_err();

        assert!(matches!(err, PlayError::Move(_)));
        assert_eq!(driver.state().board(), &Board::new());
        assert!(driver.agent(Player::X).rewards.is_empty());
        assert_eq!(driver.agent(Player::X).episodes_ended, 1);
        assert_eq!(driver.agent(Player::O).episodes_ended, 1);
    }

    #[test]
    fn test_greedy_td_game_updates_both_tables() {
        let config = TdConfig::default().greedy();
        let x = TdAgent::with_rng("p1", config.clone(), GameRng::new(1));
        let o = TdAgent::with_rng("p2", config, GameRng::new(2));
        let mut driver = SelfPlayDriver::new(x, o, DriverConfig::default().with_episodes(1));

        let summary = driver.run(&mut SilentObserver).unwrap();
        assert_eq!(summary.x_wins, 1);
        assert_eq!(summary.total_moves, 7);

        // Both seats pick the last empty cell each turn, so X completes the
        // anti-diagonal on its fourth move.
        let expected = [
            (
                Player::X,
                vec![
                    ("--------X", 0.00104976),
                    ("------XOX", 0.005832),
                    ("----XOXOX", 0.0324),
                    ("--XOXOXOX", 0.18),
                ],
            ),
            (
                Player::O,
                vec![
                    ("-------OX", -0.005832),
                    ("-----OXOX", -0.0324),
                    ("---OXOXOX", -0.18),
                ],
            ),
        ];
        for (player, entries) in expected {
            let values = driver.agent(player).values();
            assert_eq!(values.len(), entries.len());
            for (hash, value) in entries {
                let key: Board = hash.parse().unwrap();
                let actual = values.get(&key.canonical_hash());
                assert!(
                    (actual - value).abs() < 1e-12,
                    "{player} value for {hash}: {actual}"
                );
            }
            assert!(driver.agent(player).trajectory().is_empty());
        }
    }
}
