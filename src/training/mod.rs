//! Episode driver for self-play training and spectator games.
//!
//! ## Overview
//!
//! - **SelfPlayDriver**: Alternates two seats over a shared board and hands
//!   out terminal rewards
//! - **PlayObserver**: Hooks for rendering or recording moves as they happen
//! - **PlaySummary**: Win/draw counts for a run
//!
//! ## Usage
//!
//! ```rust
//! use td_tictactoe::agents::{TdAgent, TdConfig};
//! use td_tictactoe::core::GameRng;
//! use td_tictactoe::training::{DriverConfig, SelfPlayDriver, SilentObserver};
//!
//! let p1 = TdAgent::with_rng("p1", TdConfig::default(), GameRng::new(1));
//! let p2 = TdAgent::with_rng("p2", TdConfig::default(), GameRng::new(2));
//! let mut driver = SelfPlayDriver::new(p1, p2, DriverConfig::default().with_episodes(10));
//!
//! let summary = driver.run(&mut SilentObserver).unwrap();
//! assert_eq!(summary.episodes, 10);
//! ```

pub mod observer;
pub mod self_play;
pub mod stats;

pub use observer::{ConsoleObserver, PlayObserver, SilentObserver};
pub use self_play::{rewards, DriverConfig, EpisodeOutcome, SelfPlayDriver};
pub use stats::PlaySummary;
