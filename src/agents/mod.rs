//! Seats that can play an episode.
//!
//! - [`TdAgent`]: epsilon-greedy player that learns a tabular value function
//! - [`InteractiveAgent`]: takes moves from an [`InputSource`], learns nothing
//!
//! Both implement [`Agent`], the interface the self-play driver talks to.

pub mod config;
pub mod interactive;
pub mod td;
pub mod traits;
pub mod value_table;

pub use config::TdConfig;
pub use interactive::{parse_coord, InputSource, InteractiveAgent, LineInput};
pub use td::TdAgent;
pub use traits::Agent;
pub use value_table::ValueTable;
