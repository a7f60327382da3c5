//! Monte Carlo Tree Search for gate-duel.
//!
//! ## Overview
//!
//! Plain UCT over the perfect-information circuit game:
//!
//! - **Fresh tree per decision**: the root is a clone of the caller's state;
//!   the tree is dropped once a move is chosen
//! - **Arena storage**: nodes live in a `Vec` and refer to each other by `NodeId`
//! - **Fixed perspective**: every result is scored for the searching player
//! - **Robust child**: the chosen move is the most visited root child
//! - **Seeded**: expansion order and rollouts draw from one `GameRng`
//!
//! ## Usage
//!
//! ```rust
//! use gate_duel::core::{GameState, Player};
//! use gate_duel::mcts::{MCTSConfig, MCTSSearch};
//!
//! let state = GameState::standard();
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_simulations(200));
//!
//! if let Some(mv) = search.search(&state, Player::One) {
//!     println!("Best move: {mv}");
//! }
//!
//! for stat in search.move_statistics(&state, Player::One).iter().take(3) {
//!     println!("{} at slot {}: {:.2}", stat.gate_name, stat.slot, stat.win_rate);
//! }
//! ```
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! use gate_duel::mcts::{MCTSConfig, MCTSSearch};
//!
//! let search = MCTSSearch::new(MCTSConfig::default())
//!     .with_selection(MySelection)
//!     .with_simulation(MyRollout);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::{MoveStat, SearchStats};
pub use tree::{MCTSTree, TreeStats};
