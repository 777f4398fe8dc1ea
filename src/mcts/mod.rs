//! Monte Carlo Tree Search for Pente.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in a flat vector, linked by index; the
//!   parent link exists only for backpropagation.
//! - **UCT selection** with `C = 1.41`; unvisited children are always
//!   explored first.
//! - **Heuristic or random playouts**: pass an
//!   [`Evaluator`](crate::eval::Evaluator) to guide simulation moves by
//!   its score grid, or `None` for uniform random.
//! - **Robust child**: the final move is the most-visited root child.
//!
//! ## Usage
//!
//! ```
//! use pente::core::{Player, SearchState};
//! use pente::mcts::{MctsConfig, MctsSearch, SearchBudget};
//!
//! let state = SearchState::initial(7);
//! let mut search = MctsSearch::new(MctsConfig::default());
//!
//! if let Some((mv, next)) = search.search(
//!     &state,
//!     Player::One,
//!     SearchBudget::Iterations(100),
//!     None,
//! ) {
//!     println!("best move: {mv}");
//!     assert_eq!(next.last_move(), Some(mv));
//! }
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::{MctsConfig, SearchBudget};
pub use node::{MctsNode, NodeId};
pub use search::MctsSearch;
pub use stats::SearchStats;
pub use tree::{MctsTree, TreeStats};
