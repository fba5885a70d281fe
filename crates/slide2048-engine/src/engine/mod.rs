//! Game rules built on top of the core grid types.
//!
//! - [`GameSession`] - A game from the first two tiles to the terminal grid
//! - [`GameStats`] - Score, move and merge counters
//! - [`TileSpawner`] - Seeded placement of new tiles
//! - [`TileSeed`] - Seed for deterministic tile spawning
//! - [`HighScore`] - Best score across sessions
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`]; two tiles are placed on an empty grid
//! 2. Apply a move in one of the four directions
//! 3. If the grid changed, one new tile is spawned and the merge sum is added to the score
//! 4. Repeat until no move can change the grid
//!
//! # Example
//!
//! ```
//! use slide2048_engine::{Direction, GameSession, HighScore};
//!
//! let mut session = GameSession::new();
//! let mut high_score = HighScore::default();
//!
//! for direction in [Direction::Left, Direction::Down, Direction::Right, Direction::Up] {
//!     let outcome = session.apply_move(direction);
//!     high_score.observe(session.stats().score());
//!     if outcome.game_over {
//!         println!("Game over!");
//!         break;
//!     }
//! }
//! assert!(high_score.value() >= session.stats().score());
//! ```

pub use self::{game_session::*, game_stats::*, high_score::*, tile_seed::*, tile_spawner::*};

mod game_session;
mod game_stats;
mod high_score;
mod tile_seed;
mod tile_spawner;
