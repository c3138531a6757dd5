//! Exact game-tree search for tic-tac-toe, plus the pieces a driver needs
//! around it: game state, a seeded random source, config loading and logging.

pub mod config;
pub mod games;
pub mod logger;
