//! poker-odds: hand classification and equity calculation for Texas Hold'em
//! and short-deck (6+) Hold'em
//!
//! Goals:
//! - Classify any 5 to 7 cards under pluggable variant rules
//! - Exact odds for partial boards, seeded Monte Carlo for empty ones
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: odds on the turn
//! ```
//! use poker_odds::equity::{calculate, Options};
//! use poker_odds::hand::CardGroup;
//!
//! let hands: Vec<CardGroup> = vec!["AsKc".parse().unwrap(), "QcQh".parse().unwrap()];
//! let board: CardGroup = "2d Jd Tc 4s".parse().unwrap();
//!
//! let odds = calculate(&hands, Some(&board), &Options::default()).unwrap();
//! assert_eq!(odds.equities()[0].to_string(), "18%");
//! assert_eq!(odds.hand_rank(1).unwrap().to_string(), "Pair of queens (J,T,4 high)");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-odds -- -b 2dJdTc AsKc QcQh
//! ```

pub mod cards;
pub mod deck;
pub mod equity;
pub mod evaluator;
pub mod hand;
pub mod variants;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
