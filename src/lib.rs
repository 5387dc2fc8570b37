//! hand-rank: five-card poker hand classification
//!
//! Goals:
//! - Classify exactly one five-card hand into one of nine ordered categories
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! Two pure stages: [`hand::parse_hand`] turns raw card tokens into a
//! validated [`hand::Hand`], and [`classifier::classify`] maps that hand to a
//! [`classifier::RankCategory`]. Both are side-effect free and safe to call
//! from any number of threads.
//!
//! ## Quick start
//! ```
//! use hand_rank::classifier::{classify, RankCategory};
//! use hand_rank::hand::parse_hand;
//!
//! let hand = parse_hand(&["4♥", "5♥", "6♥", "7♥", "8♥"]).unwrap();
//! assert_eq!(classify(&hand), RankCategory::StraightFlush);
//! ```

pub mod cards;
pub mod classifier;
pub mod deck;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
