//! Game logic (deterministic).
//!
//! Cards, the eight-deck shoe, baccarat drawing rules and the dealer that
//! walks a shuffled shoe hand by hand.

pub mod card;
pub mod dealer;
pub mod rules;
pub mod shoe;

pub use card::{Card, Suit};
pub use dealer::{DealPhase, Dealer, HandRecord, Round};
pub use rules::{Outcome, Special, Winner};
pub use shoe::{Shoe, SHOE_SIZE};
