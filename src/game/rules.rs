//! Baccarat Rules
//!
//! Hand totals, the natural check, the third-card tableau and settlement.
//! Pure functions over card slices; the dealer decides when to call them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::card::{point_value, Card};

/// Cards in a freshly dealt hand.
pub const INITIAL_HAND_SIZE: usize = 2;

/// Cards in a hand that took a third card.
pub const MAX_HAND_SIZE: usize = 3;

/// Highest total on which the player takes a third card.
pub const PLAYER_DRAW_MAX: u8 = 5;

/// Total of a raw identifier list, modulo 10.
///
/// ```
/// use baccarat_fair::game::rules::get_cards_value;
///
/// assert_eq!(get_cards_value(&[113, 210]), 0); // K + 10
/// assert_eq!(get_cards_value(&[101, 302]), 3); // A + 2
/// ```
pub fn get_cards_value(ids: &[u16]) -> u8 {
    let sum: u32 = ids.iter().map(|&id| point_value(id) as u32).sum();
    (sum % 10) as u8
}

/// Total of a hand, modulo 10.
pub fn hand_value(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|c| c.value() as u32).sum();
    (sum % 10) as u8
}

#[inline]
fn is_eight_or_nine(total: u8) -> bool {
    matches!(total, 8 | 9)
}

/// A natural: both hands hold exactly two cards and either is worth 8 or 9.
///
/// Neither side draws once a natural is on the table.
pub fn is_natural(player: &[Card], banker: &[Card]) -> bool {
    player.len() == INITIAL_HAND_SIZE
        && banker.len() == INITIAL_HAND_SIZE
        && (is_eight_or_nine(hand_value(player)) || is_eight_or_nine(hand_value(banker)))
}

/// Player rule: draw on 0-5, stand on 6-7. Assumes no natural.
pub fn player_draws(player_total: u8) -> bool {
    player_total <= PLAYER_DRAW_MAX
}

/// Banker rule, evaluated after the player's decision. Assumes no natural.
///
/// `player_third` is the player's third card, if one was drawn.
pub fn banker_draws(banker_total: u8, player_third: Option<Card>) -> bool {
    match (banker_total, player_third) {
        (0..=2, _) => true,
        (7..=u8::MAX, _) => false,
        (total, None) => total <= 5,
        (3, Some(third)) => third.value() != 8,
        (4, Some(third)) => (2..=7).contains(&third.value()),
        (5, Some(third)) => (4..=7).contains(&third.value()),
        (6, Some(third)) => (6..=7).contains(&third.value()),
        _ => false,
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Which side won the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Banker total is higher.
    Banker,
    /// Player total is higher.
    Player,
    /// Equal totals.
    Tie,
}

/// Named side-bet results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Special {
    /// No side-bet result.
    #[default]
    None,
    /// Banker wins with a three-card 7.
    Dragon7,
    /// Player wins with a three-card 8.
    Panda8,
}

/// Settled result of a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Winning side.
    pub winner: Winner,
    /// Side-bet flag.
    pub special: Special,
    /// Player total.
    pub player_total: u8,
    /// Banker total.
    pub banker_total: u8,
}

/// Settle a finished hand.
pub fn settle(player: &[Card], banker: &[Card]) -> Outcome {
    let player_total = hand_value(player);
    let banker_total = hand_value(banker);

    let (winner, special) = if banker_total > player_total {
        let special = if banker_total == 7 && banker.len() == MAX_HAND_SIZE {
            Special::Dragon7
        } else {
            Special::None
        };
        (Winner::Banker, special)
    } else if player_total > banker_total {
        let special = if player_total == 8 && player.len() == MAX_HAND_SIZE {
            Special::Panda8
        } else {
            Special::None
        };
        (Winner::Player, special)
    } else {
        (Winner::Tie, Special::None)
    };

    Outcome {
        winner,
        special,
        player_total,
        banker_total,
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Banker => write!(f, "Banker Win"),
            Winner::Player => write!(f, "Player Win"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            Special::Dragon7 => write!(f, "Dragon 7"),
            Special::Panda8 => write!(f, "Panda 8"),
            Special::None => write!(f, "{}", self.winner),
        }
    }
}
