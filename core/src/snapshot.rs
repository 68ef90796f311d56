use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a card should be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardVisual {
    Hidden,
    /// Face-up, either turned over by the player or shown by a peek.
    Flipped,
    Matched,
    Hinted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    /// Face value, `None` while the card is hidden.
    pub value: Option<CardValue>,
    pub visual: CardVisual,
    /// Whether a flip on this card would currently be accepted.
    pub interactable: bool,
}

/// Read-only, render-ready picture of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub cards: Vec<CardView>,
    pub move_count: Count,
    pub elapsed_seconds: Count,
    /// `elapsed_seconds` as `m:ss`.
    pub clock: String,
    pub matched_pairs: Count,
    pub total_pairs: Count,
    pub phase: Phase,
    pub hint_active: bool,
    pub peek_active: bool,
    pub hint_available: bool,
    pub peek_available: bool,
    pub hint_card_ids: Vec<CardId>,
}

impl Snapshot {
    pub fn card(&self, id: CardId) -> Option<&CardView> {
        self.cards.get(id as usize)
    }

    pub fn is_won(&self) -> bool {
        self.phase.is_won()
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        let playing = game.phase().is_playing();
        let hint = game.hint();
        let peek = game.peek();

        let cards = game
            .cards()
            .iter()
            .map(|card| {
                let hinted = hint.highlights(card.id);
                let peeked = peek.reveals(card.id);
                let visual = if card.is_matched {
                    CardVisual::Matched
                } else if hinted {
                    CardVisual::Hinted
                } else if card.is_flipped || peeked {
                    CardVisual::Flipped
                } else {
                    CardVisual::Hidden
                };
                let value = match visual {
                    CardVisual::Hidden => None,
                    _ => Some(card.value),
                };
                CardView {
                    id: card.id,
                    value,
                    visual,
                    interactable: game.can_flip(card.id),
                }
            })
            .collect();

        Self {
            cards,
            move_count: game.move_count(),
            elapsed_seconds: game.elapsed_seconds(),
            clock: format_clock(game.elapsed_seconds()),
            matched_pairs: game.matched_values().len() as Count,
            total_pairs: PAIR_COUNT as Count,
            phase: game.phase(),
            hint_active: hint.is_active(),
            peek_active: peek.is_active(),
            hint_available: playing && !hint.is_active(),
            peek_available: playing && !peek.is_active(),
            hint_card_ids: hint.card_ids().to_vec(),
        }
    }
}
