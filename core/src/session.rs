use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Highlights the two cards of the next planned match for a while.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSession {
    active_card_ids: SmallVec<[CardId; 2]>,
}

impl HintSession {
    pub fn is_active(&self) -> bool {
        !self.active_card_ids.is_empty()
    }

    pub fn card_ids(&self) -> &[CardId] {
        &self.active_card_ids
    }

    pub fn highlights(&self, id: CardId) -> bool {
        self.active_card_ids.contains(&id)
    }

    pub(crate) fn activate(&mut self, step: &MatchStep) {
        self.active_card_ids = SmallVec::from_slice(&step.card_ids);
    }

    pub(crate) fn expire(&mut self) {
        self.active_card_ids.clear();
    }
}

/// Shows every card that was unmatched when the peek started.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeekSession {
    revealed_ids: Vec<CardId>,
}

impl PeekSession {
    pub fn is_active(&self) -> bool {
        !self.revealed_ids.is_empty()
    }

    pub fn revealed_ids(&self) -> &[CardId] {
        &self.revealed_ids
    }

    pub fn reveals(&self, id: CardId) -> bool {
        self.revealed_ids.contains(&id)
    }

    pub(crate) fn activate(&mut self, cards: &[Card]) {
        self.revealed_ids = cards
            .iter()
            .filter(|card| !card.is_matched)
            .map(|card| card.id)
            .collect();
    }

    pub(crate) fn expire(&mut self) {
        self.revealed_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_highlights_step_cards_until_expired() {
        let mut hint = HintSession::default();
        assert!(!hint.is_active());

        hint.activate(&MatchStep {
            value: 4,
            card_ids: [2, 9],
        });

        assert!(hint.is_active());
        assert!(hint.highlights(2));
        assert!(hint.highlights(9));
        assert!(!hint.highlights(3));

        hint.expire();
        assert!(!hint.is_active());
        assert!(hint.card_ids().is_empty());
    }

    #[test]
    fn peek_reveals_only_unmatched_cards() {
        let mut cards = CardLayout::ordered().deal();
        cards[0].is_matched = true;
        cards[1].is_matched = true;
        let mut peek = PeekSession::default();

        peek.activate(&cards);

        assert!(peek.is_active());
        assert_eq!(peek.revealed_ids().len(), CARD_COUNT - 2);
        assert!(!peek.reveals(0));
        assert!(peek.reveals(2));

        peek.expire();
        assert!(!peek.is_active());
    }
}
