use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One step of a plan: turn over both cards showing `value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStep {
    pub value: CardValue,
    pub card_ids: [CardId; 2],
}

#[derive(Debug)]
struct SearchNode {
    /// Values still to match, kept sorted so it doubles as the visited key.
    remaining: Vec<CardValue>,
    path: Vec<MatchStep>,
}

/// Shortest sequence of match steps clearing every matchable pair left on the board.
///
/// Cards that are matched, or whose value is already in `matched_values`, are ignored. A value that does not show up
/// on exactly two remaining cards cannot be matched and is left out of the search. Values are expanded in ascending
/// order, so the result is deterministic. Empty when nothing is left to match.
pub fn find_plan(cards: &[Card], matched_values: &BTreeSet<CardValue>) -> Vec<MatchStep> {
    let mut pairs: BTreeMap<CardValue, SmallVec<[CardId; 2]>> = BTreeMap::new();
    for card in cards
        .iter()
        .filter(|card| !card.is_matched && !matched_values.contains(&card.value))
    {
        pairs.entry(card.value).or_default().push(card.id);
    }

    let mut steps: BTreeMap<CardValue, MatchStep> = BTreeMap::new();
    for (&value, ids) in &pairs {
        match ids.as_slice() {
            &[first, second] => {
                steps.insert(
                    value,
                    MatchStep {
                        value,
                        card_ids: [first, second],
                    },
                );
            }
            ids => log::warn!(
                "Value {} has {} unmatched cards, leaving it out of the plan",
                value,
                ids.len()
            ),
        }
    }

    let start: Vec<CardValue> = steps.keys().copied().collect();
    let mut visited: HashSet<Vec<CardValue>> = HashSet::new();
    visited.insert(start.clone());
    let mut to_visit = VecDeque::from([SearchNode {
        remaining: start,
        path: Vec::new(),
    }]);

    while let Some(node) = to_visit.pop_front() {
        if node.remaining.is_empty() {
            return node.path;
        }

        for (index, value) in node.remaining.iter().enumerate() {
            let mut remaining = node.remaining.clone();
            remaining.remove(index);
            if !visited.insert(remaining.clone()) {
                continue;
            }

            let mut path = node.path.clone();
            path.push(steps[value]);
            to_visit.push_back(SearchNode { remaining, path });
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cards(values: &[CardValue]) -> Vec<Card> {
        values
            .iter()
            .enumerate()
            .map(|(id, &value)| Card::new(id as CardId, value))
            .collect()
    }

    fn covered_values(plan: &[MatchStep]) -> BTreeSet<CardValue> {
        plan.iter().map(|step| step.value).collect()
    }

    #[test]
    fn fresh_board_needs_one_step_per_pair() {
        let cards = CardLayout::ordered().deal();

        let plan = find_plan(&cards, &BTreeSet::new());

        assert_eq!(plan.len(), PAIR_COUNT);
        assert_eq!(covered_values(&plan).len(), PAIR_COUNT);
        for step in &plan {
            let [a, b] = step.card_ids;
            assert_ne!(a, b);
            assert_eq!(cards[a as usize].value, step.value);
            assert_eq!(cards[b as usize].value, step.value);
        }
    }

    #[test]
    fn steps_come_in_ascending_value_order() {
        let cards = cards(&[3, 1, 2, 3, 2, 1]);

        let plan = find_plan(&cards, &BTreeSet::new());

        assert_eq!(
            plan,
            vec![
                MatchStep {
                    value: 1,
                    card_ids: [1, 5]
                },
                MatchStep {
                    value: 2,
                    card_ids: [2, 4]
                },
                MatchStep {
                    value: 3,
                    card_ids: [0, 3]
                },
            ]
        );
    }

    #[test]
    fn fully_matched_board_has_empty_plan() {
        let mut cards = CardLayout::ordered().deal();
        for card in &mut cards {
            card.is_flipped = true;
            card.is_matched = true;
        }
        let matched: BTreeSet<_> = (1..=PAIR_COUNT as CardValue).collect();

        assert!(find_plan(&cards, &matched).is_empty());
    }

    #[test]
    fn matched_values_are_skipped() {
        let cards = cards(&[1, 2, 1, 2]);
        let matched = BTreeSet::from([1]);

        let plan = find_plan(&cards, &matched);

        assert_eq!(
            plan,
            vec![MatchStep {
                value: 2,
                card_ids: [1, 3]
            }]
        );
    }

    #[test]
    fn matched_cards_are_skipped() {
        let mut cards = cards(&[1, 2, 1, 2]);
        cards[1].is_matched = true;
        cards[3].is_matched = true;

        let plan = find_plan(&cards, &BTreeSet::new());

        assert_eq!(covered_values(&plan), BTreeSet::from([1]));
    }

    #[test]
    fn odd_groups_are_left_out() {
        // value 2 shows up three times and value 4 only once
        let cards = cards(&[1, 2, 2, 1, 2, 3, 4, 3]);

        let plan = find_plan(&cards, &BTreeSet::new());

        assert_eq!(covered_values(&plan), BTreeSet::from([1, 3]));
    }

    #[test]
    fn only_unmatchable_values_give_empty_plan() {
        let cards = cards(&[5, 6, 6, 6]);

        assert!(find_plan(&cards, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn no_cards_give_empty_plan() {
        assert!(find_plan(&[], &BTreeSet::new()).is_empty());
    }
}
