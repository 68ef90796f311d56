use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub value: CardValue,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub const fn new(id: CardId, value: CardValue) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Face-up and still in play.
    pub const fn is_face_up(&self) -> bool {
        self.is_flipped && !self.is_matched
    }
}

/// Dealt order of the card values, index in the layout is the card id.
///
/// Serialized as the bare list of values, deserializing goes through [`CardLayout::from_values`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardValue>", into = "Vec<CardValue>")]
pub struct CardLayout {
    values: Vec<CardValue>,
}

impl CardLayout {
    /// Every value `1..=PAIR_COUNT` twice, in ascending order.
    pub fn ordered() -> Self {
        let values = (1..=PAIR_COUNT as CardValue)
            .flat_map(|value| [value, value])
            .collect();
        Self { values }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let values = shuffle(&Self::ordered().values, rng);
        Self { values }
    }

    /// Replays a recorded deal, rejecting anything but `PAIR_COUNT` values present exactly twice.
    pub fn from_values(values: &[CardValue]) -> Result<Self> {
        if values.len() != CARD_COUNT {
            return Err(GameError::InvalidLayout);
        }

        let mut seen = [0u8; PAIR_COUNT];
        for &value in values {
            if !is_valid_value(value) {
                return Err(GameError::InvalidLayout);
            }
            seen[value as usize - 1] += 1;
        }
        if seen.iter().any(|&count| count != 2) {
            return Err(GameError::InvalidLayout);
        }

        Ok(Self {
            values: values.to_vec(),
        })
    }

    pub fn values(&self) -> &[CardValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn deal(&self) -> Vec<Card> {
        self.values
            .iter()
            .enumerate()
            .map(|(id, &value)| Card::new(id as CardId, value))
            .collect()
    }
}

impl TryFrom<Vec<CardValue>> for CardLayout {
    type Error = GameError;

    fn try_from(values: Vec<CardValue>) -> Result<Self> {
        Self::from_values(&values)
    }
}

impl From<CardLayout> for Vec<CardValue> {
    fn from(layout: CardLayout) -> Self {
        layout.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn shuffled_layout_holds_every_value_twice() {
        let layout = CardLayout::shuffled(&mut SmallRng::seed_from_u64(3));

        assert_eq!(layout.len(), CARD_COUNT);
        for value in 1..=PAIR_COUNT as CardValue {
            let count = layout.values().iter().filter(|&&v| v == value).count();
            assert_eq!(count, 2, "value {value}");
        }
        assert!(CardLayout::from_values(layout.values()).is_ok());
    }

    #[test]
    fn deal_assigns_sequential_ids_face_down() {
        let cards = CardLayout::ordered().deal();

        assert_eq!(cards.len(), CARD_COUNT);
        for (index, card) in cards.iter().enumerate() {
            assert_eq!(card.id as usize, index);
            assert!(!card.is_flipped);
            assert!(!card.is_matched);
        }
        assert_eq!(cards[0].value, 1);
        assert_eq!(cards[19].value, 10);
    }

    #[test]
    fn from_values_rejects_bad_deals() {
        let mut values = CardLayout::ordered().values().to_vec();

        assert_eq!(
            CardLayout::from_values(&values[..18]),
            Err(GameError::InvalidLayout)
        );

        values[0] = 2;
        assert_eq!(
            CardLayout::from_values(&values),
            Err(GameError::InvalidLayout)
        );

        values[0] = 11;
        assert_eq!(
            CardLayout::from_values(&values),
            Err(GameError::InvalidLayout)
        );

        assert_eq!(
            CardLayout::from_values(&vec![0; CARD_COUNT]),
            Err(GameError::InvalidLayout)
        );
    }

    #[test]
    fn json_layout_goes_through_validation() {
        let layout = CardLayout::shuffled(&mut SmallRng::seed_from_u64(8));
        let text = serde_json::to_string(&layout).unwrap();

        assert_eq!(serde_json::from_str::<CardLayout>(&text).unwrap(), layout);

        assert!(serde_json::from_str::<CardLayout>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<CardLayout>(r#"{"values":[1,2,3]}"#).is_err());

        let too_many: Vec<CardValue> = (0..300).map(|i| (i % 10 + 1) as CardValue).collect();
        let text = serde_json::to_string(&too_many).unwrap();
        assert!(serde_json::from_str::<CardLayout>(&text).is_err());
    }
}
