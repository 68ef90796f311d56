/// Position of a card in the dealt order, also its identity for the whole game.
pub type CardId = u8;

/// Face value printed on a card, `1..=PAIR_COUNT`.
pub type CardValue = u8;

/// Count type used for moves, pairs and elapsed seconds.
pub type Count = u32;

/// Milliseconds on the game's virtual timeline.
pub type Millis = u64;

/// Number of distinct values dealt, each of them on exactly two cards.
pub const PAIR_COUNT: usize = 10;

/// Number of cards on the board.
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Face-up cards allowed before a resolution has to happen.
pub const MAX_FACE_UP: usize = 2;

pub const fn is_valid_value(value: CardValue) -> bool {
    value >= 1 && value as usize <= PAIR_COUNT
}

/// Renders seconds the way the game clock shows them, `m:ss`.
pub fn format_clock(seconds: Count) -> alloc::string::String {
    alloc::format!("{}:{:02}", seconds / 60, seconds % 60)
}
