/// Identifier of a single card, unique within one deck.
pub type CardId = u16;

/// Count type used for deck sizes and card totals.
pub type CardCount = u16;

/// Count type used for pair totals and matched-pair counters.
pub type PairCount = u8;

/// Whole seconds, used by the countdown.
pub type Seconds = u32;

/// Display glyph on a card face. Every symbol in a deck appears on exactly two cards.
pub type Symbol = String;

pub const fn deck_size(pairs: PairCount) -> CardCount {
    (pairs as CardCount).saturating_mul(2)
}
