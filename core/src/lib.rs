use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod session;
mod types;

/// Glyph pool and dimensions of the stock game: six pairs from twelve
/// symbols, sixty seconds on the clock.
pub const STANDARD_SYMBOLS: [&str; 12] = [
    "🦊", "🐶", "🐱", "🦄", "🌸", "☂️", "🍇", "🥞", "🧋", "🩰", "🪅", "🎠",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub symbols: Vec<Symbol>,
    pub pairs: PairCount,
    pub time_limit: Seconds,
}

impl GameConfig {
    pub fn new_unchecked(symbols: Vec<Symbol>, pairs: PairCount, time_limit: Seconds) -> Self {
        Self {
            symbols,
            pairs,
            time_limit,
        }
    }

    pub fn new(symbols: Vec<Symbol>, pairs: PairCount, time_limit: Seconds) -> Result<Self> {
        if pairs == 0 {
            return Err(GameError::NoPairs);
        }
        if symbols.len() < usize::from(pairs) {
            return Err(GameError::NotEnoughSymbols {
                requested: usize::from(pairs),
                available: symbols.len(),
            });
        }
        if time_limit == 0 {
            return Err(GameError::ZeroTimeLimit);
        }
        Ok(Self::new_unchecked(symbols, pairs, time_limit))
    }

    pub fn standard() -> Self {
        Self::new_unchecked(
            STANDARD_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            6,
            60,
        )
    }

    pub const fn total_cards(&self) -> CardCount {
        deck_size(self.pairs)
    }
}

/// A full set of paired cards in board order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    pair_count: PairCount,
}

impl Deck {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let pair_count = (cards.len() / 2).try_into().unwrap();
        Self { cards, pair_count }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    pub fn total_cards(&self) -> CardCount {
        self.cards.len().try_into().unwrap()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    Flipped,
    Matched,
    Mismatched,
    Won,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        use FlipOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    NoChange,
    Restored,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Restored => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    Expired,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Ticked => true,
            Self::Expired => true,
        }
    }
}
