use super::*;

/// Generation strategy that pairs up the first `pairs` symbols of the pool and lays the cards out
/// in a uniformly random order. Deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: &GameConfig) -> Deck {
        use rand::prelude::*;

        let mut pairs = usize::from(config.pairs);
        if pairs > config.symbols.len() {
            log::warn!(
                "Symbol pool too small, requested {} pairs but only {} symbols, dealing what fits",
                pairs,
                config.symbols.len()
            );
            pairs = config.symbols.len();
        }

        let mut symbols: Vec<Symbol> = Vec::with_capacity(pairs * 2);
        for symbol in config.symbols.iter().take(pairs) {
            symbols.push(symbol.clone());
            symbols.push(symbol.clone());
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        symbols.shuffle(&mut rng);

        // ids follow board order, assigned after the shuffle
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::face_down(i as CardId, symbol))
            .collect();
        Deck::from_cards(cards)
    }
}
