use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardPhase {
    /// No unresolved card is face-up.
    Idle,
    /// One card is face-up, waiting for its candidate pair.
    OneFlipped,
    /// Two mismatched cards are face-up, waiting to be turned back.
    Resolving,
}

impl BoardPhase {
    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::Resolving)
    }
}

/// The card-matching state machine: flips, pair comparison, score and the
/// matched-pair counter. Time, pausing and dialogs live one level up in
/// [`GameSession`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    deck: Deck,
    first_pick: Option<CardId>,
    second_pick: Option<CardId>,
    matched_pairs: PairCount,
    score: u32,
}

impl BoardEngine {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            first_pick: None,
            second_pick: None,
            matched_pairs: 0,
            score: 0,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matched_pairs(&self) -> PairCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> PairCount {
        self.deck.pair_count()
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    pub fn phase(&self) -> BoardPhase {
        match (self.first_pick, self.second_pick) {
            (Some(_), Some(_)) => BoardPhase::Resolving,
            (Some(_), None) => BoardPhase::OneFlipped,
            _ => BoardPhase::Idle,
        }
    }

    /// Turns the card with `id` face-up and, on a second pick, compares the
    /// pair. A match is settled immediately; a mismatch parks both cards in
    /// [`BoardPhase::Resolving`] until [`Self::resolve_mismatch`] runs.
    pub fn flip(&mut self, id: CardId) -> Result<FlipOutcome> {
        use FlipOutcome::*;

        let card = self.deck.card(id).ok_or(GameError::UnknownCard)?;
        self.check_not_won()?;

        if !card.is_selectable() || self.phase().is_resolving() {
            return Ok(NoChange);
        }
        let symbol = card.symbol.clone();

        match self.first_pick {
            None => {
                self.set_face_up(id, true);
                self.first_pick = Some(id);
                Ok(Flipped)
            }
            Some(first_id) => {
                self.set_face_up(id, true);
                if self.symbol_matches(first_id, &symbol) {
                    self.mark_matched(&symbol);
                    self.matched_pairs += 1;
                    self.score += 1;
                    self.first_pick = None;
                    Ok(if self.is_won() { Won } else { Matched })
                } else {
                    self.second_pick = Some(id);
                    Ok(Mismatched)
                }
            }
        }
    }

    /// Turns a pending mismatch face-down again. The completion of an old
    /// move, so it also runs on a paused or ended board.
    pub fn resolve_mismatch(&mut self) -> ResolveOutcome {
        use ResolveOutcome::*;

        match (self.first_pick, self.second_pick) {
            (Some(first_id), Some(second_id)) => {
                self.set_face_up(first_id, false);
                self.set_face_up(second_id, false);
                self.first_pick = None;
                self.second_pick = None;
                Restored
            }
            _ => NoChange,
        }
    }

    fn set_face_up(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.deck.card_mut(id) {
            card.face_up = face_up;
        }
    }

    fn symbol_matches(&self, id: CardId, symbol: &Symbol) -> bool {
        self.deck
            .card(id)
            .map_or(false, |card| &card.symbol == symbol)
    }

    fn mark_matched(&mut self, symbol: &Symbol) {
        for card in self.deck.cards_mut() {
            if &card.symbol == symbol {
                card.matched = true;
            }
        }
    }

    fn check_not_won(&self) -> Result<()> {
        if self.is_won() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
