use serde::{Deserialize, Serialize};

use crate::{CardId, Symbol};

/// A single card as the player sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    pub fn face_down(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    pub const fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }
}
