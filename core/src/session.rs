use serde::{Deserialize, Serialize};

use crate::*;

/// Which modal the player should be looking at, if any. At most one is ever
/// active: a win outranks everything, a timeout only shows while unpaused,
/// and the pause menu covers the rest.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Pause,
    Win,
    GameOver,
}

/// One play-through of a board: the engine plus the countdown, the pause
/// flags and the loss flag. Owns no timers itself, callers drive it through
/// [`Self::tick`] and [`Self::resolve_mismatch`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    engine: BoardEngine,
    config: GameConfig,
    remaining: Seconds,
    paused: bool,
    pause_menu: bool,
    lost: bool,
}

impl GameSession {
    pub fn new<G: DeckGenerator>(config: GameConfig, generator: G) -> Self {
        let deck = generator.generate(&config);
        let remaining = config.time_limit;
        Self {
            engine: BoardEngine::new(deck),
            config,
            remaining,
            paused: false,
            pause_menu: false,
            lost: false,
        }
    }

    /// Throws the whole play-through away and deals a fresh deck. Valid in
    /// every state, including mid-resolution and after the game ended.
    pub fn reset<G: DeckGenerator>(&mut self, generator: G) {
        *self = Self::new(self.config.clone(), generator);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        self.engine.deck().cards()
    }

    pub fn phase(&self) -> BoardPhase {
        self.engine.phase()
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn matched_pairs(&self) -> PairCount {
        self.engine.matched_pairs()
    }

    pub fn total_pairs(&self) -> PairCount {
        self.engine.total_pairs()
    }

    pub fn remaining(&self) -> Seconds {
        self.remaining
    }

    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// The countdown runs only while there is time left and no pause, win or
    /// loss in effect.
    pub fn is_running(&self) -> bool {
        self.remaining > 0 && !self.paused && !self.lost && !self.is_won()
    }

    /// A locked board swallows card flips and the nav controls; only the
    /// active dialog's own buttons act on it.
    pub fn is_locked(&self) -> bool {
        self.paused || self.pause_menu || self.is_won() || self.lost
    }

    pub fn active_dialog(&self) -> Option<Dialog> {
        if self.is_won() {
            Some(Dialog::Win)
        } else if self.lost && !self.paused {
            Some(Dialog::GameOver)
        } else if self.pause_menu {
            Some(Dialog::Pause)
        } else {
            None
        }
    }

    /// One whole second elapsed. Hitting zero ends the game; everything
    /// outside the running state is a no-op, so a stale timer cannot push the
    /// countdown below zero or past a finished game.
    pub fn tick(&mut self) -> TickOutcome {
        use TickOutcome::*;

        if !self.is_running() {
            return NoChange;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.lost = true;
            Expired
        } else {
            Ticked
        }
    }

    pub fn flip_card(&mut self, id: CardId) -> Result<FlipOutcome> {
        if self.is_locked() {
            return Ok(FlipOutcome::NoChange);
        }

        let outcome = self.engine.flip(id)?;
        if matches!(outcome, FlipOutcome::Won) {
            // winning on the final flip outranks an expiry in the same instant
            self.paused = true;
            self.lost = false;
        }
        Ok(outcome)
    }

    pub fn resolve_mismatch(&mut self) -> ResolveOutcome {
        self.engine.resolve_mismatch()
    }

    pub fn pause(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.paused = true;
        self.pause_menu = true;
        true
    }

    /// Only leaves the pause the player asked for; the implicit pause after
    /// a win stays until reset.
    pub fn resume(&mut self) -> bool {
        if !self.pause_menu {
            return false;
        }
        self.paused = false;
        self.pause_menu = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deals the first `pairs` pool symbols in order, so card ids 2k and
    /// 2k+1 always match and ids 0 and 2 never do.
    struct OrderedDeck;

    impl DeckGenerator for OrderedDeck {
        fn generate(self, config: &GameConfig) -> Deck {
            let mut cards = Vec::new();
            for (i, symbol) in config
                .symbols
                .iter()
                .take(usize::from(config.pairs))
                .enumerate()
            {
                cards.push(Card::face_down((i * 2) as CardId, symbol.clone()));
                cards.push(Card::face_down((i * 2 + 1) as CardId, symbol.clone()));
            }
            Deck::from_cards(cards)
        }
    }

    fn session(pairs: PairCount, time_limit: Seconds) -> GameSession {
        let symbols = (0..pairs).map(|i| format!("s{}", i)).collect();
        let config = GameConfig::new(symbols, pairs, time_limit).unwrap();
        GameSession::new(config, OrderedDeck)
    }

    #[test]
    fn ticks_count_down_to_a_loss() {
        let mut game = session(1, 3);

        assert_eq!(game.tick(), TickOutcome::Ticked);
        assert_eq!(game.tick(), TickOutcome::Ticked);
        assert_eq!(game.tick(), TickOutcome::Expired);

        assert_eq!(game.remaining(), 0);
        assert!(game.is_lost());
        assert_eq!(game.active_dialog(), Some(Dialog::GameOver));

        // the countdown holds at zero no matter how often a stale timer fires
        assert_eq!(game.tick(), TickOutcome::NoChange);
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn standard_length_countdown_expires_on_the_final_tick() {
        let mut game = session(1, 60);

        for _ in 0..59 {
            assert_eq!(game.tick(), TickOutcome::Ticked);
        }
        assert_eq!(game.tick(), TickOutcome::Expired);
        assert!(game.is_lost());
        assert_eq!(game.remaining(), 0);
    }

    #[test]
    fn pause_suspends_the_countdown_and_the_board() {
        let mut game = session(2, 10);

        assert!(game.pause());
        assert!(!game.is_running());
        assert_eq!(game.tick(), TickOutcome::NoChange);
        assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::NoChange);
        assert_eq!(game.active_dialog(), Some(Dialog::Pause));

        // pausing twice changes nothing
        assert!(!game.pause());

        assert!(game.resume());
        assert_eq!(game.tick(), TickOutcome::Ticked);
        assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::Flipped);
    }

    #[test]
    fn resume_without_a_pause_menu_is_a_no_op() {
        let mut game = session(1, 10);

        assert!(!game.resume());
    }

    #[test]
    fn win_pauses_the_game_and_suppresses_game_over() {
        let mut game = session(1, 10);

        game.flip_card(0).unwrap();
        assert_eq!(game.flip_card(1).unwrap(), FlipOutcome::Won);

        assert!(game.is_won());
        assert!(!game.is_lost());
        assert!(game.is_locked());
        assert_eq!(game.active_dialog(), Some(Dialog::Win));

        // the timer is dead, the win screen keeps whatever time was left
        assert_eq!(game.tick(), TickOutcome::NoChange);
        assert_eq!(game.remaining(), 10);

        // the implicit win pause has no resume
        assert!(!game.resume());
        assert!(!game.pause());
    }

    #[test]
    fn won_board_rejects_further_flips() {
        let mut game = session(2, 10);

        game.flip_card(0).unwrap();
        game.flip_card(1).unwrap();
        game.flip_card(2).unwrap();
        assert_eq!(game.flip_card(3).unwrap(), FlipOutcome::Won);

        assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::NoChange);
    }

    #[test]
    fn lost_board_rejects_flips_and_pause() {
        let mut game = session(1, 1);

        assert_eq!(game.tick(), TickOutcome::Expired);

        assert_eq!(game.flip_card(0).unwrap(), FlipOutcome::NoChange);
        assert!(!game.pause());
        assert_eq!(game.active_dialog(), Some(Dialog::GameOver));
    }

    #[test]
    fn mismatch_resolves_even_while_paused() {
        let mut game = session(2, 10);

        game.flip_card(0).unwrap();
        assert_eq!(game.flip_card(2).unwrap(), FlipOutcome::Mismatched);
        assert!(game.pause());

        assert_eq!(game.resolve_mismatch(), ResolveOutcome::Restored);
        assert_eq!(game.phase(), BoardPhase::Idle);
    }

    #[test]
    fn reset_restores_a_fresh_board_from_any_state() {
        let mut game = session(2, 10);

        game.flip_card(0).unwrap();
        game.flip_card(1).unwrap();
        game.tick();
        game.flip_card(2).unwrap();
        assert_eq!(game.flip_card(3).unwrap(), FlipOutcome::Won);

        game.reset(OrderedDeck);

        assert_eq!(game.score(), 0);
        assert_eq!(game.matched_pairs(), 0);
        assert_eq!(game.remaining(), 10);
        assert_eq!(game.phase(), BoardPhase::Idle);
        assert_eq!(game.active_dialog(), None);
        assert!(!game.is_locked());
        assert!(game.cards().iter().all(|card| !card.face_up && !card.matched));
    }

    #[test]
    fn reset_cancels_a_pending_mismatch() {
        let mut game = session(2, 10);

        game.flip_card(0).unwrap();
        assert_eq!(game.flip_card(2).unwrap(), FlipOutcome::Mismatched);

        game.reset(OrderedDeck);

        // a flip-back scheduled before the reset must find nothing to do
        assert_eq!(game.resolve_mismatch(), ResolveOutcome::NoChange);
        assert!(game.cards().iter().all(|card| !card.face_up));
    }

    #[test]
    fn score_accumulates_one_point_per_match() {
        let mut game = session(3, 30);

        game.flip_card(0).unwrap();
        assert_eq!(game.flip_card(1).unwrap(), FlipOutcome::Matched);
        game.flip_card(2).unwrap();
        assert_eq!(game.flip_card(4).unwrap(), FlipOutcome::Mismatched);
        game.resolve_mismatch();
        game.flip_card(2).unwrap();
        assert_eq!(game.flip_card(3).unwrap(), FlipOutcome::Matched);

        assert_eq!(game.score(), 2);
        assert_eq!(game.matched_pairs(), 2);
    }

    #[test]
    fn unknown_card_error_passes_through_unlocked_sessions() {
        let mut game = session(1, 10);

        assert_eq!(game.flip_card(42), Err(GameError::UnknownCard));

        game.pause();
        // the lock check comes first on a locked board
        assert_eq!(game.flip_card(42).unwrap(), FlipOutcome::NoChange);
    }
}
