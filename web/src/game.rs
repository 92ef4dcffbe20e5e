use clap::Args;
use gemelito_core as game;
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::utils::js_random_seed;

/// Glyph shown on the back of every face-down card.
const CARD_BACK: &str = "❓";

/// How long a mismatched pair stays visible before flipping back, in ms.
const FLIP_BACK_MS: u32 = 1_000;

pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::FlipOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::FlipOutcome| outcome.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardClicked(game::CardId),
    Tick,
    FlipBack,
    Pause,
    Resume,
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    id: game::CardId,
    symbol: game::Symbol,
    face_up: bool,
    matched: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CardId>,
}

#[function_component(CardView)]
fn card_view(props: &CardProps) -> Html {
    let CardProps {
        id,
        symbol,
        face_up,
        matched,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "card",
        match (face_up, matched) {
            (_, true) => classes!("open", "matched"),
            (true, false) => classes!("open"),
            (false, false) => classes!(),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(id);
            log::trace!("card {} clicked", id);
        })
    };

    let face = if face_up { symbol } else { CARD_BACK.to_string() };

    html! {
        <button {class} {onclick}>{face}</button>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// The game screen. Owns the session plus the two real-time tasks around it:
/// the one-second countdown and the delayed flip-back of a mismatched pair.
/// Both are droppable handles, so cancelling means overwriting with `None`.
#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    seed: u64,
    countdown: Option<Interval>,
    flip_back: Option<Timeout>,
}

impl GameView {
    fn new_session(config: game::GameConfig, seed: u64) -> game::GameSession {
        game::GameSession::new(config, game::RandomDeckGenerator::new(seed))
    }

    fn pick_seed(ctx: &Context<Self>) -> u64 {
        ctx.props().seed.unwrap_or_else(js_random_seed)
    }

    fn create_countdown(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(1_000, move || link.send_message(Msg::Tick))
    }

    /// Keeps exactly one interval alive while the session runs and none
    /// otherwise; called after every transition.
    fn sync_countdown(&mut self, ctx: &Context<Self>) {
        if self.session.is_running() {
            if self.countdown.is_none() {
                self.countdown = Some(Self::create_countdown(ctx));
            }
        } else {
            self.countdown = None;
        }
    }

    fn schedule_flip_back(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.flip_back = Some(Timeout::new(FLIP_BACK_MS, move || {
            link.send_message(Msg::FlipBack)
        }));
    }

    fn view_dialog(&self, ctx: &Context<Self>) -> Html {
        use game::Dialog::*;

        let cb_reset = ctx.link().callback(|_| Msg::NewGame);
        let cb_resume = ctx.link().callback(|_| Msg::Resume);
        let score = self.session.score();

        match self.session.active_dialog() {
            None => html! {},
            Some(Pause) => html! {
                <dialog open={true} class="pause">
                    <article>
                        <h2>{"Paused"}</h2>
                        <footer>
                            <button onclick={cb_resume}>{"Resume"}</button>
                            <a class="button" href="#/">{"Exit"}</a>
                        </footer>
                    </article>
                </dialog>
            },
            Some(Win) => html! {
                <dialog open={true} class="win">
                    <article>
                        <h2>{"You won!"}</h2>
                        <p>{format!("Final score: {}", score)}</p>
                        <footer>
                            <button onclick={cb_reset}>{"Play Again"}</button>
                            <a class="button" href="#/">{"Back to Menu"}</a>
                        </footer>
                    </article>
                </dialog>
            },
            Some(GameOver) => html! {
                <dialog open={true} class="game-over">
                    <article>
                        <h2>{"Time's up!"}</h2>
                        <p>{format!("Final score: {}", score)}</p>
                        <footer>
                            <button onclick={cb_reset}>{"Try Again"}</button>
                            <a class="button" href="#/">{"Back to Menu"}</a>
                        </footer>
                    </article>
                </dialog>
            },
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = Self::pick_seed(ctx);
        let mut view = Self {
            session: Self::new_session(game::GameConfig::standard(), seed),
            seed,
            countdown: None,
            flip_back: None,
        };
        view.sync_countdown(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CardClicked(id) => {
                let outcome = self.session.flip_card(id);
                log::debug!("flip card {}: {:?}", id, outcome);
                if let Ok(game::FlipOutcome::Mismatched) = outcome {
                    self.schedule_flip_back(ctx);
                }
                outcome.has_update()
            }
            Tick => {
                let outcome = self.session.tick();
                if outcome == game::TickOutcome::Expired {
                    log::debug!("time expired with score {}", self.session.score());
                }
                outcome.has_update()
            }
            FlipBack => {
                self.flip_back = None;
                self.session.resolve_mismatch().has_update()
            }
            Pause => self.session.pause(),
            Resume => self.session.resume(),
            NewGame => {
                // scrap any flip-back from the old deck before dealing anew
                self.flip_back = None;
                self.seed = Self::pick_seed(ctx);
                log::debug!("new game, seed: {}", self.seed);
                self.session.reset(game::RandomDeckGenerator::new(self.seed));
                true
            }
        };

        self.sync_countdown(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let locked = self.session.is_locked();
        let cb_card = ctx.link().callback(CardClicked);
        let cb_reset = ctx.link().callback(|_| NewGame);
        let cb_pause = ctx.link().callback(|_| Pause);

        html! {
            <div class="gemelito">
                <header>
                    <h1>{"Gemelito"}</h1>
                    <p>{"Find all the matching pairs to win"}</p>
                </header>
                <nav>
                    <aside>{format!("Score: {}", self.session.score())}</aside>
                    <aside>{format!("Time: {}s", self.session.remaining())}</aside>
                </nav>
                <section class="board">
                    {
                        for self.session.cards().iter().map(|card| {
                            let callback = cb_card.clone();
                            html! {
                                <CardView
                                    id={card.id}
                                    symbol={card.symbol.clone()}
                                    face_up={card.face_up}
                                    matched={card.matched}
                                    {locked}
                                    {callback}
                                />
                            }
                        })
                    }
                </section>
                <nav class="controls">
                    <button onclick={cb_reset} disabled={locked}>{"Reset"}</button>
                    <button onclick={cb_pause} disabled={locked}>{"Pause"}</button>
                    <a href="#/" class={classes!("button", locked.then_some("locked"))}>{"Back"}</a>
                </nav>
                { self.view_dialog(ctx) }
            </div>
        }
    }
}
