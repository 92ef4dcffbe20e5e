use yew::prelude::*;

const RULES: [&str; 4] = [
    "Match the cards with their pairing!",
    "Every match adds points to your score!",
    "You're timed! Make sure you get all your matches before time's up!",
    "Have fun!",
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Next,
}

/// One rule card at a time; the last card swaps the Next button for a link
/// into the game.
pub(crate) struct RulesView {
    current: usize,
}

impl RulesView {
    fn is_last(&self) -> bool {
        self.current + 1 >= RULES.len()
    }

    fn advance(&mut self) -> bool {
        if self.is_last() {
            false
        } else {
            self.current += 1;
            true
        }
    }
}

impl Component for RulesView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { current: 0 }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Next => self.advance(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_next = ctx.link().callback(|_| Msg::Next);

        html! {
            <div class="rules">
                <h1>{"Rules"}</h1>
                <article>
                    <p>{RULES[self.current]}</p>
                    {
                        if self.is_last() {
                            html! { <a class="button" href="#/game">{"Let's Play!"}</a> }
                        } else {
                            html! { <button onclick={cb_next}>{"Next"}</button> }
                        }
                    }
                </article>
                <a href="#/">{"Return"}</a>
            </div>
        }
    }
}
