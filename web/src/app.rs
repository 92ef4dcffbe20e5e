use gloo::events::EventListener;
use yew::prelude::*;

use crate::game::{GameProps, GameView};
use crate::menu::MenuView;
use crate::rules::RulesView;
use crate::utils::current_hash;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Menu,
    Rules,
    Game,
}

impl Route {
    /// Everything after an `&` belongs to the args parser, not the route.
    fn from_hash(hash: &str) -> Self {
        match hash.split('&').next().unwrap_or("") {
            "#/rules" => Self::Rules,
            "#/game" => Self::Game,
            _ => Self::Menu,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    HashChanged,
}

/// Root component: swaps the menu, rules and game screens on `hashchange`.
/// Leaving the game screen drops [`GameView`] and with it every scheduled
/// timer, so an abandoned game cannot keep ticking in the background.
pub(crate) struct App {
    route: Route,
    _hash_listener: EventListener,
}

impl Component for App {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = EventListener::new(&gloo::utils::window(), "hashchange", move |_| {
            link.send_message(Msg::HashChanged)
        });

        Self {
            route: Route::from_hash(&current_hash()),
            _hash_listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HashChanged => {
                let route = Route::from_hash(&current_hash());
                if self.route != route {
                    log::debug!("route change: {:?} -> {:?}", self.route, route);
                    self.route = route;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.route {
            Route::Menu => html! { <MenuView /> },
            Route::Rules => html! { <RulesView /> },
            Route::Game => html! { <GameView seed={ctx.props().seed} /> },
        }
    }
}
