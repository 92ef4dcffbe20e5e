use yew::prelude::*;

#[function_component(MenuView)]
pub(crate) fn menu_view() -> Html {
    html! {
        <div class="menu">
            <h1>{"Gemelito"}</h1>
            <p>{"A memory game of matching pairs"}</p>
            <nav>
                <a href="#/game">{"Play"}</a>
                <a href="#/rules">{"Rules"}</a>
            </nav>
        </div>
    }
}
