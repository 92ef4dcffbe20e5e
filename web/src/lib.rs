use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod game;
mod menu;
mod rules;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::document;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    // the route lives in the hash too, only the dashed segments are args
    let location_hash = utils::current_hash();
    let flags = location_hash.split(['#', '&']).filter(|s| s.starts_with('-'));
    let args = Args::try_parse_from(std::iter::once("").chain(flags)).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}", args.game.seed);

    let root = document()
        .get_element_by_id("gemelito")
        .expect("Could not find id=\"gemelito\" element");

    log::debug!("App started");
    yew::Renderer::<app::App>::with_root_and_props(root, args.game).render();
}
