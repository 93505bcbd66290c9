use std::sync::OnceLock;

use macroquad::prelude::*;

use snake_canvas::app::App;
use snake_canvas::config::{Cli, WINDOW_SIZE};
use snake_canvas::input::Input;
use snake_canvas::render::Layout;
use snake_canvas::storage::{JsonFileStore, MemoryStore, ScoreStore};

fn options() -> &'static Cli {
    static CLI: OnceLock<Cli> = OnceLock::new();
    CLI.get_or_init(Cli::load)
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

// Runs before `main`, so logging is set up here.
fn window_conf() -> Conf {
    init_logging();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: WINDOW_SIZE,
        window_height: WINDOW_SIZE,
        fullscreen: !options().windowed,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = options();
    log::info!("starting with {cli:?}");

    let seed = cli.seed.unwrap_or_else(|| (macroquad::miniquad::date::now() * 1_000_000.0) as u64);
    macroquad::rand::srand(seed);

    let store: Box<dyn ScoreStore> = if cli.no_save {
        Box::new(MemoryStore::default())
    } else {
        Box::new(JsonFileStore::new(&cli.save_file))
    };
    let mut app = App::new(store);
    let mut input = Input::default();

    loop {
        let layout = Layout::current();
        for intent in input.poll(&layout) {
            app.push(intent);
        }
        app.update(get_frame_time() as f64 * 1000.0);
        if app.should_quit() {
            break;
        }
        app.draw(&layout);

        next_frame().await;
    }
}
