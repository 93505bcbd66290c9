use std::path::PathBuf;

use clap::Parser;

// Board
pub const GRID: i32 = 24;

// Timing (milliseconds)
pub const BASE_TICK_MS: u32 = 120;
pub const SPEED_UP_EVERY: u32 = 5;
pub const TICK_DECREMENT_MS: u32 = 10;
pub const MIN_TICK_MS: u32 = 55;
// Longest frame delta fed to the ticker, so a stalled window doesn't burst-step.
pub const MAX_FRAME_MS: f64 = 250.0;

// Touch: minimum travel on the dominant axis for a swipe to count.
pub const SWIPE_THRESHOLD: f32 = 30.0;

// Persistence
pub const BEST_KEY: &str = "snake_best_v1";
pub const DEFAULT_SAVE_FILE: &str = "snake_save.json";

// Window / HUD (pixels)
pub const WINDOW_SIZE: i32 = 528;
pub const HUD_HEIGHT: f32 = 48.0;
pub const BOARD_MARGIN: f32 = 8.0;

/// Command-line options. Every field has a default.
#[derive(Parser, Debug, Clone)]
#[command(name = "snake_canvas", about = "Wrap-around snake on a 24x24 board")]
pub struct Cli {
    /// JSON file holding the best score
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    pub save_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    pub no_save: bool,

    /// Seed for food placement (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Open in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,
}

impl Cli {
    /// Process arguments natively; the browser build has none to read.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Cli::parse_from(["snake_canvas"])
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Cli::parse()
        }
    }
}
