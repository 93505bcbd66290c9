use macroquad::prelude::*;

use crate::config::{BOARD_MARGIN, GRID, HUD_HEIGHT};
use crate::grid::Cell;
use crate::state::{GameState, Phase};

// Palette
const BACKDROP: Color = Color::new(0.04, 0.05, 0.10, 1.0);
const GRID_FILL: Color = Color::new(1.0, 1.0, 1.0, 0.02);
const GRID_LINE: Color = Color::new(1.0, 1.0, 1.0, 0.06);
const FOOD: Color = Color::new(0.925, 0.282, 0.6, 0.95); // pink
const HEAD: Color = Color::new(0.545, 0.361, 0.965, 0.95); // violet
const BODY: Color = Color::new(0.545, 0.361, 0.965, 0.65);
const SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.45);
const HINT: Color = Color::new(1.0, 1.0, 1.0, 0.9);
const HUD_TEXT: Color = Color::new(0.85, 0.87, 0.95, 1.0);
const BUTTON: Color = Color::new(1.0, 1.0, 1.0, 0.08);
const BUTTON_EDGE: Color = Color::new(1.0, 1.0, 1.0, 0.25);

const TITLE_SIZE: u16 = 28;
const HINT_SIZE: u16 = 16;
const HUD_SIZE: u16 = 20;
const BUTTON_W: f32 = 84.0;
const BUTTON_H: f32 = 32.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    Food,
    Head,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub cell: Cell,
    pub paint: Paint,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Everything one repaint draws on the board, in painting order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
    pub overlay: Option<Overlay>,
}

pub fn compose(state: &GameState) -> Scene {
    let mut sprites = Vec::with_capacity(state.snake.len() + 1);
    sprites.push(Sprite { cell: state.food, paint: Paint::Food });
    sprites.extend(state.snake.iter().enumerate().map(|(i, cell)| Sprite {
        cell: *cell,
        paint: if i == 0 { Paint::Head } else { Paint::Body },
    }));
    let overlay = match state.phase {
        Phase::Running => None,
        Phase::Paused => Some(Overlay { title: "Paused", hint: "Space to resume" }),
        Phase::Ended => Some(Overlay { title: "Game Over", hint: "Press R to play again" }),
    };
    Scene { sprites, overlay }
}

/// HUD strip text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudLabels {
    pub score: String,
    pub best: String,
    pub speed: String,
}

impl HudLabels {
    pub fn new(state: &GameState, best: u32) -> Self {
        Self {
            score: state.score.to_string(),
            best: best.to_string(),
            speed: speed_label(state),
        }
    }
}

pub fn speed_label(state: &GameState) -> String {
    format!("{}x", state.speed_multiplier())
}

/// Screen placement of the HUD and the square board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub screen: Rect,
    pub board: Rect,
    pub tile: f32,
}

impl Layout {
    pub fn fit(screen_w: f32, screen_h: f32) -> Self {
        let avail_w = (screen_w - 2.0 * BOARD_MARGIN).max(GRID as f32);
        let avail_h = (screen_h - HUD_HEIGHT - 2.0 * BOARD_MARGIN).max(GRID as f32);
        let tile = (avail_w.min(avail_h) / GRID as f32).floor().max(1.0);
        let side = tile * GRID as f32;
        let x = ((screen_w - side) * 0.5).max(0.0);
        let y = HUD_HEIGHT + ((screen_h - HUD_HEIGHT - side) * 0.5).max(0.0);
        Self {
            screen: Rect::new(0.0, 0.0, screen_w, screen_h),
            board: Rect::new(x, y, side, side),
            tile,
        }
    }

    pub fn current() -> Self {
        Self::fit(screen_width(), screen_height())
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.board.x + cell.x as f32 * self.tile,
            self.board.y + cell.y as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }

    pub fn restart_button(&self) -> Rect {
        Rect::new(
            self.board.right() - BUTTON_W,
            (HUD_HEIGHT - BUTTON_H) * 0.5,
            BUTTON_W,
            BUTTON_H,
        )
    }

    pub fn pause_button(&self) -> Rect {
        let restart = self.restart_button();
        Rect::new(restart.x - BUTTON_W - 8.0, restart.y, BUTTON_W, BUTTON_H)
    }
}

fn fill(r: Rect, color: Color) {
    draw_rectangle(r.x, r.y, r.w, r.h, color);
}

fn outline(r: Rect, color: Color) {
    draw_rectangle_lines(r.x + 0.5, r.y + 0.5, r.w - 1.0, r.h - 1.0, 1.0, color);
}

fn text_centered(text: &str, cx: f32, baseline: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, cx - m.width * 0.5, baseline, size as f32, color);
}

/// Repaints the board from a scene.
pub fn paint(scene: &Scene, layout: &Layout) {
    for cell in Cell::all() {
        let r = layout.cell_rect(cell);
        fill(r, GRID_FILL);
        outline(r, GRID_LINE);
    }

    for sprite in &scene.sprites {
        let color = match sprite.paint {
            Paint::Food => FOOD,
            Paint::Head => HEAD,
            Paint::Body => BODY,
        };
        fill(layout.cell_rect(sprite.cell), color);
    }

    if let Some(overlay) = scene.overlay {
        let b = layout.board;
        fill(b, SHADE);
        let cx = b.x + b.w * 0.5;
        let cy = b.y + b.h * 0.5;
        text_centered(overlay.title, cx, cy - 8.0, TITLE_SIZE, WHITE);
        text_centered(overlay.hint, cx, cy + 20.0, HINT_SIZE, HINT);
    }
}

pub fn paint_hud(labels: &HudLabels, paused: bool, layout: &Layout) {
    let baseline = HUD_HEIGHT * 0.5 + HUD_SIZE as f32 * 0.35;
    let line = format!(
        "Score {}   Best {}   Speed {}",
        labels.score, labels.best, labels.speed
    );
    draw_text(&line, layout.board.x, baseline, HUD_SIZE as f32, HUD_TEXT);

    let pause_caption = if paused { "Resume" } else { "Pause" };
    for (rect, caption) in [
        (layout.pause_button(), pause_caption),
        (layout.restart_button(), "Restart"),
    ] {
        fill(rect, BUTTON);
        outline(rect, BUTTON_EDGE);
        text_centered(caption, rect.x + rect.w * 0.5, baseline, HINT_SIZE, HUD_TEXT);
    }
}

pub fn clear() {
    clear_background(BACKDROP);
}
