use macroquad::prelude::*;

use crate::config::SWIPE_THRESHOLD;
use crate::grid::Heading;
use crate::render::Layout;

/// What a key press, swipe, or button tap asks the game to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Heading),
    TogglePause,
    Restart,
    Quit,
}

const TURN_KEYS: [(KeyCode, KeyCode, Heading); 4] = [
    (KeyCode::Up, KeyCode::W, Heading::Up),
    (KeyCode::Down, KeyCode::S, Heading::Down),
    (KeyCode::Left, KeyCode::A, Heading::Left),
    (KeyCode::Right, KeyCode::D, Heading::Right),
];

/// Maps the keys pressed this frame to intents: turns first, then pause,
/// restart and quit.
pub fn key_intents(pressed: impl Fn(KeyCode) -> bool) -> Vec<Intent> {
    let mut intents: Vec<Intent> = TURN_KEYS
        .iter()
        .filter(|(arrow, letter, _)| pressed(*arrow) || pressed(*letter))
        .map(|(_, _, heading)| Intent::Turn(*heading))
        .collect();
    if pressed(KeyCode::Space) {
        intents.push(Intent::TogglePause);
    }
    if pressed(KeyCode::R) {
        intents.push(Intent::Restart);
    }
    if cfg!(not(target_arch = "wasm32")) && pressed(KeyCode::Escape) {
        intents.push(Intent::Quit);
    }
    intents
}

/// Direction of a swipe from `start` to `end`, judged on the axis that
/// moved most (ties go to the vertical). Travel at or under the threshold
/// gives nothing.
pub fn classify_swipe(start: Vec2, end: Vec2) -> Option<Heading> {
    let d = end - start;
    if d.x.abs() > d.y.abs() {
        if d.x > SWIPE_THRESHOLD {
            Some(Heading::Right)
        } else if d.x < -SWIPE_THRESHOLD {
            Some(Heading::Left)
        } else {
            None
        }
    } else if d.y > SWIPE_THRESHOLD {
        Some(Heading::Down)
    } else if d.y < -SWIPE_THRESHOLD {
        Some(Heading::Up)
    } else {
        None
    }
}

/// Remembers where the current touch began.
#[derive(Default, Debug)]
pub struct SwipeTracker {
    start: Option<(u64, Vec2)>,
}

impl SwipeTracker {
    pub fn feed(&mut self, touch: &Touch) -> Option<Heading> {
        match touch.phase {
            TouchPhase::Started => {
                self.start = Some((touch.id, touch.position));
                None
            }
            TouchPhase::Ended => match self.start.take() {
                Some((id, start)) if id == touch.id => classify_swipe(start, touch.position),
                other => {
                    self.start = other;
                    None
                }
            },
            TouchPhase::Cancelled => {
                self.start = None;
                None
            }
            TouchPhase::Moved | TouchPhase::Stationary => None,
        }
    }
}

pub fn button_intent(point: Vec2, layout: &Layout) -> Option<Intent> {
    if layout.pause_button().contains(point) {
        Some(Intent::TogglePause)
    } else if layout.restart_button().contains(point) {
        Some(Intent::Restart)
    } else {
        None
    }
}

/// Per-frame reader of the keyboard, touch screen, and HUD buttons.
#[derive(Default)]
pub struct Input {
    swipe: SwipeTracker,
}

impl Input {
    pub fn poll(&mut self, layout: &Layout) -> Vec<Intent> {
        let mut intents = key_intents(is_key_pressed);
        for touch in touches() {
            if let Some(heading) = self.swipe.feed(&touch) {
                intents.push(Intent::Turn(heading));
            }
        }
        // Taps arrive here too: macroquad mirrors touches onto the mouse.
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            intents.extend(button_intent(vec2(x, y), layout));
        }
        intents
    }
}
