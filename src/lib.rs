//! Wrap-around snake on a 24x24 board, drawn with macroquad.

pub mod app;
pub mod config;
pub mod grid;
pub mod input;
pub mod render;
pub mod state;
pub mod step;
pub mod storage;
pub mod ticker;
