//! Mathdeck library: question generator, token theme, UI.

pub mod app;
pub mod math_generator;
pub mod screens;
pub mod theme;
pub mod widgets;
