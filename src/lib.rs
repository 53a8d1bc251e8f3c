pub mod app;
pub mod event;
pub mod game;
pub mod geometry;
pub mod input;
pub mod sprite;
pub mod ui;
