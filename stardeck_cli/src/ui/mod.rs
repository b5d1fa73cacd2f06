pub mod canvas;
pub mod pages;
pub mod theme;
pub mod tui_app;
