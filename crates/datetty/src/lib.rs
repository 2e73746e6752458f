pub mod calendar;
pub mod cli;
pub mod format;
pub mod keymap;
pub mod logging;
pub mod picker;
pub mod runtime;
pub mod ui;
