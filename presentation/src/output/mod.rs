//! Terminal output: record formatting and the console display

pub mod console;
pub mod display;
