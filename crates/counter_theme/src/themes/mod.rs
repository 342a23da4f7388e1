//! Built-in themes

pub mod ddd;

pub use ddd::DddTheme;
