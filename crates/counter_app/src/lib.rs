//! Counter App
//!
//! A bounded counter widget: a number display with `-` and `+` controls, styled
//! from the DDD design tokens, that throws confetti when the count reaches 21.
//!
//! # Example
//!
//! ```rust
//! use counter_app::prelude::*;
//!
//! let mut counter = CounterApp::new();
//! counter.set_max(25);
//! counter.set_count(20);
//! counter.perform_update();
//!
//! counter.click(Action::Increase);
//! counter.perform_update();
//! counter.tasks().run_until_idle();
//!
//! assert_eq!(counter.count(), 21);
//! assert!(counter.confetti().lock().unwrap().is_popped());
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod hax;
pub mod style;
pub mod view;

pub use config::CounterConfig;
pub use counter::{Action, CounterApp};
pub use error::{CounterError, Result};
pub use hax::HaxProperties;
pub use style::{styles, CounterStyles};
pub use view::{el, Element, View};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CounterConfig;
    pub use crate::counter::{Action, CounterApp};
    pub use crate::error::{CounterError, Result};
    pub use crate::view::{Element, View};

    pub use counter_core::TaskQueue;
    pub use counter_theme::{ColorScheme, ThemeState};
}
