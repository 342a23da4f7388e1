//! Counter Confetti
//!
//! The celebratory effect element used by the counter widget.
//!
//! - **`confetti-container`**: an element with a single boolean `popped`
//!   trigger attribute
//! - **Spring particles**: RK4 springs drive each particle's burst and fall
//! - **Lazy module**: the effect is acquired through [`import`] on first use
//!
//! ```rust
//! use counter_confetti::{import, POPPED};
//!
//! let module = import();
//! let confetti = module.create("confetti").into_shared();
//! module.pop(&confetti);
//! assert!(confetti.lock().unwrap().has_attribute(POPPED));
//! ```

pub mod container;
pub mod module;
pub mod spring;

pub use container::{ConfettiContainer, Particle, SharedConfetti, DEFAULT_PARTICLE_COUNT, POPPED};
pub use module::{import, is_loaded, load_count, ConfettiModule};
pub use spring::{Spring, SpringConfig};
