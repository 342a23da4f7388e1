//! The `confetti-container` element
//!
//! A wrapper element that bursts confetti over its content when its boolean
//! `popped` attribute is set. Particles fly out from the center, fall under
//! spring physics, and once every particle has come to rest the element
//! clears `popped` again so it can be re-triggered.

use crate::spring::{Spring, SpringConfig};
use counter_core::Color;
use counter_theme::{ColorToken, ThemeState};
use std::sync::{Arc, Mutex};

/// Shared handle to a mounted confetti element
pub type SharedConfetti = Arc<Mutex<ConfettiContainer>>;

/// Name of the boolean trigger attribute
pub const POPPED: &str = "popped";

/// Default number of particles per burst
pub const DEFAULT_PARTICLE_COUNT: usize = 40;

/// Golden angle in radians, for an even spiral spread
const GOLDEN_ANGLE: f32 = 2.399_963;

/// Palette tokens cycled through by the particles
const PALETTE: [ColorToken; 6] = [
    ColorToken::KeystoneYellow,
    ColorToken::CreekTeal,
    ColorToken::AthertonViolet,
    ColorToken::InventOrange,
    ColorToken::Original87Pink,
    ColorToken::SkyLight,
];

/// One piece of confetti
#[derive(Clone, Debug)]
pub struct Particle {
    x: Spring,
    y: Spring,
    pub color: Color,
    /// Rotation in radians
    pub rotation: f32,
    spin: f32,
}

impl Particle {
    fn launch(index: usize, total: usize, spread: f32, color: Color) -> Self {
        let angle = index as f32 * GOLDEN_ANGLE;
        let radius = spread * ((index as f32 + 0.5) / total as f32).sqrt();

        let mut x =
            Spring::new(SpringConfig::wobbly(), 0.0).with_velocity(angle.cos() * spread * 4.0);
        x.set_target(angle.cos() * radius);

        // Burst upward, then come to rest below the origin
        let mut y = Spring::new(SpringConfig::gentle(), 0.0).with_velocity(-spread * 3.0);
        y.set_target(spread * 0.5 + angle.sin().abs() * radius);

        Self {
            x,
            y,
            color,
            rotation: angle,
            spin: if index % 2 == 0 { 6.0 } else { -6.0 },
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
        if !self.is_settled() {
            self.rotation += self.spin * dt;
        }
    }
}

/// The effect element
#[derive(Debug)]
pub struct ConfettiContainer {
    id: String,
    class: Option<String>,
    popped: bool,
    particle_count: usize,
    spread: f32,
    particles: Vec<Particle>,
    bursts: u32,
}

impl ConfettiContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: None,
            popped: false,
            particle_count: DEFAULT_PARTICLE_COUNT,
            spread: 120.0,
            particles: Vec::new(),
            bursts: 0,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Wrap in a shared handle for mounting
    pub fn into_shared(self) -> SharedConfetti {
        Arc::new(Mutex::new(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn is_popped(&self) -> bool {
        self.popped
    }

    /// How many bursts this element has started
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Set or clear the trigger
    ///
    /// Setting it while already popped does not restart the burst.
    pub fn set_popped(&mut self, popped: bool) {
        if popped == self.popped {
            return;
        }
        self.popped = popped;

        if popped {
            self.burst();
        } else {
            self.particles.clear();
        }
    }

    /// Boolean-attribute style setter: any value means present
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match name {
            POPPED => self.set_popped(true),
            "id" => self.id = value.to_string(),
            "class" => self.class = Some(value.to_string()),
            _ => tracing::trace!("confetti-container ignores attribute {}", name),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        match name {
            POPPED => self.set_popped(false),
            "class" => self.class = None,
            _ => {}
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        match name {
            POPPED => self.popped,
            "id" => true,
            "class" => self.class.is_some(),
            _ => false,
        }
    }

    /// Advance particle animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !self.popped {
            return;
        }

        for particle in &mut self.particles {
            particle.step(dt);
        }

        if self.particles.iter().all(Particle::is_settled) {
            tracing::debug!("confetti #{} settled", self.id);
            self.set_popped(false);
        }
    }

    fn burst(&mut self) {
        let theme = ThemeState::get();
        let total = self.particle_count;
        self.particles = (0..total)
            .map(|i| {
                let color = theme.color(PALETTE[i % PALETTE.len()]);
                Particle::launch(i, total, self.spread, color)
            })
            .collect();
        self.bursts += 1;
        tracing::debug!(
            "confetti #{} burst {} with {} particles",
            self.id,
            self.bursts,
            total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popped_attribute_starts_burst() {
        let mut confetti = ConfettiContainer::new("confetti").with_class("wrapper");
        assert!(!confetti.has_attribute(POPPED));
        assert!(confetti.particles().is_empty());

        confetti.set_attribute(POPPED, "");
        assert!(confetti.is_popped());
        assert_eq!(confetti.particles().len(), DEFAULT_PARTICLE_COUNT);
        assert_eq!(confetti.bursts(), 1);
    }

    #[test]
    fn test_repeat_set_does_not_restart() {
        let mut confetti = ConfettiContainer::new("confetti");
        confetti.set_popped(true);
        confetti.set_popped(true);
        assert_eq!(confetti.bursts(), 1);
    }

    #[test]
    fn test_particles_move_then_settle() {
        let mut confetti = ConfettiContainer::new("confetti").with_particle_count(8);
        confetti.set_popped(true);

        confetti.tick(1.0 / 60.0);
        let moved = confetti
            .particles()
            .iter()
            .any(|p| p.position() != (0.0, 0.0));
        assert!(moved);

        // Ten seconds is far longer than any particle needs
        for _ in 0..600 {
            confetti.tick(1.0 / 60.0);
        }
        assert!(!confetti.is_popped());
        assert!(confetti.particles().is_empty());

        // Can be triggered again
        confetti.set_attribute(POPPED, "");
        assert_eq!(confetti.bursts(), 2);
    }

    #[test]
    fn test_remove_attribute_clears() {
        let mut confetti = ConfettiContainer::new("confetti");
        confetti.set_attribute(POPPED, "");
        confetti.remove_attribute(POPPED);
        assert!(!confetti.has_attribute(POPPED));
        assert!(confetti.particles().is_empty());
    }
}
