//! Spring physics for confetti particles
//!
//! Each particle axis is a damped spring launched with an initial velocity
//! and pulled toward a resting target. Integration is classic RK4 over the
//! (position, velocity) state.

/// Stiffness, damping and mass of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Slow drift with a little overshoot, used for the fall axis
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Bouncy spread, used for the horizontal burst
    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Damping relative to critical damping; below 1.0 the spring overshoots
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Motion {
    position: f32,
    velocity: f32,
}

impl Motion {
    /// `self + rate * h`
    fn advance(self, rate: Motion, h: f32) -> Motion {
        Motion {
            position: self.position + rate.position * h,
            velocity: self.velocity + rate.velocity * h,
        }
    }
}

/// A single damped spring
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    state: Motion,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            state: Motion {
                position: initial,
                velocity: 0.0,
            },
            target: initial,
        }
    }

    /// Give the spring an initial push
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.state.velocity = velocity;
        self
    }

    pub fn value(&self) -> f32 {
        self.state.position
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Within half a pixel of the target and nearly still
    pub fn is_settled(&self) -> bool {
        (self.state.position - self.target).abs() < 0.5 && self.state.velocity.abs() < 5.0
    }

    /// Advance by `dt` seconds, snapping to the target once settled
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.state = Motion {
                position: self.target,
                velocity: 0.0,
            };
            return;
        }

        let s = self.state;
        let k1 = self.rate(s);
        let k2 = self.rate(s.advance(k1, dt / 2.0));
        let k3 = self.rate(s.advance(k2, dt / 2.0));
        let k4 = self.rate(s.advance(k3, dt));

        let blend = |a: f32, b: f32, c: f32, d: f32| (a + 2.0 * b + 2.0 * c + d) / 6.0;
        self.state = s.advance(
            Motion {
                position: blend(k1.position, k2.position, k3.position, k4.position),
                velocity: blend(k1.velocity, k2.velocity, k3.velocity, k4.velocity),
            },
            dt,
        );
    }

    /// Time derivative of a state: (velocity, acceleration)
    fn rate(&self, m: Motion) -> Motion {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        Motion {
            position: m.velocity,
            velocity: (-stiffness * (m.position - self.target) - damping * m.velocity) / mass,
        }
    }
}
