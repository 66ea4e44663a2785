use crate::constants::{SPRING_DAMPING, SPRING_STIFFNESS, SPRING_THRESHOLD};

/// A spring-based animation value for smooth transitions.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

impl Spring {
    /// Creates a new spring with custom parameters.
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    /// Updates the spring physics. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        let force = (self.target - self.position) * self.stiffness;
        self.velocity = (self.velocity + force) * self.damping;
        self.position += self.velocity;

        self.position = self.position.clamp(0.0, 1.0);

        let distance = (self.target - self.position).abs();
        if distance < SPRING_THRESHOLD && self.velocity.abs() < SPRING_THRESHOLD {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        true
    }

    /// Sets the target value for the spring to animate towards.
    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    /// True while the spring has not yet settled on its target.
    pub fn is_animating(&self) -> bool {
        self.position != self.target || self.velocity != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let mut frames = 0;
        while spring.update() {
            frames += 1;
            assert!(frames < 10_000, "spring never settled");
        }
        assert_eq!(spring.position, 1.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_target_is_clamped() {
        let mut spring = Spring::default();
        spring.set_target(3.0);
        assert_eq!(spring.target, 1.0);
    }
}
