use std::f32::consts::TAU;

use crate::constants::{FOV, MOVE_SPEED};

/// Player pose in map units. `heading` is the per-frame movement step along
/// the facing direction and is recomputed whenever the angle changes.
pub struct Player {
    pub pos: [f32; 2],
    pub angle: f32, // radians, kept in [0, 2pi)
    pub fov: f32,
    pub heading: [f32; 2],
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        let mut player = Self {
            pos: [x, y],
            angle: 0.0,
            fov: FOV,
            heading: [0.0, 0.0],
        };
        player.set_angle(angle);
        player
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(TAU);
        self.heading = [
            self.angle.cos() * MOVE_SPEED,
            self.angle.sin() * MOVE_SPEED,
        ];
    }

    pub fn turn(&mut self, delta: f32) {
        self.set_angle(self.angle + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_wraps_the_angle() {
        let mut player = Player::new(2.0, 2.0, 0.0);
        player.turn(-0.1);
        assert!(player.angle >= 0.0 && player.angle < TAU);
        assert!((player.angle - (TAU - 0.1)).abs() < 1e-5);

        player.set_angle(TAU + 0.25);
        assert!((player.angle - 0.25).abs() < 1e-5);
    }

    #[test]
    fn heading_follows_the_angle() {
        let mut player = Player::new(2.0, 2.0, 0.0);
        assert!((player.heading[0] - MOVE_SPEED).abs() < 1e-6);
        assert!(player.heading[1].abs() < 1e-6);

        player.set_angle(std::f32::consts::FRAC_PI_2);
        assert!(player.heading[0].abs() < 1e-6);
        assert!((player.heading[1] - MOVE_SPEED).abs() < 1e-6);
    }
}
