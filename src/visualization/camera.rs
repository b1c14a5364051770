//! Inertial fly camera.
//!
//! Two concurrent modes: navigation (always active, velocity accumulates
//! from movement intent) and look (active only while the look button is
//! held, 1:1 pointer-to-orientation with no inertia). Orientation is
//! yaw-then-pitch only, so the camera can never roll or invert.

use std::f32::consts::FRAC_PI_2;

use bevy::math::{EulerRot, Quat, Vec2, Vec3};

use crate::config::CameraConfig;

/// Which movement keys are asserted this frame. Semantic directions, not key
/// codes; the input system maps whatever bindings it likes onto this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Camera transform state: position, yaw/pitch orientation, velocity.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    /// Rotation around Y, radians.
    pub yaw: f32,
    /// Rotation around local X, radians, clamped to ±90°.
    pub pitch: f32,
    pub velocity: Vec3,
    /// While true, pointer deltas reorient the camera and picking is
    /// suppressed.
    pub look_active: bool,
}

impl CameraRig {
    pub fn new(cfg: &CameraConfig) -> Self {
        let [x, y, z] = cfg.initial_position;
        Self {
            position: Vec3::new(x, y, z),
            yaw: 0.0,
            pitch: cfg.initial_pitch,
            velocity: Vec3::ZERO,
            look_active: false,
        }
    }

    /// Yaw-then-pitch composition, zero roll.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Apply a pointer delta. Only effective while look mode is active;
    /// outside it, pointer movement has no effect on orientation.
    pub fn apply_look(&mut self, delta: Vec2, cfg: &CameraConfig) {
        if !self.look_active {
            return;
        }
        self.yaw -= delta.x * cfg.look_sensitivity;
        self.pitch = (self.pitch - delta.y * cfg.look_sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Advance the velocity model and integrate position.
    ///
    /// With any key asserted the velocity moves toward the (normalized,
    /// max-speed-scaled) target at the capped acceleration rate; with none
    /// asserted it decelerates at the separate deceleration rate, snapping
    /// to exactly zero once within one frame's decrease so it never creeps
    /// asymptotically. A non-positive `dt` is a no-op.
    pub fn advance(&mut self, dt: f32, intent: MoveIntent, cfg: &CameraConfig) {
        if dt <= 0.0 {
            return;
        }

        let orientation = self.orientation();
        let forward = orientation * Vec3::NEG_Z;
        let right = orientation * Vec3::X;

        let mut target = Vec3::ZERO;
        if intent.forward {
            target += forward;
        }
        if intent.back {
            target -= forward;
        }
        if intent.right {
            target += right;
        }
        if intent.left {
            target -= right;
        }
        if intent.up {
            target += Vec3::Y;
        }
        if intent.down {
            target -= Vec3::Y;
        }

        // Opposing keys cancel to a zero vector; normalize_or_zero keeps
        // that from turning into NaN and the zero target decelerates below.
        target = target.normalize_or_zero() * cfg.max_speed;

        if target != Vec3::ZERO {
            let step = target - self.velocity;
            let max_step = cfg.acceleration * dt;
            if step.length() > max_step {
                self.velocity += step.normalize() * max_step;
            } else {
                self.velocity = target;
            }
        } else {
            let decrease = cfg.deceleration * dt;
            if self.velocity.length() <= decrease {
                self.velocity = Vec3::ZERO;
            } else {
                self.velocity -= self.velocity.normalize() * decrease;
            }
        }

        if self.velocity.length() > cfg.max_speed {
            self.velocity = self.velocity.normalize() * cfg.max_speed;
        }

        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn cfg() -> CameraConfig {
        CameraConfig::default()
    }

    fn forward_intent() -> MoveIntent {
        MoveIntent {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_rest_stays_at_rest() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        let start = rig.position;
        for _ in 0..300 {
            rig.advance(DT, MoveIntent::default(), &cfg);
        }
        assert_eq!(rig.velocity, Vec3::ZERO);
        assert_eq!(rig.position, start);
    }

    #[test]
    fn test_speed_increases_monotonically_to_max() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        let mut last_speed = 0.0;
        let mut reached_max = false;
        for _ in 0..600 {
            rig.advance(DT, forward_intent(), &cfg);
            let speed = rig.velocity.length();
            assert!(speed <= cfg.max_speed + 1e-4);
            if (speed - cfg.max_speed).abs() < 1e-3 {
                reached_max = true;
                break;
            }
            assert!(speed > last_speed);
            last_speed = speed;
        }
        assert!(reached_max);
    }

    #[test]
    fn test_release_reaches_exact_zero_in_bounded_frames() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        // Reach max speed first.
        for _ in 0..120 {
            rig.advance(DT, forward_intent(), &cfg);
        }
        // max_speed / (deceleration * dt) frames, plus slack for rounding.
        let bound = (cfg.max_speed / (cfg.deceleration * DT)).ceil() as usize + 5;
        let mut stopped_after = None;
        for frame in 0..bound {
            rig.advance(DT, MoveIntent::default(), &cfg);
            if rig.velocity == Vec3::ZERO {
                stopped_after = Some(frame);
                break;
            }
        }
        assert!(stopped_after.is_some());
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        rig.velocity = Vec3::new(5.0, 0.0, 0.0);
        let before = rig.clone();
        rig.advance(0.0, forward_intent(), &cfg);
        assert_eq!(rig.position, before.position);
        assert_eq!(rig.velocity, before.velocity);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        let intent = MoveIntent {
            forward: true,
            back: true,
            ..Default::default()
        };
        for _ in 0..10 {
            rig.advance(DT, intent, &cfg);
        }
        assert_eq!(rig.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_pitch_clamped() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        rig.look_active = true;
        rig.apply_look(Vec2::new(0.0, -100_000.0), &cfg);
        assert_eq!(rig.pitch, FRAC_PI_2);
        rig.apply_look(Vec2::new(0.0, 100_000.0), &cfg);
        assert_eq!(rig.pitch, -FRAC_PI_2);
    }

    #[test]
    fn test_look_ignored_outside_look_mode() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        let (yaw, pitch) = (rig.yaw, rig.pitch);
        rig.apply_look(Vec2::new(100.0, 50.0), &cfg);
        assert_eq!((rig.yaw, rig.pitch), (yaw, pitch));
    }

    #[test]
    fn test_orientation_has_no_roll() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        rig.look_active = true;
        rig.apply_look(Vec2::new(321.0, -123.0), &cfg);
        let (_, _, roll) = rig.orientation().to_euler(EulerRot::YXZ);
        assert!(roll.abs() < 1e-5);
    }

    #[test]
    fn test_movement_follows_view_direction() {
        let cfg = cfg();
        let mut rig = CameraRig::new(&cfg);
        rig.pitch = 0.0;
        let start = rig.position;
        for _ in 0..60 {
            rig.advance(DT, forward_intent(), &cfg);
        }
        let moved = rig.position - start;
        // Yaw 0, pitch 0 faces -Z.
        assert!(moved.z < 0.0);
        assert!(moved.x.abs() < 1e-3);
    }
}
