//! Procedural Driver - per-tick pose and color
//!
//! The head chases the active target, every segment chases the one ahead of
//! it, and colors blend toward the mood palette. Blend factors are tuned per
//! nominal tick and rescaled by the real tick length.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use chithra_core::{Color, Mood, Smoothing, Timestamp, Vec3};

use crate::{
    body_color, eye_color, rest_positions, FaceExpression, LimbPose, WanderTarget, INITIAL_BODY,
    NEUTRAL_EYES,
};

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Body segments trailing the head
    pub segment_count: usize,
    /// Head blend toward the target, per nominal tick
    pub head_follow: f32,
    /// Segment blend toward its predecessor, per nominal tick
    pub segment_follow: f32,
    /// Body color blend, per nominal tick
    pub body_color_blend: f32,
    /// Eye color blend, per nominal tick
    pub eye_color_blend: f32,
    /// Tick length the blend factors were tuned for
    pub nominal_tick_us: u64,
    /// Time between angry wander targets
    pub wander_interval_ms: u64,
    /// Half-width of the wander cube
    pub wander_extent: f32,
    /// Head pulse angular speed, radians per millisecond
    pub pulse_rate: f32,
    /// Head pulse amplitude around 1.0
    pub pulse_amplitude: f32,
    /// Limb animation phase per millisecond
    pub limb_rate: f32,
    /// Fixed RNG seed for reproducible wandering
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            segment_count: 10,
            head_follow: 0.05,
            segment_follow: 0.1,
            body_color_blend: 0.05,
            eye_color_blend: 0.1,
            nominal_tick_us: 16_667,
            wander_interval_ms: 2000,
            wander_extent: 25.0,
            pulse_rate: 0.005,
            pulse_amplitude: 0.1,
            limb_rate: 0.01,
            seed: None,
        }
    }
}

impl DriverConfig {
    pub fn nominal_tick(&self) -> Duration {
        Duration::from_micros(self.nominal_tick_us)
    }

    pub fn wander_interval(&self) -> Duration {
        Duration::from_millis(self.wander_interval_ms)
    }

    fn smoothing(&self, per_tick: f32) -> Smoothing {
        Smoothing::new(per_tick, self.nominal_tick())
    }
}

/// Continuous pose handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pose {
    pub head_position: Vec3,
    pub segment_positions: Vec<Vec3>,
    pub arm_rotations: [Vec3; 2],
    pub leg_rotations: [Vec3; 2],
    pub head_scale: f32,
    pub mouth_rotation_z: f32,
    pub mouth_scale: Vec3,
    pub eyebrow_visible: [bool; 2],
    pub eyebrow_rotation_z: [f32; 2],
}

/// Shared body color and eye color
///
/// The body color applies to every segment and limb; facial parts keep
/// their own colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorState {
    pub body: Color,
    pub eyes: Color,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub mood: Mood,
    pub pose: Pose,
    pub colors: ColorState,
}

impl Frame {
    /// Capitalized mood for on-screen display
    pub fn mood_label(&self) -> &'static str {
        self.mood.label()
    }
}

/// Procedural pose/color driver
#[derive(Debug, Clone)]
pub struct ProceduralDriver {
    config: DriverConfig,
    head_follow: Smoothing,
    segment_follow: Smoothing,
    body_blend: Smoothing,
    eye_blend: Smoothing,
    /// Head first, then segments
    chain: Vec<Vec3>,
    body_color: Color,
    eye_color: Color,
    eyebrow_tilt: [f32; 2],
    wander: WanderTarget,
}

impl ProceduralDriver {
    pub fn new(config: DriverConfig, now: Timestamp) -> Self {
        Self {
            head_follow: config.smoothing(config.head_follow),
            segment_follow: config.smoothing(config.segment_follow),
            body_blend: config.smoothing(config.body_color_blend),
            eye_blend: config.smoothing(config.eye_color_blend),
            chain: rest_positions(config.segment_count),
            body_color: INITIAL_BODY,
            eye_color: NEUTRAL_EYES,
            eyebrow_tilt: [0.0; 2],
            wander: WanderTarget::new(
                config.wander_interval(),
                config.wander_extent,
                config.seed,
                now,
            ),
            config,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn head_position(&self) -> Vec3 {
        self.chain[0]
    }

    pub fn body_color(&self) -> Color {
        self.body_color
    }

    pub fn eye_color(&self) -> Color {
        self.eye_color
    }

    /// Advance one tick of length `dt`
    ///
    /// `target` is the fused input target; it is ignored while Angry, when
    /// the creature wanders instead.
    pub fn step(&mut self, mood: Mood, target: Vec3, now: Timestamp, dt: Duration) -> Frame {
        let active_target = if mood == Mood::Angry {
            self.wander.update(now)
        } else {
            target
        };

        let head_k = self.head_follow.factor(dt);
        let segment_k = self.segment_follow.factor(dt);
        self.chain[0] = self.chain[0].lerp(&active_target, head_k);
        for i in 1..self.chain.len() {
            let leader = self.chain[i - 1];
            self.chain[i] = self.chain[i].lerp(&leader, segment_k);
        }

        let now_ms = now.as_millis_f64();
        let head_scale =
            1.0 + ((now_ms * self.config.pulse_rate as f64).sin() as f32) * self.config.pulse_amplitude;
        let limbs = LimbPose::for_mood(mood, (now_ms * self.config.limb_rate as f64) as f32);

        self.eye_color = self.eye_color.lerp(&eye_color(mood), self.eye_blend.factor(dt));
        self.body_color = self.body_color.lerp(&body_color(mood), self.body_blend.factor(dt));

        let face = FaceExpression::for_mood(mood);
        if let Some(tilt) = face.eyebrow_tilt {
            self.eyebrow_tilt = tilt;
        }
        let brows_visible = face.eyebrows_visible();

        Frame {
            mood,
            pose: Pose {
                head_position: self.chain[0],
                segment_positions: self.chain[1..].to_vec(),
                arm_rotations: limbs.arms,
                leg_rotations: limbs.legs,
                head_scale,
                mouth_rotation_z: face.mouth_rotation_z,
                mouth_scale: face.mouth_scale,
                eyebrow_visible: [brows_visible; 2],
                eyebrow_rotation_z: self.eyebrow_tilt,
            },
            colors: ColorState {
                body: self.body_color,
                eyes: self.eye_color,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAD_EYES;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    fn driver() -> ProceduralDriver {
        ProceduralDriver::new(
            DriverConfig {
                seed: Some(1),
                ..DriverConfig::default()
            },
            at(0),
        )
    }

    fn nominal() -> Duration {
        DriverConfig::default().nominal_tick()
    }

    #[test]
    fn test_head_moves_five_percent_per_nominal_tick() {
        let mut d = driver();
        let frame = d.step(Mood::Content, Vec3::new(10.0, 0.0, 0.0), at(16), nominal());
        assert!((frame.pose.head_position.x - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_segments_trail_the_head() {
        let mut d = driver();
        let target = Vec3::new(20.0, 0.0, 0.0);
        let mut frame = d.step(Mood::Content, target, at(0), nominal());
        for i in 1..300 {
            frame = d.step(Mood::Content, target, at(i * 16), nominal());
        }
        let xs: Vec<f32> = std::iter::once(frame.pose.head_position.x)
            .chain(frame.pose.segment_positions.iter().map(|p| p.x))
            .collect();
        assert_eq!(frame.pose.segment_positions.len(), 10);
        assert!(xs.windows(2).all(|w| w[0] >= w[1]), "chain not trailing: {xs:?}");
        assert!(xs[0] > 19.0);
    }

    #[test]
    fn test_variable_tick_rate_matches_nominal() {
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut fast = driver();
        let mut slow = driver();

        let half = nominal() / 2;
        fast.step(Mood::Content, target, at(8), half);
        let a = fast.step(Mood::Content, target, at(16), half);
        let b = slow.step(Mood::Content, target, at(16), nominal());

        assert!((a.pose.head_position.x - b.pose.head_position.x).abs() < 1e-4);
    }

    #[test]
    fn test_head_pulse() {
        let mut d = driver();
        let frame = d.step(Mood::Sad, Vec3::ZERO, at(0), nominal());
        assert!((frame.pose.head_scale - 1.0).abs() < 1e-6);

        // sin(0.005 * 314.159) ~= 1
        let frame = d.step(Mood::Sad, Vec3::ZERO, Timestamp::from_micros(314_159), nominal());
        assert!((frame.pose.head_scale - 1.1).abs() < 1e-4);
    }

    #[test]
    fn test_colors_blend_gradually() {
        let mut d = driver();
        let frame = d.step(Mood::Sad, Vec3::ZERO, at(16), nominal());
        assert!(frame.colors.eyes.max_channel_delta(&NEUTRAL_EYES) > 0.0);
        assert!(frame.colors.eyes.max_channel_delta(&SAD_EYES) > 0.5);

        for i in 2..400 {
            d.step(Mood::Sad, Vec3::ZERO, at(i * 16), nominal());
        }
        assert!(d.eye_color().max_channel_delta(&SAD_EYES) < 1e-3);
        assert!(d.body_color().max_channel_delta(&body_color(Mood::Sad)) < 1e-3);
    }

    #[test]
    fn test_angry_ignores_input_target() {
        let mut d = driver();
        let target = Vec3::new(20.0, 20.0, 0.0);
        let frame = d.step(Mood::Angry, target, at(100), nominal());
        // Wander target still at origin, head stays put
        assert_eq!(frame.pose.head_position, Vec3::ZERO);

        let frame = d.step(Mood::Angry, target, at(2101), nominal());
        assert_ne!(frame.pose.head_position, Vec3::ZERO);
        assert!(frame.pose.arm_rotations[0].x < 0.0);
    }

    #[test]
    fn test_face_follows_mood() {
        let mut d = driver();
        let angry = d.step(Mood::Angry, Vec3::ZERO, at(16), nominal());
        assert_eq!(angry.pose.eyebrow_visible, [true, true]);

        let content = d.step(Mood::Content, Vec3::ZERO, at(32), nominal());
        assert_eq!(content.pose.eyebrow_visible, [false, false]);
        // Hidden brows keep their last tilt
        assert_eq!(content.pose.eyebrow_rotation_z, angry.pose.eyebrow_rotation_z);
        assert_eq!(content.mood_label(), "Content");
    }
}
