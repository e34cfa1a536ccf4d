//! Property tests over classifier, debouncer and engine ticks

use std::time::Duration;

use proptest::prelude::*;

use chithra_core::{Gesture, LandmarkFrame, Mood, PointerClick, PointerSample, Timestamp, Vec3, LANDMARK_COUNT};
use chithra_gesture::{classify, GestureConfig, GestureDebouncer, HandLandmark, THUMB_ANCHOR};
use chithra_runtime::{Engine, EngineConfig, NullTracker};

fn coord() -> impl Strategy<Value = f32> {
    0.0f32..1.0
}

/// Arbitrary hand with every finger curled and the thumb tucked inward
fn fist_frame() -> impl Strategy<Value = LandmarkFrame> {
    (
        prop::collection::vec((coord(), coord(), coord()), LANDMARK_COUNT),
        prop::array::uniform4((0.05f32..0.5, 0.01f32..0.4)),
        0.05f32..0.5,
    )
        .prop_map(|(raw, fingers, thumb_gap)| {
            let mut points = [Vec3::ZERO; LANDMARK_COUNT];
            for (p, (x, y, z)) in points.iter_mut().zip(raw) {
                *p = Vec3::new(x, y, z);
            }
            for (&(tip, pip), (pip_y, drop)) in HandLandmark::finger_tips_and_pips().iter().zip(fingers) {
                points[pip.index()].y = pip_y;
                points[tip.index()].y = pip_y + drop;
            }
            let anchor = points[THUMB_ANCHOR.index()];
            points[HandLandmark::ThumbTip.index()].x = anchor.x - thumb_gap;
            LandmarkFrame::new(points, Timestamp::ZERO)
        })
}

#[derive(Debug, Clone)]
enum Poke {
    Move(f32, f32),
    Click,
}

fn poke() -> impl Strategy<Value = (u16, Poke)> {
    (
        0u16..2_000,
        prop_oneof![
            (0.0f32..1280.0, 0.0f32..720.0).prop_map(|(x, y)| Poke::Move(x, y)),
            Just(Poke::Click),
        ],
    )
}

proptest! {
    #[test]
    fn prop_fist_wins_over_everything(frame in fist_frame(), pinch in 0.0f32..1.0) {
        let config = GestureConfig { pinch_threshold: pinch, ..GestureConfig::default() };
        prop_assert_eq!(classify(&frame, &config), Gesture::Fist);
    }

    #[test]
    fn prop_debounce_spacing(gaps in prop::collection::vec(0u64..1_500, 1..40)) {
        let window = Duration::from_millis(500);
        let mut debouncer = GestureDebouncer::new(window);
        let mut now = Timestamp::ZERO;
        let mut last_accepted: Option<Timestamp> = None;

        for gap in gaps {
            now = now + Duration::from_millis(gap);
            let accepted = debouncer.offer(Gesture::OpenPalm, now).is_some();
            let expected = last_accepted.map_or(true, |last| now.since(last) >= window);
            prop_assert_eq!(accepted, expected);
            if accepted {
                last_accepted = Some(now);
            }
        }
    }

    #[test]
    fn prop_repeated_ticks_settle(
        pokes in prop::collection::vec(poke(), 0..20),
        idle_ms in 0i64..30_000,
        seed in any::<u64>(),
    ) {
        let mut engine = Engine::new(EngineConfig::seeded(seed), NullTracker::default(), Timestamp::ZERO).unwrap();
        let mut t = 0i64;
        for (gap, poke) in pokes {
            t += gap as i64;
            let at = Timestamp::from_millis(t);
            match poke {
                Poke::Move(x, y) => engine.pointer_moved(&PointerSample::new(x, y, at)),
                Poke::Click => engine.pointer_clicked(&PointerClick::on_creature(640.0, 360.0, at)),
            }
            engine.tick(at);
        }

        let now = Timestamp::from_millis(t + idle_ms);
        let moods: Vec<Mood> = (0..8).map(|_| engine.tick(now).mood).collect();

        // The first tick at `now` may react to fresh input. After that only
        // timeout exits into Content and the ladder step out of it may fire.
        let mut changes = 0;
        for pair in moods.windows(2) {
            if pair[0] != pair[1] {
                changes += 1;
                prop_assert!(
                    repeat_step_allowed(pair[0], pair[1]),
                    "{:?} -> {:?} on a repeated tick: {:?}", pair[0], pair[1], moods
                );
            }
        }
        prop_assert!(changes <= 2, "{:?}", moods);
        for window in moods[3..].windows(2) {
            prop_assert_eq!(window[0], window[1]);
        }
    }
}

/// Mood changes a tick may make when nothing but the tick itself repeats
fn repeat_step_allowed(from: Mood, to: Mood) -> bool {
    matches!((from, to), (Mood::Playful, Mood::Content) | (Mood::Angry, Mood::Content) | (Mood::Content, _))
}
