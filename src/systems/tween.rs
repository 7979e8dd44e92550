//! Position tweens, advanced once per frame by the frame delta. A finished
//! tween stops playing and leaves the entity exactly at `to`.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::tween::{Easing, TweenPosition};
use crate::resources::worldtime::WorldTime;

/// Eased fraction for normalized time `t` (clamped to `[0, 1]`).
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
    }
}

/// Normalized progress of a tween. Zero-length tweens are complete at once.
pub(crate) fn progress(time: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (time / duration).clamp(0.0, 1.0)
    }
}

pub fn tween_mapposition_system(
    mut query: Query<(&mut MapPosition, &mut TweenPosition)>,
    time: Res<WorldTime>,
) {
    for (mut position, mut tween) in query.iter_mut() {
        if !tween.playing {
            continue;
        }
        tween.time += time.delta;
        let t = progress(tween.time, tween.duration);
        if t >= 1.0 {
            position.pos = tween.to;
            tween.playing = false;
        } else {
            position.pos = tween.from.lerp(tween.to, ease(tween.easing, t));
        }
    }
}
