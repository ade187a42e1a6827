// Staggered fade-in timing.
// Visual: tile i stays invisible until its reveal delay, then ramps to opaque.

use std::time::Duration;

use crate::spiral::Tile;

/// Opacity in [0,1] of a tile at `elapsed` since the spiral started.
pub fn reveal_alpha(reveal_delay: Duration, fade_duration: Duration, elapsed: Duration) -> f32 {
    let Some(into_fade) = elapsed.checked_sub(reveal_delay) else {
        return 0.0;
    };
    if fade_duration.is_zero() {
        return 1.0;
    }
    (into_fade.as_secs_f32() / fade_duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// When the last tile becomes fully opaque.
pub fn total_reveal_time(tiles: &[Tile], fade_duration: Duration) -> Duration {
    tiles
        .iter()
        .map(|t| t.reveal_delay)
        .max()
        .map_or(Duration::ZERO, |last| last + fade_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::Rect;
    use crate::random::RngSource;
    use crate::spiral::{generate, SpiralConfig};

    const FADE: Duration = Duration::from_millis(300);

    #[test]
    fn hidden_before_delay() {
        let a = reveal_alpha(Duration::from_millis(600), FADE, Duration::from_millis(599));
        assert_eq!(a, 0.0);
    }

    #[test]
    fn ramps_linearly_then_holds() {
        let delay = Duration::from_millis(300);
        assert_eq!(reveal_alpha(delay, FADE, delay), 0.0);
        let half = reveal_alpha(delay, FADE, Duration::from_millis(450));
        assert!((half - 0.5).abs() < 1e-4, "{half}");
        assert_eq!(reveal_alpha(delay, FADE, Duration::from_millis(600)), 1.0);
        assert_eq!(reveal_alpha(delay, FADE, Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn zero_fade_is_instant() {
        assert_eq!(reveal_alpha(Duration::ZERO, Duration::ZERO, Duration::ZERO), 1.0);
    }

    #[test]
    fn total_time_covers_last_tile() {
        let config = SpiralConfig::default();
        let canvas = Rect::from_size(1920, 1080).unwrap();
        let tiles = generate(canvas, Color::BLACK, &config, &mut RngSource::seeded(3));
        let total = total_reveal_time(&tiles, config.fade_duration);
        assert_eq!(total, config.fade_duration * tiles.len() as u32);
        assert_eq!(total_reveal_time(&[], FADE), Duration::ZERO);
    }
}
