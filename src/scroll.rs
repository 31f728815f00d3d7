//! Maps the window scroll offset onto the hero animation.
//!
//! Everything here is pure. The browser wiring lives in [`crate::hooks`].

use thiserror::Error;

use crate::config::{HERO_SCROLL_LENGTH, SLIDE_THRESHOLDS};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScrollError {
    #[error("hero scroll length is zero or unavailable")]
    Division,
}

/// Vertical scroll offset of the window, in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
}

impl ScrollState {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }
}

/// Animation values for one progress value through the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub progress: f64,
    pub slide_index: usize,
    pub rotate_y: f64,
    pub rotate_x: f64,
    pub scale: f64,
    pub opacity_blend: f64,
    pub aura_opacity: f64,
    pub glow_opacity: f64,
}

impl AnimationFrame {
    pub fn at(progress: f64) -> Self {
        Self {
            progress,
            slide_index: slide_index(progress),
            rotate_y: -40.0 + progress * 360.0,
            rotate_x: 12.0 - progress * 22.0,
            scale: 1.3 - progress * 0.15,
            opacity_blend: 0.8 + progress * 0.2,
            aura_opacity: 0.2 + progress * 0.4,
            glow_opacity: 0.25 + progress * 0.65,
        }
    }

    /// CSS transform for the map stage.
    pub fn transform(&self) -> String {
        format!(
            "rotateY({:.2}deg) rotateX({:.2}deg) scale({:.4})",
            self.rotate_y, self.rotate_x, self.scale
        )
    }
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Fraction of the hero scrolled through, clamped to `[0, 1]`.
///
/// Negative and non-finite offsets count as the top of the page.
pub fn progress(state: ScrollState, max_scroll: Option<f64>) -> Result<f64, ScrollError> {
    let max_scroll = match max_scroll {
        Some(max) if max.is_finite() && max > 0.0 => max,
        _ => return Err(ScrollError::Division),
    };
    if !state.offset.is_finite() || state.offset <= 0.0 {
        return Ok(0.0);
    }
    Ok((state.offset / max_scroll).min(1.0))
}

/// Half-open brackets: `[0, 0.33)`, `[0.33, 0.66)`, `[0.66, 1]`.
pub fn slide_index(progress: f64) -> usize {
    SLIDE_THRESHOLDS
        .iter()
        .take_while(|threshold| progress >= **threshold)
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimationMapper {
    pub scroll_length: f64,
}

impl Default for ScrollAnimationMapper {
    fn default() -> Self {
        Self {
            scroll_length: HERO_SCROLL_LENGTH,
        }
    }
}

impl ScrollAnimationMapper {
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        viewport_height * self.scroll_length
    }

    /// `viewport_height` is `None` when the window could not report it.
    pub fn try_progress(
        &self,
        state: ScrollState,
        viewport_height: Option<f64>,
    ) -> Result<f64, ScrollError> {
        progress(state, viewport_height.map(|height| self.max_scroll(height)))
    }

    pub fn map(&self, state: ScrollState, viewport_height: Option<f64>) -> AnimationFrame {
        let progress = match self.try_progress(state, viewport_height) {
            Ok(progress) => progress,
            Err(err) => {
                log::debug!("{}, falling back to the first frame", err);
                0.0
            }
        };
        AnimationFrame::at(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn top_of_page_is_first_frame() {
        let frame = ScrollAnimationMapper::default().map(ScrollState::new(0.0), Some(800.0));

        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.slide_index, 0);
        assert!(close(frame.rotate_y, -40.0));
        assert!(close(frame.rotate_x, 12.0));
        assert!(close(frame.scale, 1.3));
        assert!(close(frame.opacity_blend, 0.8));
        assert!(close(frame.aura_opacity, 0.2));
        assert!(close(frame.glow_opacity, 0.25));
    }

    #[test]
    fn end_of_hero_is_last_frame() {
        let mapper = ScrollAnimationMapper::default();
        assert!(close(mapper.max_scroll(800.0), 2080.0));

        let frame = mapper.map(ScrollState::new(2080.0), Some(800.0));

        assert!(close(frame.progress, 1.0));
        assert_eq!(frame.slide_index, 2);
        assert!(close(frame.rotate_y, 320.0));
        assert!(close(frame.rotate_x, -10.0));
        assert!(close(frame.scale, 1.15));
        assert!(close(frame.opacity_blend, 1.0));
    }

    #[test]
    fn progress_clamps_past_the_hero() {
        assert_eq!(progress(ScrollState::new(5000.0), Some(2080.0)), Ok(1.0));
    }

    #[test]
    fn negative_and_nan_offsets_clamp_to_zero() {
        assert_eq!(progress(ScrollState::new(-120.0), Some(2080.0)), Ok(0.0));
        assert_eq!(progress(ScrollState::new(f64::NAN), Some(2080.0)), Ok(0.0));
    }

    #[test]
    fn zero_or_missing_scroll_length_is_division_error() {
        assert_matches!(progress(ScrollState::new(300.0), Some(0.0)), Err(ScrollError::Division));
        assert_matches!(progress(ScrollState::new(300.0), None), Err(ScrollError::Division));
        assert_matches!(
            progress(ScrollState::new(300.0), Some(f64::INFINITY)),
            Err(ScrollError::Division)
        );
    }

    #[test]
    fn division_error_recovers_to_first_frame() {
        let mapper = ScrollAnimationMapper::default();

        assert_eq!(mapper.map(ScrollState::new(900.0), None), AnimationFrame::default());
        assert_eq!(mapper.map(ScrollState::new(900.0), Some(0.0)), AnimationFrame::default());
        assert!(!mapper.map(ScrollState::new(900.0), Some(f64::NAN)).progress.is_nan());
    }

    #[test]
    fn slide_boundaries_belong_to_higher_bracket() {
        assert_eq!(slide_index(0.0), 0);
        assert_eq!(slide_index(0.329999), 0);
        assert_eq!(slide_index(0.33), 1);
        assert_eq!(slide_index(0.659999), 1);
        assert_eq!(slide_index(0.66), 2);
        assert_eq!(slide_index(1.0), 2);
    }

    #[test]
    fn progress_stays_in_range_and_never_decreases() {
        let mapper = ScrollAnimationMapper::default();
        for height in [1.0, 480.0, 800.0, 1440.0] {
            let mut last = AnimationFrame::default();
            for step in 0..=400 {
                let offset = step as f64 * 25.0;
                let frame = mapper.map(ScrollState::new(offset), Some(height));

                assert!((0.0..=1.0).contains(&frame.progress), "offset {}", offset);
                assert!(frame.progress >= last.progress, "offset {}", offset);
                assert!(frame.slide_index >= last.slide_index, "offset {}", offset);
                assert!(frame.slide_index <= 2);
                last = frame;
            }
        }
    }

    #[test]
    fn mapping_is_repeatable() {
        let mapper = ScrollAnimationMapper::default();
        let state = ScrollState::new(1234.5);

        assert_eq!(mapper.map(state, Some(800.0)), mapper.map(state, Some(800.0)));
    }

    #[test]
    fn custom_scroll_length_changes_threshold() {
        let mapper = ScrollAnimationMapper { scroll_length: 1.0 };

        assert_eq!(mapper.try_progress(ScrollState::new(400.0), Some(800.0)), Ok(0.5));
    }

    #[test]
    fn transform_formats_css() {
        assert_eq!(
            AnimationFrame::at(0.0).transform(),
            "rotateY(-40.00deg) rotateX(12.00deg) scale(1.3000)"
        );
        assert_eq!(
            AnimationFrame::at(0.5).transform(),
            "rotateY(140.00deg) rotateX(1.00deg) scale(1.2250)"
        );
    }
}
