use log::Level;

/// Hero scroll length as a multiple of the viewport height.
pub const HERO_SCROLL_LENGTH: f64 = 2.6;

/// Progress at which the hero switches to the second and third slide.
pub const SLIDE_THRESHOLDS: [f64; 2] = [0.33, 0.66];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
