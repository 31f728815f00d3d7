//! Web Mercator projection for the hero map stage.

use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

/// Latitude where Web Mercator turns the world into a square.
pub const MAX_LATITUDE: f64 = 85.05112878;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    /// (longitude, latitude) in degrees drawn at the middle of the canvas.
    pub center: (f64, f64),
}

impl Default for Mercator {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            scale: 120.0,
            center: (0.0, 30.0),
        }
    }
}

fn mercator_y(lat: f64) -> f64 {
    let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    (FRAC_PI_4 + phi / 2.0).tan().ln()
}

impl Mercator {
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (lon0, lat0) = self.center;
        let x = self.width / 2.0 + self.scale * (lon - lon0).to_radians();
        let y = self.height / 2.0 - self.scale * (mercator_y(lat) - mercator_y(lat0));
        (x, y)
    }

    fn polyline(&self, points: impl Iterator<Item = (f64, f64)>) -> String {
        let mut path = String::new();
        for (i, (lon, lat)) in points.enumerate() {
            let (x, y) = self.project(lon, lat);
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(path, "{}{:.1} {:.1} ", cmd, x, y);
        }
        path.trim_end().to_string()
    }

    /// SVG path data for meridians every `step_lon` degrees and parallels
    /// every `step_lat` degrees.
    pub fn graticule(&self, step_lon: u32, step_lat: u32) -> Vec<String> {
        let step_lon = step_lon.max(1) as usize;
        let step_lat = step_lat.max(1) as usize;
        let mut lines = Vec::new();

        for lon in (-180..=180).step_by(step_lon) {
            let lon = lon as f64;
            lines.push(self.polyline(
                (-80..=80).step_by(10).map(move |lat| (lon, lat as f64)),
            ));
        }
        for lat in (-75..=75).step_by(step_lat) {
            let lat = lat as f64;
            lines.push(self.polyline(
                (-180..=180).step_by(10).map(move |lon| (lon as f64, lat)),
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn center_lands_mid_canvas() {
        let map = Mercator::default();
        let (x, y) = map.project(0.0, 30.0);

        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let map = Mercator::default();
        let (x_bkk, y_bkk) = map.project(100.5, 13.75);
        let (x_lon, y_lon) = map.project(-0.13, 51.5);

        assert!(x_bkk > x_lon);
        assert!(y_bkk > y_lon);
    }

    #[test]
    fn poles_stay_finite() {
        let map = Mercator::default();
        let (_, north) = map.project(0.0, 90.0);
        let (_, south) = map.project(0.0, -90.0);

        assert!(north.is_finite());
        assert!(south.is_finite());
        assert_eq!(north, map.project(0.0, MAX_LATITUDE).1);
    }

    #[test]
    fn graticule_has_meridians_and_parallels() {
        let lines = Mercator::default().graticule(30, 15);

        // 13 meridians from -180 to 180, 11 parallels from -75 to 75
        assert_eq!(lines.len(), 13 + 11);
        assert!(lines.iter().all(|line| line.starts_with('M')));
        assert!(!lines[0].ends_with(' '));
    }
}
