//! Per-widget options.
//!
//! Every carousel owns its own `CarouselConfig`; the web front-end fills it
//! from a JavaScript options object or from `data-*` attributes and then
//! calls [`CarouselConfig::validate`] before anything is loaded.

use crate::constants::{
    DEFAULT_ASSET_TIMEOUT_MS, DEFAULT_DUPLICATE_THRESHOLD, DEFAULT_GUTTER_FRACTION,
    DEFAULT_RADIAL_SEGMENTS, DEFAULT_TRANSITION_MS,
};
use crate::error::{CarouselError, Result};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Fraction of a full turn left empty between neighbouring segments.
    pub gutter_fraction: f64,
    /// Sets of this many images or fewer are doubled before layout.
    pub duplicate_threshold: usize,
    pub transition_duration_ms: u32,
    /// Linear RGB in 0..1.
    pub background_color: [f32; 3],
    pub background_opacity: f32,
    /// Origin marker, bounding outline and wireframe. No effect on layout.
    pub debug_overlay: bool,
    /// Budget for the whole image join before the widget gives up.
    pub asset_timeout_ms: u32,
    pub radial_segments: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gutter_fraction: DEFAULT_GUTTER_FRACTION,
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            background_color: [0.0, 0.0, 0.0],
            background_opacity: 0.0,
            debug_overlay: false,
            asset_timeout_ms: DEFAULT_ASSET_TIMEOUT_MS,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.gutter_fraction.is_finite() || !(0.0..1.0).contains(&self.gutter_fraction) {
            return Err(CarouselError::invalid(format!(
                "gutter fraction must be in [0, 1), got {}",
                self.gutter_fraction
            )));
        }
        if self.transition_duration_ms == 0 {
            return Err(CarouselError::invalid("transition duration must be > 0ms"));
        }
        if !(0.0..=1.0).contains(&self.background_opacity) {
            return Err(CarouselError::invalid(format!(
                "background opacity must be in [0, 1], got {}",
                self.background_opacity
            )));
        }
        if self.radial_segments == 0 {
            return Err(CarouselError::invalid("radial segments must be > 0"));
        }
        if self.asset_timeout_ms == 0 {
            return Err(CarouselError::invalid("asset timeout must be > 0ms"));
        }
        Ok(())
    }

    #[inline]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms as u64)
    }

    #[inline]
    pub fn gutter_radians(&self) -> f64 {
        self.gutter_fraction * std::f64::consts::TAU
    }

    /// Premultiplied clear colour for the render surface.
    pub fn clear_rgba(&self) -> [f64; 4] {
        let a = self.background_opacity as f64;
        [
            self.background_color[0] as f64 * a,
            self.background_color[1] as f64 * a,
            self.background_color[2] as f64 * a,
            a,
        ]
    }
}

/// Parse a CSS hex colour (`#rrggbb`, `rrggbb`, `#rgb`) into 0..1 components.
pub fn parse_hex_color(s: &str) -> Result<[f32; 3]> {
    let hex = s.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return Err(CarouselError::invalid(format!("bad colour {s:?}"))),
    };
    let value = u32::from_str_radix(&expanded, 16)
        .map_err(|_| CarouselError::invalid(format!("bad colour {s:?}")))?;
    Ok(rgb_from_u32(value))
}

/// Split a packed `0xRRGGBB` number into 0..1 components.
#[inline]
pub fn rgb_from_u32(value: u32) -> [f32; 3] {
    let r = ((value >> 16) & 0xff) as f32 / 255.0;
    let g = ((value >> 8) & 0xff) as f32 / 255.0;
    let b = (value & 0xff) as f32 / 255.0;
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands() {
        assert_eq!(parse_hex_color("#fff").unwrap(), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex_color("f00").unwrap(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_hex_color("#12").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
    }
}
