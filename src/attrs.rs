use cyl_core::{parse_hex_color, rgb_from_u32, CarouselConfig};

/// An option value as it arrives from the page, before interpretation.
#[derive(Clone, Debug, PartialEq)]
pub enum RawOption {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// `data-*` attribute names (without the prefix) recognised on containers.
pub const DATA_OPTION_KEYS: &[&str] = &[
    "gutter",
    "duplicate-threshold",
    "duration",
    "background",
    "background-opacity",
    "debug",
    "asset-timeout",
];

/// Keys recognised on the options object passed to the JS constructor.
pub const JS_OPTION_KEYS: &[&str] = &[
    "gutterFraction",
    "duplicateThreshold",
    "transitionDurationMs",
    "backgroundColor",
    "backgroundOpacity",
    "debug",
    "debugOverlay",
    "assetTimeoutMs",
];

#[inline]
fn as_f64(value: &RawOption) -> Option<f64> {
    match value {
        RawOption::Number(n) if n.is_finite() => Some(*n),
        RawOption::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

#[inline]
fn as_u32(value: &RawOption) -> Option<u32> {
    as_f64(value)
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n.round() as u32)
}

/// Attribute presence counts as true, so `data-debug` alone enables it.
#[inline]
fn as_bool(value: &RawOption) -> Option<bool> {
    match value {
        RawOption::Bool(b) => Some(*b),
        RawOption::Number(n) => Some(*n != 0.0),
        RawOption::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
    }
}

#[inline]
fn as_color(value: &RawOption) -> Option<[f32; 3]> {
    match value {
        RawOption::Text(s) => parse_hex_color(s).ok(),
        RawOption::Number(n) if n.is_finite() && *n >= 0.0 => Some(rgb_from_u32(*n as u32)),
        _ => None,
    }
}

/// Apply one named option to `config`.
///
/// Returns `false` and leaves `config` untouched when the key is unknown or
/// the value cannot be interpreted.
pub fn apply_option(config: &mut CarouselConfig, key: &str, value: &RawOption) -> bool {
    let applied = match key {
        "gutterFraction" | "gutter" => as_f64(value).map(|v| config.gutter_fraction = v),
        "duplicateThreshold" | "duplicate-threshold" => {
            as_u32(value).map(|v| config.duplicate_threshold = v as usize)
        }
        "transitionDurationMs" | "duration" => {
            as_u32(value).map(|v| config.transition_duration_ms = v)
        }
        "backgroundColor" | "background" => as_color(value).map(|v| config.background_color = v),
        "backgroundOpacity" | "background-opacity" => {
            as_f64(value).map(|v| config.background_opacity = v as f32)
        }
        "debug" | "debugOverlay" => as_bool(value).map(|v| config.debug_overlay = v),
        "assetTimeoutMs" | "asset-timeout" => as_u32(value).map(|v| config.asset_timeout_ms = v),
        _ => None,
    };
    if applied.is_none() {
        log::warn!("[cyl] ignoring option {key}={value:?}");
        return false;
    }
    true
}

/// Build a config from `(key, value)` pairs on top of the defaults.
pub fn config_from_pairs<'a>(
    pairs: impl IntoIterator<Item = (&'a str, RawOption)>,
) -> CarouselConfig {
    let mut config = CarouselConfig::default();
    for (key, value) in pairs {
        apply_option(&mut config, key, &value);
    }
    config
}
