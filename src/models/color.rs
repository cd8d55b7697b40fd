use serde::Serialize;

use crate::error::AppError;

pub const MAX_HUE: u16 = 65535;
pub const MAX_SATURATION: u8 = 254;
pub const DEFAULT_BRIGHTNESS: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from untyped channel values, rejecting anything outside 0-255.
    pub fn from_channels(red: i64, green: i64, blue: i64) -> Result<Self, AppError> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| {
                AppError::InvalidInput(format!("{} must be between 0 and 255, got {}", name, value))
            })
        };
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }
}

/// Color in the bridge's native encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HueColor {
    pub hue: u16,
    pub saturation: u8,
    pub brightness: u8,
}

impl From<RgbColor> for HueColor {
    fn from(rgb: RgbColor) -> Self {
        let (hue, saturation) = rgb_to_hue_sat(rgb.red, rgb.green, rgb.blue);
        Self {
            hue,
            saturation,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

/// Convert an RGB triple to the bridge's hue (0-65535) and saturation (0-254).
///
/// Uses the HSV hue and saturation of the color; the value component is
/// dropped since the bridge takes brightness separately. Both outputs are
/// truncated, not rounded.
pub fn rgb_to_hue_sat(red: u8, green: u8, blue: u8) -> (u16, u8) {
    let r = red as f64 / 255.0;
    let g = green as f64 / 255.0;
    let b = blue as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let degrees = if delta == 0.0 {
        0.0
    } else if max == r {
        (60.0 * ((g - b) / delta + 6.0)) % 360.0
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = (degrees / 360.0 * MAX_HUE as f64).clamp(0.0, MAX_HUE as f64) as u16;
    let sat = (saturation * MAX_SATURATION as f64).clamp(0.0, MAX_SATURATION as f64) as u8;
    (hue, sat)
}
