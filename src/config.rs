use plotters::style::colors::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
use plotters::style::RGBColor;
use serde::Deserialize;

use crate::bands::{BandStyle, Degree};
use crate::bounds::Scale;
use crate::error::{Error, Result};

/// Plot settings as they appear in a benchmark's JSON description, e.g.
/// `{"scale": "log", "gap": 1, "color": "tab:red", "alpha": 0.2, "degree": 2}`.
///
/// An unknown `scale` or a `degree` outside 1 to 3 fails while parsing and is
/// reported as [`Error::Config`], not [`Error::InvalidArgument`]. The color and
/// alpha are only checked by [`PlotConfig::band_style`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub scale: Scale,
    pub gap: f64,
    pub color: String,
    pub alpha: f64,
    pub degree: Degree,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            scale: Scale::Linear,
            gap: 0.,
            color: "k".to_string(),
            alpha: 0.1,
            degree: Degree::Three,
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn band_style(&self) -> Result<BandStyle> {
        BandStyle::new(parse_color(&self.color)?, self.alpha)
    }
}

/// Parse a color specifier: a single letter code, a color name, a `tab:`
/// palette name or `#rrggbb`.
pub fn parse_color(spec: &str) -> Result<RGBColor> {
    let color = match spec.trim().to_ascii_lowercase().as_str() {
        "k" | "black" => BLACK,
        "w" | "white" => WHITE,
        "r" | "red" => RED,
        "g" | "green" => GREEN,
        "b" | "blue" => BLUE,
        "c" | "cyan" => CYAN,
        "m" | "magenta" => MAGENTA,
        "y" | "yellow" => YELLOW,
        "gray" | "grey" => RGBColor(128, 128, 128),
        "tab:blue" => RGBColor(31, 119, 180),
        "tab:orange" => RGBColor(255, 127, 14),
        "tab:green" => RGBColor(44, 160, 44),
        "tab:red" => RGBColor(214, 39, 40),
        "tab:purple" => RGBColor(148, 103, 189),
        "tab:gray" | "tab:grey" => RGBColor(127, 127, 127),
        hex if hex.starts_with('#') => parse_hex(hex).ok_or_else(|| unknown_color(spec))?,
        _ => return Err(unknown_color(spec)),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn unknown_color(spec: &str) -> Error {
    Error::InvalidArgument(format!("unknown color specifier '{spec}'"))
}
