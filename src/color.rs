use anyhow::{anyhow, Result};
use std::fmt;

/// Textual color notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`, as reported for the system accent color
    Rgb,
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse either notation, returning the color and the notation found
    pub fn parse(color: &str) -> Result<(Self, ColorFormat)> {
        let color = color.trim();

        if let Some(hex) = color.strip_prefix('#') {
            return Self::parse_hex(hex).map(|rgb| (rgb, ColorFormat::Hex));
        }

        if let Some(body) = color
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_functional(body).map(|rgb| (rgb, ColorFormat::Rgb));
        }

        Err(anyhow!(
            "Invalid color '{}', expected #rrggbb or rgb(r, g, b)",
            color
        ))
    }

    fn parse_hex(hex: &str) -> Result<Self> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '#{}'", hex);
        }
        let packed = u32::from_str_radix(hex, 16)?;

        Ok(Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    fn parse_functional(body: &str) -> Result<Self> {
        let channels = body
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u8>()
                    .map_err(|_| anyhow!("Invalid color channel '{}'", part.trim()))
            })
            .collect::<Result<Vec<u8>>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => anyhow::bail!("Expected 3 color channels, got {}", channels.len()),
        }
    }

    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            ColorFormat::Rgb => format!("rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }

    /// Scale each channel by `1 + brightness/100`, then stretch around the
    /// 128 midpoint by `(100 + contrast)/100`. Channels saturate at 0 and 255.
    pub fn adjusted(&self, brightness_percent: f64, contrast_percent: Option<f64>) -> Self {
        let brightness = 1.0 + brightness_percent / 100.0;
        let contrast = contrast_percent.map(|c| (100.0 + c) / 100.0);

        let adjust = |channel: u8| -> u8 {
            let mut value = (channel as f64 * brightness).round();
            if let Some(factor) = contrast {
                value = ((value - 128.0) * factor + 128.0).round();
            }
            value.clamp(0.0, 255.0) as u8
        };

        Self::new(adjust(self.r), adjust(self.g), adjust(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ColorFormat::Hex))
    }
}

/// Brighten or darken `color`, keeping its notation.
///
/// Fails when `color` is neither `#rrggbb` nor `rgb(r, g, b)`.
pub fn adjust_brightness(
    color: &str,
    brightness_percent: f64,
    contrast_percent: Option<f64>,
) -> Result<String> {
    let (rgb, format) = Rgb::parse(color)?;
    Ok(rgb.adjusted(brightness_percent, contrast_percent).format(format))
}
