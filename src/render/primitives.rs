use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS-like string (`#rrggbb`, `rgb(...)` or `rgba(...)`) so
/// chart options can be written by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Same color with the alpha channel replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn parse(input: &str) -> ChartResult<Self> {
        let text = input.trim().to_ascii_lowercase();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ChartError::InvalidColor(input.to_owned()));
        }
        if let Some(args) = text
            .strip_prefix("rgba(")
            .or_else(|| text.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args).ok_or_else(|| ChartError::InvalidColor(input.to_owned()));
        }
        match text.as_str() {
            "transparent" => Ok(Self::TRANSPARENT),
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::rgb(0.0, 0.0, 0.0)),
            _ => Err(ChartError::InvalidColor(input.to_owned())),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.red),
                channel(self.green),
                channel(self.blue)
            )
        } else {
            format!(
                "rgba({},{},{},{})",
                channel(self.red),
                channel(self.green),
                channel(self.blue),
                self.alpha
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_css()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some(Color::from_rgb8(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Some(Color::from_rgb8(
            r1 * 16 + r2,
            g1 * 16 + g2,
            b1 * 16 + b2,
        )),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Color> {
    let parts: Vec<f64> = args
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let channel = |value: f64| (0.0..=255.0).contains(&value).then_some(value / 255.0);
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        [r, g, b, a] if (0.0..=1.0).contains(a) => {
            Some(Color::rgba(channel(*r)?, channel(*g)?, channel(*b)?, *a))
        }
        _ => None,
    }
}

/// Dash pattern applied to polygon outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Paint mode for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushType {
    Fill,
    #[default]
    Stroke,
    Both,
}

impl BrushType {
    #[must_use]
    pub fn for_area_fill(area_fill_enabled: bool) -> Self {
        if area_fill_enabled {
            Self::Both
        } else {
            Self::Stroke
        }
    }

    #[must_use]
    pub fn fills(self) -> bool {
        matches!(self, Self::Fill | Self::Both)
    }

    #[must_use]
    pub fn strokes(self) -> bool {
        matches!(self, Self::Stroke | Self::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse("#fff").expect("short"), Color::WHITE);
        assert_eq!(
            Color::parse("#ff7f50").expect("long"),
            Color::from_rgb8(255, 127, 80)
        );
    }

    #[test]
    fn parses_rgba_and_rejects_garbage() {
        let color = Color::parse("rgba(0, 0, 255, 0.5)").expect("rgba");
        assert_eq!(color, Color::rgba(0.0, 0.0, 1.0, 0.5));
        assert!(Color::parse("rgb(300,0,0)").is_err());
        assert!(Color::parse("not-a-color").is_err());
    }

    #[test]
    fn area_fill_switches_brush_to_fill_and_stroke() {
        let outline = BrushType::for_area_fill(false);
        assert!(outline.strokes() && !outline.fills());
        let area = BrushType::for_area_fill(true);
        assert!(area.strokes() && area.fills());
        assert!(!BrushType::Fill.strokes());
    }
}
