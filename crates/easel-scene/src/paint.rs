use serde::{Deserialize, Serialize};

/// Canonical color with channels in the 0..1 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: None,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: None,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.a = Some(alpha);
        self
    }

    /// Subtracts `amount` from every channel, clamping at zero.
    pub fn darkened(self, amount: f64) -> Self {
        Self {
            r: (self.r - amount).max(0.0),
            g: (self.g - amount).max(0.0),
            b: (self.b - amount).max(0.0),
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// A single fill or stroke layer. Only solid paints are supported;
/// gradient and image paints from scene-graph inputs are reduced to
/// solid placeholders before they reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid { color: Color },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid { color }
    }

    pub fn color(&self) -> Color {
        match self {
            Paint::Solid { color } => *color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Visual effects a node can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow {
        color: Color,
        offset: Vector,
        radius: f64,
    },
}

/// A concrete family/style pair as understood by the host's font service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// The pair every conversion is guaranteed to be able to load.
    pub fn fallback() -> Self {
        Self::new("Inter", "Regular")
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darkened_clamps_at_zero() {
        let color = Color::new(0.2, 0.5, 1.0).darkened(0.3);
        assert_eq!(color, Color::new(0.0, 0.2, 0.7));
    }

    #[test]
    fn paint_serializes_with_type_tag() {
        let paint = Paint::solid(Color::new(1.0, 0.0, 0.0));
        let json = serde_json::to_value(&paint).unwrap();
        assert_eq!(json["type"], "SOLID");
        assert_eq!(json["color"]["r"], 1.0);
    }
}
