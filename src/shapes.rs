//! Shape model: the four supported kinds and their geometry.
//!
//! All measurements and results are `Decimal` so that sums over many shapes
//! do not drift before the report rounds them.

use crate::i18n::Language;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// π as a double-precision constant carried into decimal.
const PI: Decimal = dec!(3.14159265358979);

/// √3 as a double-precision constant carried into decimal.
const SQRT_3: Decimal = dec!(1.73205080756888);

/// Discriminant of a shape, used for grouping and naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
    EquilateralTriangle,
    Trapezoid,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::EquilateralTriangle => "equilateral_triangle",
            ShapeKind::Trapezoid => "trapezoid",
        };
        f.write_str(name)
    }
}

/// A shape with fixed measurements.
///
/// Constructors do not validate; negative measurements produce whatever the
/// formulas yield. Deserialized shapes are validated (see [`ShapeError`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ShapeSpec")]
pub enum Shape {
    Square {
        side: Decimal,
    },
    /// The single measurement is the diameter.
    Circle {
        diameter: Decimal,
    },
    EquilateralTriangle {
        side: Decimal,
    },
    /// Isosceles trapezoid: both legs have length `leg`.
    Trapezoid {
        height: Decimal,
        top: Decimal,
        bottom: Decimal,
        leg: Decimal,
    },
}

impl Shape {
    pub fn square(side: impl Into<Decimal>) -> Self {
        Shape::Square { side: side.into() }
    }

    pub fn circle(diameter: impl Into<Decimal>) -> Self {
        Shape::Circle {
            diameter: diameter.into(),
        }
    }

    pub fn equilateral_triangle(side: impl Into<Decimal>) -> Self {
        Shape::EquilateralTriangle { side: side.into() }
    }

    /// Build a trapezoid from `(height, top, bottom, leg)`.
    pub fn trapezoid(
        height: impl Into<Decimal>,
        top: impl Into<Decimal>,
        bottom: impl Into<Decimal>,
        leg: impl Into<Decimal>,
    ) -> Self {
        Shape::Trapezoid {
            height: height.into(),
            top: top.into(),
            bottom: bottom.into(),
            leg: leg.into(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::EquilateralTriangle { .. } => ShapeKind::EquilateralTriangle,
            Shape::Trapezoid { .. } => ShapeKind::Trapezoid,
        }
    }

    pub fn area(&self) -> Decimal {
        match *self {
            Shape::Square { side } => side * side,
            Shape::Circle { diameter } => {
                let radius = diameter / dec!(2);
                PI * radius * radius
            }
            Shape::EquilateralTriangle { side } => SQRT_3 / dec!(4) * side * side,
            Shape::Trapezoid {
                height, top, bottom, ..
            } => height * (top + bottom) / dec!(2),
        }
    }

    pub fn perimeter(&self) -> Decimal {
        match *self {
            Shape::Square { side } => side * dec!(4),
            Shape::Circle { diameter } => PI * diameter,
            Shape::EquilateralTriangle { side } => side * dec!(3),
            Shape::Trapezoid {
                top, bottom, leg, ..
            } => top + bottom + dec!(2) * leg,
        }
    }

    /// Localized name of this shape's kind, pluralized for `count`.
    pub fn name(&self, language: Language, count: usize) -> &'static str {
        language.shape_name(self.kind(), count)
    }

    /// Named measurements, in constructor order.
    fn measurements(&self) -> Vec<(&'static str, Decimal)> {
        match *self {
            Shape::Square { side } | Shape::EquilateralTriangle { side } => vec![("side", side)],
            Shape::Circle { diameter } => vec![("diameter", diameter)],
            Shape::Trapezoid {
                height,
                top,
                bottom,
                leg,
            } => vec![
                ("height", height),
                ("top", top),
                ("bottom", bottom),
                ("leg", leg),
            ],
        }
    }

    /// Reject shapes with negative measurements.
    ///
    /// This is opt-in: the constructors and the report accept any values.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self
            .measurements()
            .into_iter()
            .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
        {
            Some((measurement, value)) => Err(ShapeError::NegativeMeasurement {
                kind: self.kind(),
                measurement,
                value,
            }),
            None => Ok(()),
        }
    }
}

/// Errors raised when validating shape input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{kind} has negative {measurement}: {value}")]
    NegativeMeasurement {
        kind: ShapeKind,
        measurement: &'static str,
        value: Decimal,
    },
}

/// Wire form of a shape, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ShapeSpec {
    Square {
        side: Decimal,
    },
    Circle {
        diameter: Decimal,
    },
    EquilateralTriangle {
        side: Decimal,
    },
    Trapezoid {
        height: Decimal,
        top: Decimal,
        bottom: Decimal,
        leg: Decimal,
    },
}

impl TryFrom<ShapeSpec> for Shape {
    type Error = ShapeError;

    fn try_from(spec: ShapeSpec) -> Result<Self, Self::Error> {
        let shape = match spec {
            ShapeSpec::Square { side } => Shape::square(side),
            ShapeSpec::Circle { diameter } => Shape::circle(diameter),
            ShapeSpec::EquilateralTriangle { side } => Shape::equilateral_triangle(side),
            ShapeSpec::Trapezoid {
                height,
                top,
                bottom,
                leg,
            } => Shape::trapezoid(height, top, bottom, leg),
        };
        shape.validate()?;
        Ok(shape)
    }
}
