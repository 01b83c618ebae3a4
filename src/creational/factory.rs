//! Factory: string-keyed shape creation.
//!
//! `ShapeFactory::create` maps a kind name onto one of a closed set of shapes.
//! An unknown name is an ordinary `None`, not an error.

use crate::domain::PatternError;
use crate::sink::LineSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::debug;

/// Something that can draw itself.
pub trait Shape: Send + Sync + fmt::Debug {
    fn kind(&self) -> ShapeKind;

    /// Write the shape's one-line identification to `sink`.
    fn draw(&self, sink: &dyn LineSink) -> io::Result<()> {
        sink.write_line(&format!("{}::draw() method.", self.kind().label()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Square];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, PatternError> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatternError::UnknownShape(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create the shape named by `kind`, ignoring ASCII case.
    ///
    /// Returns `None` for names outside circle, rectangle and square.
    pub fn create(&self, kind: &str) -> Option<Box<dyn Shape>> {
        match kind.parse::<ShapeKind>() {
            Ok(kind) => Some(Self::create_kind(kind)),
            Err(_) => {
                debug!(kind, "No shape registered for kind");
                None
            }
        }
    }

    pub fn create_kind(kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}
