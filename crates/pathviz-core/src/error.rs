use std::fmt;

use crate::geom::Point;

/// Rejected run or generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Step sizes must be at least 1.
    InvalidStepSize(i32),
    /// A per-cell layer does not match the terrain dimensions.
    DimensionMismatch { expected: Point, found: Point },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepSize(k) => write!(f, "invalid step size {k}: must be at least 1"),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}x{}, found {}x{}",
                expected.x, expected.y, found.x, found.y
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when parsing terrain from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line's width differs from the first line's.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the terrain alphabet was found.
    UnknownCell { ch: char, pos: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "terrain: line {line} has {found} cells, expected {expected}"
            ),
            Self::UnknownCell { ch, pos } => write!(
                f,
                "terrain contains unknown cell \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
        }
    }
}

impl std::error::Error for ParseError {}
