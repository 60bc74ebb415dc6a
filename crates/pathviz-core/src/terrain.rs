//! Terrain cells and grid queries.
//!
//! A [`Terrain`] is a [`Matrix`] of [`CellKind`]. Besides the generic
//! matrix operations it knows how to locate the search endpoints, list
//! in-bounds neighbours, and paint source/target blobs.

use std::fmt;

use crate::error::ParseError;
use crate::geom::Point;
use crate::matrix::Matrix;

/// What occupies a terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Grass,
    Water,
    Source,
    Target,
    Bridge,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Grass,
        CellKind::Water,
        CellKind::Source,
        CellKind::Target,
        CellKind::Bridge,
    ];

    /// Whether a traversal may enter this cell.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellKind::Water
    }

    /// Source and target are the search endpoints.
    #[inline]
    pub fn is_endpoint(self) -> bool {
        matches!(self, CellKind::Source | CellKind::Target)
    }

    /// Character used by [`Terrain::parse`] and the `Display` impl.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Grass => '.',
            CellKind::Water => '~',
            CellKind::Source => 'S',
            CellKind::Target => 'T',
            CellKind::Bridge => '=',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub fn from_symbol(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.symbol() == ch)
    }
}

/// The terrain grid.
pub type Terrain = Matrix<CellKind>;

impl Matrix<CellKind> {
    /// An all-grass terrain.
    pub fn grass(width: i32, height: i32) -> Self {
        Self::new(width, height, CellKind::Grass)
    }

    /// Parse terrain from text, one line per row.
    ///
    /// `.` grass, `~` water, `S` source, `T` target, `=` bridge. Blank
    /// lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut rows = Vec::new();
        for (y, line) in text.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let kind = CellKind::from_symbol(ch).ok_or(ParseError::UnknownCell {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                row.push(kind);
            }
            if let Some(first) = rows.first().map(Vec::len) {
                if row.len() != first {
                    return Err(ParseError::Ragged {
                        line: y,
                        expected: first,
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }
        // Rows were validated above.
        Ok(Self::from_rows(rows).unwrap_or_default())
    }

    /// Locate the anchor cell of `kind`.
    ///
    /// Scans row-major. For source and target only a cell with no
    /// same-kind neighbour directly below and none directly to its left
    /// qualifies, which skips the interior of a painted blob. Other kinds
    /// return their first occurrence.
    pub fn find_isolated(&self, kind: CellKind) -> Option<Point> {
        self.iter()
            .filter(|&(_, k)| k == kind)
            .map(|(p, _)| p)
            .find(|&p| {
                !kind.is_endpoint()
                    || (self.at(p + Point::DOWN) != Some(kind)
                        && self.at(p + Point::LEFT) != Some(kind))
            })
    }

    /// In-bounds cardinal neighbours of `p`, in down, left, up, right order.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    /// Paint a single cell. Does nothing out of bounds.
    pub fn paint(&mut self, p: Point, kind: CellKind) {
        self.set(p, kind);
    }

    /// Place a `size × size` source or target blob anchored at its
    /// bottom-left cell, extending up and right.
    ///
    /// Every existing cell of the same kind is reset to grass first, so a
    /// single blob of each endpoint kind exists. Returns `false` and leaves
    /// the terrain untouched when `kind` is not an endpoint, the anchor is
    /// water, or the blob does not fit.
    pub fn place_endpoint(&mut self, kind: CellKind, anchor: Point, size: i32) -> bool {
        if !kind.is_endpoint() || size < 1 || size > self.width() || size > self.height() {
            return false;
        }
        if self.at(anchor).is_none_or(|k| !k.is_passable()) {
            return false;
        }
        let top_right = anchor + Point::new(size - 1, -(size - 1));
        if !self.contains(top_right) {
            return false;
        }
        self.map_cells(|_, k| if k == kind { CellKind::Grass } else { k });
        for dy in 0..size {
            for dx in 0..size {
                self.set(anchor + Point::new(dx, -dy), kind);
            }
        }
        true
    }
}

impl fmt::Display for Matrix<CellKind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for k in row {
                write!(f, "{}", k.symbol())?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_kind_round_trip() {
        for k in CellKind::ALL {
            let json = serde_json::to_string(&k).unwrap();
            let back: CellKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, k);
        }
    }
}
