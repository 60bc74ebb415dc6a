//! A dense, owned 2D matrix addressed by [`Point`].
//!
//! [`Matrix`] backs every per-cell layer of a run: the terrain itself,
//! the weight map, the visited order and the path mask. Unlike a shared
//! view, a `Matrix` has a single owner; the search engine borrows terrain
//! and weights immutably for the duration of a run and owns its own
//! output layers.

use crate::geom::{Point, Range};

/// Row-major matrix of `T` values with bounds `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Copy> Matrix<T> {
    /// Create a `width × height` matrix filled with `value`.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32, value: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![value; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Create a matrix shaped like `bounds`, filled with `value`.
    pub fn with_bounds(bounds: Range, value: T) -> Self {
        Self::new(bounds.width(), bounds.height(), value)
    }

    /// Build a matrix from rows. Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        if rows.iter().any(|r| r.len() as i32 != width) {
            return None;
        }
        Some(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Get the value at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the value at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Fill the whole matrix with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Fill the matrix using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> T) {
        for (i, p) in self.bounds().iter().enumerate() {
            self.cells[i] = f(p);
        }
    }

    /// Apply a transformation to every cell.
    pub fn map_cells(&mut self, mut f: impl FnMut(Point, T) -> T) {
        for (i, p) in self.bounds().iter().enumerate() {
            self.cells[i] = f(p, self.cells[i]);
        }
    }

    /// Resize to `bounds` and fill with `value`, reusing the allocation when
    /// it is large enough.
    pub fn reset(&mut self, bounds: Range, value: T) {
        self.width = bounds.width().max(0);
        self.height = bounds.height().max(0);
        self.cells.clear();
        self.cells.resize(bounds.len(), value);
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, T) -> bool) -> usize {
        self.iter().filter(|&(p, v)| f(p, v)).count()
    }

    /// Iterate over `(Point, T)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks` rejects a zero chunk size; an empty matrix has no rows.
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl<T: Copy + PartialEq> Matrix<T> {
    /// Count how many cells equal `value`.
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }
}

impl<T> Matrix<T> {
    /// The bounding range of the matrix.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the matrix contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// The point stored at flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T: Copy + Default> Default for Matrix<T> {
    fn default() -> Self {
        Self::new(0, 0, T::default())
    }
}
