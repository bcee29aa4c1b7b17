//! Grid geometry and value lookup.
//!
//! A puzzle is a `width x height` grid of intersection points. Horizontal and
//! vertical edges join grid-adjacent points, and each unit cell bounded by
//! four edges is a space. All element data is laid out from the top-left
//! corner, left to right and top to bottom; within each row grouping,
//! `width - 1` horizontal edges precede `width` vertical edges.

use std::fmt;

use crate::error::{Error, Result};

/// Value of a grid intersection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointValue {
    Open,
    Blocked,
    Dot,
    Start,
    End,
}

impl PointValue {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'o' => Some(PointValue::Open),
            'x' => Some(PointValue::Blocked),
            '.' => Some(PointValue::Dot),
            's' => Some(PointValue::Start),
            'e' => Some(PointValue::End),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PointValue::Open => 'o',
            PointValue::Blocked => 'x',
            PointValue::Dot => '.',
            PointValue::Start => 's',
            PointValue::End => 'e',
        }
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Value of an edge between two grid-adjacent points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeValue {
    Open,
    Blocked,
    Dot,
}

impl EdgeValue {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'o' => Some(EdgeValue::Open),
            'x' => Some(EdgeValue::Blocked),
            '.' => Some(EdgeValue::Dot),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            EdgeValue::Open => 'o',
            EdgeValue::Blocked => 'x',
            EdgeValue::Dot => '.',
        }
    }
}

impl fmt::Display for EdgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Value of a space enclosed by four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceValue {
    Blank,
    White,
    Black,
}

impl SpaceValue {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '_' => Some(SpaceValue::Blank),
            'w' => Some(SpaceValue::White),
            'b' => Some(SpaceValue::Black),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            SpaceValue::Blank => '_',
            SpaceValue::White => 'w',
            SpaceValue::Black => 'b',
        }
    }
}

impl fmt::Display for SpaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable line puzzle: grid dimensions plus the point, edge, and space
/// value arrays.
///
/// Row/column and index arguments on the accessors are caller preconditions;
/// they are `debug_assert!`ed rather than checked in release builds.
#[derive(Debug, Clone)]
pub struct Puzzle {
    width: usize,
    height: usize,
    points: Vec<PointValue>,
    edges: Vec<EdgeValue>,
    spaces: Vec<SpaceValue>,
}

impl Puzzle {
    /// Number of intersection points in a `width x height` puzzle.
    pub fn num_points_for(width: usize, height: usize) -> usize {
        width * height
    }

    /// Number of edges in a `width x height` puzzle: horizontal plus
    /// vertical.
    pub fn num_edges_for(width: usize, height: usize) -> usize {
        (width - 1) * height + width * (height - 1)
    }

    /// Number of spaces in a `width x height` puzzle.
    pub fn num_spaces_for(width: usize, height: usize) -> usize {
        (width - 1) * (height - 1)
    }

    /// Builds a puzzle from its value arrays, checking dimensions and buffer
    /// sizes.
    pub fn new(
        width: usize,
        height: usize,
        points: Vec<PointValue>,
        edges: Vec<EdgeValue>,
        spaces: Vec<SpaceValue>,
    ) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::BadDimensions { width, height });
        }
        if points.len() != Self::num_points_for(width, height) {
            return Err(Error::BufferSize {
                kind: "point",
                expected: Self::num_points_for(width, height),
                got: points.len(),
            });
        }
        if edges.len() != Self::num_edges_for(width, height) {
            return Err(Error::BufferSize {
                kind: "edge",
                expected: Self::num_edges_for(width, height),
                got: edges.len(),
            });
        }
        if spaces.len() != Self::num_spaces_for(width, height) {
            return Err(Error::BufferSize {
                kind: "space",
                expected: Self::num_spaces_for(width, height),
                got: spaces.len(),
            });
        }
        Ok(Self {
            width,
            height,
            points,
            edges,
            spaces,
        })
    }

    /// Number of points per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of points per column.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_spaces(&self) -> usize {
        self.spaces.len()
    }

    /// Index of the point at `(row, col)`.
    pub fn point_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    pub fn point_row(&self, index: usize) -> usize {
        debug_assert!(index < self.num_points());
        index / self.width
    }

    pub fn point_col(&self, index: usize) -> usize {
        debug_assert!(index < self.num_points());
        index % self.width
    }

    /// Index of the edge between two grid-adjacent points.
    ///
    /// The first point must be above or to the left of the second. Each row
    /// grouping holds `width - 1` horizontal edges followed by `width`
    /// vertical edges.
    pub fn edge_index(&self, row1: usize, col1: usize, row2: usize, col2: usize) -> usize {
        debug_assert!(row1 < self.height && col1 < self.width);
        debug_assert!(row2 < self.height && col2 < self.width);
        debug_assert!(
            (row1 == row2 && col1 + 1 == col2) || (col1 == col2 && row1 + 1 == row2),
            "edge endpoints must be grid-adjacent with the first above or left"
        );
        let mut index = row1 * (self.width * 2 - 1) + col1;
        if col1 == col2 {
            index += self.width - 1;
        }
        index
    }

    /// Index of the space whose upper-left point is `(row, col)`.
    pub fn space_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height - 1 && col < self.width - 1);
        row * (self.width - 1) + col
    }

    pub fn space_row(&self, index: usize) -> usize {
        debug_assert!(index < self.num_spaces());
        index / (self.width - 1)
    }

    pub fn space_col(&self, index: usize) -> usize {
        debug_assert!(index < self.num_spaces());
        index % (self.width - 1)
    }

    pub fn point(&self, row: usize, col: usize) -> PointValue {
        self.points[self.point_index(row, col)]
    }

    pub fn point_at(&self, index: usize) -> PointValue {
        self.points[index]
    }

    pub fn edge(&self, row1: usize, col1: usize, row2: usize, col2: usize) -> EdgeValue {
        self.edges[self.edge_index(row1, col1, row2, col2)]
    }

    pub fn edge_at(&self, index: usize) -> EdgeValue {
        self.edges[index]
    }

    pub fn space(&self, row: usize, col: usize) -> SpaceValue {
        self.spaces[self.space_index(row, col)]
    }

    pub fn space_at(&self, index: usize) -> SpaceValue {
        self.spaces[index]
    }

    /// Total number of dot waypoints, points and edges together.
    pub fn num_dots(&self) -> usize {
        let point_dots = self
            .points
            .iter()
            .filter(|v| **v == PointValue::Dot)
            .count();
        let edge_dots = self.edges.iter().filter(|v| **v == EdgeValue::Dot).count();
        point_dots + edge_dots
    }

    /// Index of the first start point in row-major order, if any.
    pub fn first_start_point(&self) -> Option<usize> {
        self.points.iter().position(|v| *v == PointValue::Start)
    }
}
