//! Grid module - one map's character matrix
//!
//! A [`Grid`] is a rectangular matrix of glyphs tagged with its world
//! coordinate and an optional spawn cell. Grids are validated when built and
//! immutable afterwards.
//!
//! [`TileIndex`] is the read-only collision view over a grid: a cell is solid
//! unless its glyph is the passable marker.
//! Coordinates: (y, x) where y is the row (top to bottom) and x the column
//! (left to right).

use crate::error::GridError;
use crate::types::{MapCoordinate, Position, PASSABLE_MARKER};

/// A loaded map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    name: String,
    world: MapCoordinate,
    start: Option<Position>,
    /// Row-major glyphs; every row has `columns` entries.
    rows: Vec<Vec<char>>,
    columns: usize,
}

impl Grid {
    /// Build a grid from rows of glyphs, checking that it is non-empty,
    /// rectangular, and that `start` (if any) lies inside it.
    pub fn new(
        name: impl Into<String>,
        world: MapCoordinate,
        rows: Vec<Vec<char>>,
        start: Option<Position>,
    ) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::NoRows);
        };
        let columns = first.len();

        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if cells.len() != columns {
                return Err(GridError::Ragged {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }

        let grid = Self {
            name: name.into(),
            world,
            start,
            rows,
            columns,
        };

        if let Some(start) = start {
            if !grid.contains(start) {
                return Err(GridError::StartOutOfBounds {
                    start,
                    rows: grid.row_count(),
                    columns: grid.column_count(),
                });
            }
        }

        Ok(grid)
    }

    /// Build a grid from cells that are each expected to hold one character,
    /// the shape map files use.
    pub fn from_cells(
        name: impl Into<String>,
        world: MapCoordinate,
        cells: Vec<Vec<String>>,
        start: Option<Position>,
    ) -> Result<Self, GridError> {
        let mut rows = Vec::with_capacity(cells.len());
        for (row, line) in cells.into_iter().enumerate() {
            let mut glyphs = Vec::with_capacity(line.len());
            for (column, value) in line.into_iter().enumerate() {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => glyphs.push(ch),
                    _ => return Err(GridError::BadGlyph { row, column, value }),
                }
            }
            rows.push(glyphs);
        }
        Self::new(name, world, rows, start)
    }

    /// Build a grid from text lines, one glyph per character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilewalk_core::Grid;
    /// use tilewalk_core::types::MapCoordinate;
    ///
    /// let grid = Grid::from_lines("demo", MapCoordinate::new(1, 1), &["----", "-##-"], None).unwrap();
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.column_count(), 4);
    /// ```
    pub fn from_lines(
        name: impl Into<String>,
        world: MapCoordinate,
        lines: &[&str],
        start: Option<Position>,
    ) -> Result<Self, GridError> {
        let rows = lines.iter().map(|line| line.chars().collect()).collect();
        Self::new(name, world, rows, start)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn world(&self) -> MapCoordinate {
        self.world
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// True if `pos` addresses a cell of this grid. Both bounds are checked.
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Glyph at `pos`, or `None` outside the grid.
    pub fn glyph(&self, pos: Position) -> Option<char> {
        self.index(pos).map(|(y, x)| self.rows[y][x])
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<(usize, usize)> {
        if pos.y < 0 || pos.x < 0 {
            return None;
        }
        let (y, x) = (pos.y as usize, pos.x as usize);
        let row = self.rows.get(y)?;
        if x >= row.len() {
            return None;
        }
        Some((y, x))
    }
}

/// Read-only projection of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    pub solid: bool,
    pub position: Position,
}

/// Collision view over a grid.
#[derive(Debug, Clone, Copy)]
pub struct TileIndex<'a> {
    grid: &'a Grid,
    passable: char,
}

impl<'a> TileIndex<'a> {
    /// Index using the standard passable marker.
    pub fn new(grid: &'a Grid) -> Self {
        Self::with_passable(grid, PASSABLE_MARKER)
    }

    pub fn with_passable(grid: &'a Grid, passable: char) -> Self {
        Self { grid, passable }
    }

    /// `0 <= y < rows` and `0 <= x < columns`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    /// True if the cell's glyph is not the passable marker.
    ///
    /// Positions outside the grid have no floor and count as solid.
    pub fn is_solid(&self, pos: Position) -> bool {
        self.grid.glyph(pos).map_or(true, |g| g != self.passable)
    }

    /// A player may stand on `pos`: in bounds and not solid.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.is_solid(pos)
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.grid.glyph(pos).map(|glyph| Tile {
            glyph,
            solid: glyph != self.passable,
            position: pos,
        })
    }
}
