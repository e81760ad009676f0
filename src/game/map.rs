//! Grid locations and playable map bounds.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Rows reserved at the top of the screen for the status header.
pub const HEADER_HEIGHT: u16 = 1;

/// A cell on the playable grid.
///
/// `(0, 0)` is the top-left playable cell, directly below the header row.
/// Coordinates are signed: the avatar is steered freely and may leave the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if both locations are the same cell.
    #[must_use]
    pub const fn is_overlapping(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Check if `other` lies in the 3x3 box centred on `self`.
    ///
    /// This is the melee range: Chebyshev distance of at most one.
    /// The relation is symmetric and every location is nearby itself.
    #[must_use]
    #[inline]
    pub const fn is_nearby(self, other: Self) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Return this location shifted by the given delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// The playable grid, excluding the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Width of the grid in cells.
    width: u16,
    /// Height of the grid in cells (window height minus the header).
    height: u16,
}

impl Bounds {
    /// Build the playable grid for a window of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimensions`] if the window has no columns
    /// or no rows left below the header.
    pub fn from_window(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height <= HEADER_HEIGHT {
            return Err(GameError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height: height - HEADER_HEIGHT,
        })
    }

    /// Width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The bottom-right playable cell.
    #[must_use]
    pub fn far_corner(&self) -> Location {
        Location::new(i32::from(self.width) - 1, i32::from(self.height) - 1)
    }

    /// Check if a location is on the grid.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        (0..i32::from(self.width)).contains(&location.x)
            && (0..i32::from(self.height)).contains(&location.y)
    }

    /// Convert a location to a row-major cell index.
    #[must_use]
    pub fn index_of(&self, location: Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        let x = usize::try_from(location.x).ok()?;
        let y = usize::try_from(location.y).ok()?;
        Some(y * usize::from(self.width) + x)
    }

    /// Number of cells on the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping() {
        assert!(Location::new(3, 4).is_overlapping(Location::new(3, 4)));
        assert!(!Location::new(3, 4).is_overlapping(Location::new(4, 3)));
    }

    #[test]
    fn test_nearby_box() {
        let centre = Location::new(5, 5);
        for dx in -1..=1 {
            for dy in -1..=1 {
                assert!(centre.is_nearby(centre.offset(dx, dy)));
            }
        }
        assert!(!centre.is_nearby(Location::new(7, 5)));
        assert!(!centre.is_nearby(Location::new(5, 3)));
        assert!(!centre.is_nearby(Location::new(3, 3)));
    }

    #[test]
    fn test_nearby_extreme_coordinates() {
        let low = Location::new(i32::MIN, i32::MIN);
        let high = Location::new(i32::MAX, i32::MAX);
        assert!(!low.is_nearby(high));
        assert!(high.is_nearby(high.offset(-1, 0)));
    }

    #[test]
    fn test_bounds_excludes_header() {
        let bounds = Bounds::from_window(10, 5).unwrap();
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 4);
        assert_eq!(bounds.far_corner(), Location::new(9, 3));
        assert_eq!(bounds.cell_count(), 40);
    }

    #[test]
    fn test_bounds_rejects_degenerate_windows() {
        assert!(Bounds::from_window(0, 5).is_err());
        assert!(Bounds::from_window(10, 1).is_err());
        assert!(Bounds::from_window(10, 0).is_err());
        assert!(Bounds::from_window(1, 2).is_ok());
    }

    #[test]
    fn test_bounds_contains_and_index() {
        let bounds = Bounds::from_window(10, 5).unwrap();
        assert!(bounds.contains(Location::new(0, 0)));
        assert!(bounds.contains(Location::new(9, 3)));
        assert!(!bounds.contains(Location::new(10, 0)));
        assert!(!bounds.contains(Location::new(0, 4)));
        assert!(!bounds.contains(Location::new(-1, 0)));

        assert_eq!(bounds.index_of(Location::new(0, 0)), Some(0));
        assert_eq!(bounds.index_of(Location::new(3, 2)), Some(23));
        assert_eq!(bounds.index_of(Location::new(-1, 2)), None);
    }
}
