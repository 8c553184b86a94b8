// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ColumnId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

/// Pure directional step over the (row, visible-column) space. Boundaries
/// clamp; there is no wraparound.
pub fn next_focus(
    key: NavKey,
    row: usize,
    col: usize,
    total_rows: usize,
    total_cols: usize,
) -> (usize, usize) {
    let last_row = total_rows.saturating_sub(1);
    let last_col = total_cols.saturating_sub(1);
    match key {
        NavKey::Down => ((row + 1).min(last_row), col),
        NavKey::Up => (row.saturating_sub(1), col),
        NavKey::Right => (row, (col + 1).min(last_col)),
        NavKey::Left => (row, col.saturating_sub(1)),
    }
}

/// Handle to a mounted editable cell: enough to route an edit back to the
/// store and a focus move to the right slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHandle {
    pub row: usize,
    pub column: ColumnId,
}

/// The focus routing table: `[rows][visible columns]` of optional cell
/// handles. Entries are written as the view mounts cells; the whole table is
/// cleared and resized whenever the visible column set (or the row budget)
/// changes, so a hidden column's handles are never reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<CellHandle>>,
}

impl FocusGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells.resize(rows * cols, None);
    }

    /// Registering overwrites: the latest mount wins.
    pub fn register(&mut self, row: usize, col: usize, handle: CellHandle) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        self.cells[row * self.cols + col] = Some(handle);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellHandle> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }
}

impl Default for FocusGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellHandle, FocusGrid, NavKey, next_focus};
    use crate::ColumnId;

    #[test]
    fn down_and_right_advance_by_one() {
        assert_eq!(next_focus(NavKey::Down, 3, 2, 100, 9), (4, 2));
        assert_eq!(next_focus(NavKey::Right, 3, 2, 100, 9), (3, 3));
    }

    #[test]
    fn up_from_first_row_clamps() {
        assert_eq!(next_focus(NavKey::Up, 0, 4, 100, 9), (0, 4));
    }

    #[test]
    fn left_from_first_column_clamps() {
        assert_eq!(next_focus(NavKey::Left, 7, 0, 100, 9), (7, 0));
    }

    #[test]
    fn down_from_last_row_clamps() {
        assert_eq!(next_focus(NavKey::Down, 99, 1, 100, 9), (99, 1));
    }

    #[test]
    fn right_from_last_column_clamps() {
        assert_eq!(next_focus(NavKey::Right, 5, 8, 100, 9), (5, 8));
    }

    #[test]
    fn degenerate_dimensions_stay_at_origin() {
        assert_eq!(next_focus(NavKey::Down, 0, 0, 0, 0), (0, 0));
        assert_eq!(next_focus(NavKey::Right, 0, 0, 0, 0), (0, 0));
    }

    #[test]
    fn register_then_get_round_trips() {
        let mut grid = FocusGrid::new(100, 9);
        let handle = CellHandle {
            row: 41,
            column: ColumnId::Assigned,
        };
        grid.register(41, 5, handle);
        assert_eq!(grid.get(41, 5), Some(handle));
        assert_eq!(grid.get(41, 6), None);
    }

    #[test]
    fn out_of_range_register_is_ignored() {
        let mut grid = FocusGrid::new(10, 3);
        grid.register(10, 0, CellHandle {
            row: 10,
            column: ColumnId::Url,
        });
        assert_eq!(grid.get(10, 0), None);
    }

    #[test]
    fn reset_drops_all_handles_and_resizes() {
        let mut grid = FocusGrid::new(100, 9);
        grid.register(0, 0, CellHandle {
            row: 0,
            column: ColumnId::JobRequest,
        });
        grid.reset(100, 8);
        assert_eq!(grid.cols(), 8);
        assert_eq!(grid.get(0, 0), None);
    }
}
