/// Keyboard focus within the tile grid. Independent of the selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCursor {
    pub index: usize,
    pub scroll_row: usize,
}

impl GridCursor {
    pub fn new() -> Self {
        Self {
            index: 0,
            scroll_row: 0,
        }
    }

    pub fn move_left(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn move_right(&mut self, total: usize) {
        if self.index + 1 < total {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self, columns: usize) {
        let columns = columns.max(1);
        if self.index >= columns {
            self.index -= columns;
        }
    }

    /// Moves one row down. From a column past the end of a short last row,
    /// lands on the last item instead.
    pub fn move_down(&mut self, columns: usize, total: usize) {
        let columns = columns.max(1);
        if total == 0 {
            return;
        }
        if self.index + columns < total {
            self.index += columns;
        } else if self.index / columns < (total - 1) / columns {
            self.index = total - 1;
        }
    }

    pub fn row(&self, columns: usize) -> usize {
        self.index / columns.max(1)
    }

    /// Keeps the cursor's row inside the visible window of rows, without
    /// scrolling past the last row of `total` items.
    pub fn update_scroll(&mut self, columns: usize, visible_rows: usize, total: usize) {
        let row = self.row(columns);
        let visible_rows = visible_rows.max(1);
        let total_rows = total.div_ceil(columns.max(1));
        self.scroll_row = self.scroll_row.min(total_rows.saturating_sub(visible_rows));

        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

impl Default for GridCursor {
    fn default() -> Self {
        Self::new()
    }
}
