use ratatui::layout::Rect;

pub const TILE_WIDTH: u16 = 8;
pub const TILE_HEIGHT: u16 = 3;
pub const H_GAP: u16 = 1;
pub const V_GAP: u16 = 0;

/// Places fixed-size tiles left to right, wrapping when the next tile would
/// not fit the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLayout {
    pub tile_width: u16,
    pub tile_height: u16,
    pub h_gap: u16,
    pub v_gap: u16,
    pub max_columns: Option<usize>,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FlowLayout {
    pub fn new(max_columns: Option<usize>) -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            h_gap: H_GAP,
            v_gap: V_GAP,
            max_columns,
        }
    }

    /// Tiles per row for the given width; always at least one.
    pub fn columns(&self, width: u16) -> usize {
        let stride = (self.tile_width + self.h_gap) as usize;
        let fitting = (width as usize + self.h_gap as usize) / stride;
        let fitting = fitting.max(1);
        match self.max_columns {
            Some(max) => fitting.min(max.max(1)),
            None => fitting,
        }
    }

    /// Whole rows that fit in the given height.
    pub fn visible_rows(&self, height: u16) -> usize {
        let stride = (self.tile_height + self.v_gap) as usize;
        (height as usize + self.v_gap as usize) / stride
    }

    /// Lays out `count` tiles inside `area`, starting at row `first_row`.
    /// Tiles that do not fit entirely inside `area` are left out.
    pub fn arrange(&self, area: Rect, count: usize, first_row: usize) -> GridLayout {
        let columns = self.columns(area.width);
        let visible_rows = self.visible_rows(area.height);

        let used_width = columns as u16 * self.tile_width + (columns as u16 - 1) * self.h_gap;
        let offset_x = area.width.saturating_sub(used_width) / 2;

        let mut tiles = Vec::new();
        for index in 0..count {
            let row = index / columns;
            let col = index % columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }

            let x = area.x + offset_x + col as u16 * (self.tile_width + self.h_gap);
            let y = area.y + (row - first_row) as u16 * (self.tile_height + self.v_gap);
            let rect = Rect::new(x, y, self.tile_width, self.tile_height);

            if rect.right() <= area.right() && rect.bottom() <= area.bottom() {
                tiles.push((index, rect));
            }
        }

        GridLayout { columns, tiles }
    }
}

/// Result of one layout pass: screen rectangles of the visible tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub tiles: Vec<(usize, Rect)>,
}

impl GridLayout {
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.tiles
            .iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(index, _)| *index)
    }

    #[cfg(test)]
    pub fn tile_area(&self, index: usize) -> Option<Rect> {
        self.tiles
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, rect)| *rect)
    }
}

pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
