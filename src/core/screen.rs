//! The Screen Model: a fixed-size grid of rows, its cursor, scroll region,
//! and the handful of per-screen mode bits (auto-wrap, origin mode,
//! reverse-wraparound, insert mode) that directly shape how grid primitives
//! behave. Component C of the terminal core.

use crate::core::attrs::TextAttributes;
use crate::core::cell::Cell;
use crate::core::charset::CharsetState;
use crate::core::error::GridError;
use crate::core::row::Row;
use crate::core::scrollback::Scrollback;
use unicode_width::UnicodeWidthChar;

/// Cursor position plus the overflow latch.
///
/// The latch is set when a printable glyph would land past the last column
/// with wraparound enabled; it defers the wrap until the *next* write so
/// that a line exactly filling the screen width does not immediately scroll
/// an empty row into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub row: usize,
    pub col: usize,
    pub overflow: bool,
}

/// A value snapshot captured by DECSC / `CSI s`, restored by DECRC / `CSI u`.
#[derive(Debug, Clone)]
pub struct SavedCursor {
    pub cursor: CursorState,
    pub attrs: TextAttributes,
    pub charset: CharsetState,
    pub origin_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    BlinkBlock,
    SteadyBlock,
    BlinkUnderline,
    SteadyUnderline,
    BlinkBar,
    SteadyBar,
}

impl Default for CursorShape {
    fn default() -> Self { CursorShape::BlinkBlock }
}

#[derive(Debug, Clone)]
pub struct Screen {
    width: usize,
    height: usize,
    rows: Vec<Row>,
    pub cursor: CursorState,
    /// Inclusive 0-based scroll-region bounds; `None` means "unset" (covers
    /// the whole screen), in which case newline-triggered scrolling at the
    /// bottom feeds rows into scrollback instead of discarding them.
    scroll_region: Option<(usize, usize)>,
    pub attrs: TextAttributes,
    saved_cursor: Option<SavedCursor>,
    tab_stops: Vec<bool>,
    pub charset: CharsetState,
    pub auto_wrap: bool,
    pub origin_mode: bool,
    pub reverse_wraparound: bool,
    pub insert_mode: bool,
    pub cursor_visible: bool,
    pub cursor_shape: CursorShape,
    hyperlinks: Vec<(String, String)>,
    pending_scrollback: Vec<Row>,
}

const DEFAULT_TAB_WIDTH: usize = 8;

impl Screen {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mut s = Self {
            width,
            height,
            rows: (0..height).map(|_| Row::blank(width, TextAttributes::default())).collect(),
            cursor: CursorState::default(),
            scroll_region: None,
            attrs: TextAttributes::default(),
            saved_cursor: None,
            tab_stops: Vec::new(),
            charset: CharsetState::default(),
            auto_wrap: true,
            origin_mode: false,
            reverse_wraparound: false,
            insert_mode: false,
            cursor_visible: true,
            cursor_shape: CursorShape::default(),
            hyperlinks: Vec::new(),
            pending_scrollback: Vec::new(),
        };
        s.reset_default_tab_stops();
        s
    }

    #[must_use]
    pub fn width(&self) -> usize { self.width }

    #[must_use]
    pub fn height(&self) -> usize { self.height }

    #[must_use]
    pub fn rows(&self) -> &[Row] { &self.rows }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&Row> { self.rows.get(idx) }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Fallible accessor for callers reaching into the grid from outside
    /// the normal `feed` path (e.g. a renderer indexing by a user-supplied
    /// coordinate). The parser/dispatcher internals never call this - they
    /// use the panic-free, clamping methods above.
    pub fn try_cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.cell(row, col).ok_or(GridError::OutOfBounds { row, col })
    }

    pub fn try_row(&self, row: usize) -> Result<&Row, GridError> {
        self.row(row).ok_or(GridError::OutOfBounds { row, col: 0 })
    }

    fn effective_scroll_bounds(&self) -> (usize, usize) {
        self.scroll_region.unwrap_or((0, self.height.saturating_sub(1)))
    }

    // ---- hyperlinks ----------------------------------------------------

    /// Intern a hyperlink `(id, uri)` pair and return the index to store in
    /// [`TextAttributes::hyperlink_id`]. A blank id is stored as-is (OSC 8
    /// groups with no explicit `id=` still get their own span).
    pub fn intern_hyperlink(&mut self, id: &str, uri: &str) -> u32 {
        self.hyperlinks.push((id.to_string(), uri.to_string()));
        (self.hyperlinks.len() - 1) as u32
    }

    #[must_use]
    pub fn hyperlink(&self, idx: u32) -> Option<(&str, &str)> {
        self.hyperlinks.get(idx as usize).map(|(id, uri)| (id.as_str(), uri.as_str()))
    }

    // ---- printing --------------------------------------------------------

    /// Print one already-charset-translated glyph at the cursor.
    pub fn print_char(&mut self, c: char) {
        let w = UnicodeWidthChar::width(c).unwrap_or(1);

        if w == 0 {
            self.append_combining(c);
            return;
        }

        if self.cursor.overflow {
            if self.auto_wrap {
                self.commit_overflow_wrap();
            } else {
                self.cursor.col = self.width.saturating_sub(1);
                self.cursor.overflow = false;
            }
        }

        if self.insert_mode {
            self.shift_right_from_cursor(w);
        }

        self.write_glyph_at_cursor(c, w);

        self.cursor.col += w;
        if self.cursor.col >= self.width {
            self.cursor.col = self.width.saturating_sub(1);
            self.cursor.overflow = self.auto_wrap;
        }
    }

    pub fn print_str(&mut self, s: &str) {
        for c in s.chars() { self.print_char(c); }
    }

    fn append_combining(&mut self, mark: char) {
        let (row, col) = (self.cursor.row, self.cursor.col.saturating_sub(1));
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(cell) = r.get_mut(col) { cell.push_combining(mark); }
        }
    }

    fn write_glyph_at_cursor(&mut self, c: char, width: usize) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) {
            r.blank_orphaned_wide_cell_at(col, attrs);
            if width == 2 && col + 1 < r.len() {
                r.blank_orphaned_wide_cell_at(col + 1, attrs);
                r.set(col, Cell::new(c, 2, attrs));
                r.set(col + 1, Cell::spacer(attrs));
            } else {
                r.set(col, Cell::new(c, 1, attrs));
            }
        }
    }

    fn shift_right_from_cursor(&mut self, by: usize) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) {
            let len = r.len();
            r.blank_orphaned_wide_cell_at(col, attrs);
            let mut i = len;
            while i > col + by {
                let src = r.get(i - by - 1).cloned().unwrap_or_else(|| Cell::blank(attrs));
                r.set(i - 1, src);
                i -= 1;
            }
            for c in col..(col + by).min(len) {
                r.set(c, Cell::blank(attrs));
            }
        }
    }

    fn commit_overflow_wrap(&mut self) {
        let r = self.cursor.row;
        if let Some(row) = self.rows.get_mut(r) { row.line_overflow = true; }
        self.cursor.overflow = false;
        self.newline();
    }

    // ---- cursor motion -----------------------------------------------

    pub fn set_cursor_position(&mut self, row: usize, col: usize) {
        self.cursor.overflow = false;
        let (top, bottom) = self.effective_scroll_bounds();
        if self.origin_mode {
            let target_row = (top + row).min(bottom);
            self.cursor.row = target_row;
        } else {
            self.cursor.row = row.min(self.height.saturating_sub(1));
        }
        self.cursor.col = col.min(self.width.saturating_sub(1));
    }

    /// `CSI G` (CHA): set the column only. Column addressing is always
    /// absolute - origin mode only affects row addressing.
    pub fn set_cursor_column(&mut self, col: usize) {
        self.cursor.overflow = false;
        self.cursor.col = col.min(self.width.saturating_sub(1));
    }

    /// `CSI d` (VPA): set the row only, honoring origin mode the same way
    /// [`Self::set_cursor_position`]'s row component does.
    pub fn set_cursor_row(&mut self, row: usize) {
        self.cursor.overflow = false;
        let (top, bottom) = self.effective_scroll_bounds();
        if self.origin_mode {
            self.cursor.row = (top + row).min(bottom);
        } else {
            self.cursor.row = row.min(self.height.saturating_sub(1));
        }
    }

    pub fn cursor_up(&mut self, n: usize) {
        self.cursor.overflow = false;
        let (top, _bottom) = self.effective_scroll_bounds();
        let floor = if self.cursor.row >= top { top } else { 0 };
        self.cursor.row = self.cursor.row.saturating_sub(n).max(floor);
    }

    pub fn cursor_down(&mut self, n: usize) {
        self.cursor.overflow = false;
        let (_top, bottom) = self.effective_scroll_bounds();
        let ceiling = if self.cursor.row <= bottom { bottom } else { self.height.saturating_sub(1) };
        self.cursor.row = (self.cursor.row + n).min(ceiling);
    }

    pub fn cursor_left(&mut self, n: usize) {
        self.cursor.overflow = false;
        let mut remaining = n;
        while remaining > 0 {
            if self.cursor.col > 0 {
                let step = remaining.min(self.cursor.col);
                self.cursor.col -= step;
                remaining -= step;
            } else if self.reverse_wraparound && self.cursor.row > 0 {
                self.cursor.row -= 1;
                self.cursor.col = self.width.saturating_sub(1);
                remaining -= 1;
            } else {
                break;
            }
        }
    }

    pub fn cursor_right(&mut self, n: usize) {
        self.cursor.overflow = false;
        self.cursor.col = (self.cursor.col + n).min(self.width.saturating_sub(1));
    }

    pub fn cursor_next_line(&mut self, n: usize) {
        self.cursor_down(n);
        self.cursor.col = 0;
        self.cursor.overflow = false;
    }

    pub fn cursor_prev_line(&mut self, n: usize) {
        self.cursor_up(n);
        self.cursor.col = 0;
        self.cursor.overflow = false;
    }

    // ---- line motion ----------------------------------------------------

    /// Carriage return + line feed, honoring the scroll region.
    pub fn newline(&mut self) {
        self.cursor.col = 0;
        self.line_feed();
    }

    /// Move down one row, scrolling at the bottom margin; preserves column.
    pub fn line_feed(&mut self) {
        let (top, bottom) = self.effective_scroll_bounds();
        if self.cursor.row == bottom {
            self.vt_scroll_up_internal(1, true);
        } else if self.cursor.row < self.height.saturating_sub(1) {
            self.cursor.row += 1;
        }
        let _ = top;
        self.cursor.overflow = false;
    }

    pub fn reverse_line_feed(&mut self) {
        let (top, _bottom) = self.effective_scroll_bounds();
        if self.cursor.row == top {
            self.insert_lines(1);
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
        }
        self.cursor.overflow = false;
    }

    pub fn form_feed(&mut self, auto_carriage_return: bool) {
        if auto_carriage_return { self.newline(); } else { self.line_feed(); }
    }

    // ---- erasing ----------------------------------------------------------

    pub fn erase_to_left(&mut self) {
        if self.cursor.overflow { return; }
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) { r.erase_range(0..col + 1, attrs); }
    }

    pub fn erase_to_right(&mut self) {
        if self.cursor.overflow { return; }
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) {
            let len = r.len();
            r.erase_range(col..len, attrs);
        }
    }

    pub fn erase_line(&mut self) {
        let row = self.cursor.row;
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) { r.fill_blank(attrs); }
    }

    pub fn erase_above(&mut self) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        for r in &mut self.rows[..row] { r.fill_blank(attrs); }
        if let Some(r) = self.rows.get_mut(row) { r.erase_range(0..col + 1, attrs); }
    }

    pub fn erase_below(&mut self) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) {
            let len = r.len();
            r.erase_range(col..len, attrs);
        }
        for r in self.rows.iter_mut().skip(row + 1) { r.fill_blank(attrs); }
    }

    pub fn erase_all(&mut self) {
        let attrs = self.attrs;
        for r in &mut self.rows { r.fill_blank(attrs); }
    }

    /// `ESC # 8` (DECALN): fill every cell with `'E'` at the current
    /// attributes, used to visually check screen alignment.
    pub fn fill_with_test_pattern(&mut self) {
        let attrs = self.attrs;
        for r in &mut self.rows {
            for cell in r.cells_mut() {
                *cell = Cell::new('E', 1, attrs);
            }
        }
    }

    pub fn erase_chars(&mut self, n: usize) {
        if self.cursor.overflow { return; }
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) {
            r.blank_orphaned_wide_cell_at(col, attrs);
            let end = (col + n).min(r.len());
            r.blank_orphaned_wide_cell_at(end, attrs);
            r.erase_range(col..end, attrs);
        }
    }

    // ---- insert/delete chars & lines --------------------------------------

    pub fn insert_chars(&mut self, n: usize) {
        if self.cursor.overflow { return; }
        self.shift_right_from_cursor(n);
    }

    pub fn delete_chars(&mut self, n: usize) {
        if self.cursor.overflow { return; }
        let (row, col) = (self.cursor.row, self.cursor.col);
        let attrs = self.attrs;
        if let Some(r) = self.rows.get_mut(row) {
            r.blank_orphaned_wide_cell_at(col, attrs);
            let len = r.len();
            let shift_by = n.min(len - col.min(len));
            for i in col..len.saturating_sub(shift_by) {
                let src = r.get(i + shift_by).cloned().unwrap_or_else(|| Cell::blank(attrs));
                r.set(i, src);
            }
            for i in len.saturating_sub(shift_by)..len { r.set(i, Cell::blank(attrs)); }
        }
    }

    /// Clears the overflow latch, per the Design Notes rule that `CSI L`/`M`
    /// are the only erase-adjacent operations that clear it (J/K/X/@/P do
    /// not).
    fn clear_overflow_latch_for_line_op(&mut self) { self.cursor.overflow = false; }

    pub fn insert_lines(&mut self, n: usize) {
        self.clear_overflow_latch_for_line_op();
        let (top, bottom) = self.effective_scroll_bounds();
        let row = self.cursor.row;
        if row < top || row > bottom { return; }
        let attrs = self.attrs;
        let n = n.min(bottom - row + 1);
        for _ in 0..n {
            self.rows.remove(bottom);
            self.rows.insert(row, Row::blank(self.width, attrs));
        }
    }

    pub fn delete_lines(&mut self, n: usize) {
        self.clear_overflow_latch_for_line_op();
        let (top, bottom) = self.effective_scroll_bounds();
        let row = self.cursor.row;
        if row < top || row > bottom { return; }
        let attrs = self.attrs;
        let n = n.min(bottom - row + 1);
        for _ in 0..n {
            self.rows.remove(row);
            self.rows.insert(bottom, Row::blank(self.width, attrs));
        }
    }

    // ---- scrolling ----------------------------------------------------------

    /// Scroll the region up by `n`, optionally feeding vacated rows to
    /// `sink` (the scrollback), which only happens when the region is
    /// "unset" (covers the whole screen) and the caller wants eviction
    /// (`line_feed`'s natural scroll at the bottom of an unset region).
    pub fn vt_scroll_up(&mut self, n: usize) { self.vt_scroll_up_internal(n, false); }

    fn vt_scroll_up_internal(&mut self, n: usize, feed_scrollback_if_unset: bool) {
        let (top, bottom) = self.effective_scroll_bounds();
        let attrs = self.attrs;
        let evict_to_scrollback = feed_scrollback_if_unset && self.scroll_region.is_none();
        for _ in 0..n.min(bottom - top + 1) {
            let evicted = self.rows.remove(top);
            if evict_to_scrollback { self.pending_scrollback.push(evicted); }
            self.rows.insert(bottom, Row::blank(self.width, attrs));
        }
    }

    pub fn vt_scroll_down(&mut self, n: usize) {
        let (top, bottom) = self.effective_scroll_bounds();
        let attrs = self.attrs;
        for _ in 0..n.min(bottom - top + 1) {
            self.rows.remove(bottom);
            self.rows.insert(top, Row::blank(self.width, attrs));
        }
    }

    pub fn index_down(&mut self) { self.line_feed(); }

    pub fn reverse_index_up(&mut self) { self.reverse_line_feed(); }

    // ---- tab stops ----------------------------------------------------------

    fn reset_default_tab_stops(&mut self) {
        self.tab_stops = (0..self.width).map(|c| c % DEFAULT_TAB_WIDTH == 0).collect();
    }

    pub fn set_tab_stop(&mut self, col: usize) {
        if let Some(slot) = self.tab_stops.get_mut(col) { *slot = true; }
    }

    pub fn clear_tab_stop(&mut self, col: usize) {
        if let Some(slot) = self.tab_stops.get_mut(col) { *slot = false; }
    }

    pub fn clear_all_tab_stops(&mut self) { self.tab_stops.fill(false); }

    pub fn forward_tab(&mut self, n: usize) {
        for _ in 0..n {
            let next = (self.cursor.col + 1..self.width).find(|&c| self.tab_stops[c]);
            self.cursor.col = next.unwrap_or(self.width.saturating_sub(1));
        }
        self.cursor.overflow = false;
    }

    pub fn backward_tab(&mut self, n: usize) {
        for _ in 0..n {
            let prev = (0..self.cursor.col).rev().find(|&c| self.tab_stops[c]);
            self.cursor.col = prev.unwrap_or(0);
        }
        self.cursor.overflow = false;
    }

    // ---- scroll region / save-restore --------------------------------------

    pub fn set_scroll_region(&mut self, top: Option<usize>, bottom: Option<usize>) {
        let top = top.unwrap_or(0);
        let bottom = bottom.unwrap_or(self.height.saturating_sub(1));
        self.scroll_region = if top == 0 && bottom >= self.height.saturating_sub(1) {
            None
        } else if top < bottom {
            Some((top, bottom))
        } else {
            None
        };
        self.set_cursor_position(0, 0);
    }

    pub fn reset_scroll_region(&mut self) { self.scroll_region = None; }

    pub fn save_cursor(&mut self) {
        self.saved_cursor = Some(SavedCursor {
            cursor: self.cursor,
            attrs: self.attrs,
            charset: self.charset.clone(),
            origin_mode: self.origin_mode,
        });
    }

    pub fn restore_cursor(&mut self) {
        if let Some(saved) = self.saved_cursor.clone() {
            self.cursor = saved.cursor;
            self.attrs = saved.attrs;
            self.charset = saved.charset;
            self.origin_mode = saved.origin_mode;
        }
    }

    // ---- resize -------------------------------------------------------------

    /// Resize the screen. On height shrink, empty rows are popped from the
    /// bottom first; remaining shrinkage evicts top rows into `scrollback`
    /// when one is supplied (the primary screen), or discards them
    /// (the alternate screen, which passes `None`). On growth, up to
    /// `new_height - height` rows are pulled back from `scrollback` to
    /// unshift onto the top.
    pub fn resize(&mut self, new_width: usize, new_height: usize, mut scrollback: Option<&mut Scrollback>) {
        let attrs = self.attrs;
        match new_height.cmp(&self.height) {
            std::cmp::Ordering::Less => {
                let mut shrink_by = self.height - new_height;
                // Pop empty rows from the bottom first.
                while shrink_by > 0 {
                    let last = self.rows.len().saturating_sub(1);
                    let is_blank_tail = self
                        .rows
                        .get(last)
                        .is_some_and(|r| r.cells().iter().all(|c| c.glyph.as_str() == " "));
                    if is_blank_tail && self.cursor.row < last {
                        self.rows.pop();
                        shrink_by -= 1;
                    } else {
                        break;
                    }
                }
                while shrink_by > 0 && !self.rows.is_empty() {
                    let evicted = self.rows.remove(0);
                    if let Some(sb) = scrollback.as_deref_mut() { sb.push(evicted); }
                    self.cursor.row = self.cursor.row.saturating_sub(1);
                    shrink_by -= 1;
                }
                while self.rows.len() > new_height { self.rows.pop(); }
            }
            std::cmp::Ordering::Greater => {
                let delta = new_height - self.height;
                let mut history = scrollback.as_deref_mut().map_or_else(Vec::new, |sb| sb.pop_last(delta));
                let pulled = history.len();
                history.append(&mut self.rows);
                self.rows = history;
                while self.rows.len() < new_height {
                    self.rows.push(Row::blank(self.width, attrs));
                }
                self.cursor.row += pulled;
            }
            std::cmp::Ordering::Equal => {}
        }

        for r in &mut self.rows { r.resize(new_width, attrs); }
        self.width = new_width;
        self.height = new_height;
        self.cursor.row = self.cursor.row.min(self.height.saturating_sub(1));
        self.cursor.col = self.cursor.col.min(self.width.saturating_sub(1));
        self.reset_default_tab_stops();
        self.scroll_region = None;
    }

    // Used internally to buffer rows a resize or scroll wants evicted to
    // scrollback, read back by the Terminal facade which owns the real
    // `Scrollback`. Kept on `Screen` so grid math and eviction happen
    // together atomically.
    pub(crate) fn take_pending_scrollback(&mut self) -> Vec<Row> {
        std::mem::take(&mut self.pending_scrollback)
    }
}
