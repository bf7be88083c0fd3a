//! The tabular region of a document.
//!
//! Two code paths with one visual contract: [`TableLayout`] validates
//! its column geometry up front and draws a themed grid; when it cannot
//! be constructed the renderer degrades to [`render_rows_manual`],
//! which places the same cells row by row at fixed offsets — same
//! column order, same header band, same alternating tint.

use super::layout::{BODY_LIMIT, CONTINUATION_TOP, DocWriter, WHITE, fit_text};
use super::theme::Palette;
use crate::core::FactuurError;

pub(crate) const HEADER_HEIGHT: f32 = 10.0;
pub(crate) const ROW_HEIGHT: f32 = 8.0;
const CELL_PADDING: f32 = 2.5;
const HEADER_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

pub(crate) struct Column {
    pub header: &'static str,
    pub width: f32,
    pub align: Align,
}

impl Column {
    pub fn left(header: &'static str, width: f32) -> Self {
        Self {
            header,
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &'static str, width: f32) -> Self {
        Self {
            header,
            width,
            align: Align::Right,
        }
    }
}

pub(crate) struct TableLayout {
    x: f32,
    columns: Vec<Column>,
    width: f32,
}

impl TableLayout {
    /// Validate column geometry. Failure here is the signal for the
    /// caller to take the manual path instead.
    pub fn new(x: f32, columns: Vec<Column>, available_width: f32) -> Result<Self, FactuurError> {
        if columns.is_empty() {
            return Err(FactuurError::Document(
                "table needs at least one column".into(),
            ));
        }
        if columns.iter().any(|c| c.width <= 0.0) {
            return Err(FactuurError::Document(
                "table column widths must be positive".into(),
            ));
        }
        let width: f32 = columns.iter().map(|c| c.width).sum();
        if width > available_width + 0.01 {
            return Err(FactuurError::Document(format!(
                "table columns ({width:.1}mm) exceed available width ({available_width:.1}mm)"
            )));
        }
        Ok(Self { x, columns, width })
    }

    /// Draw header and body rows starting at `top`, flowing onto
    /// continuation pages (with a repeated header) as needed. Returns
    /// the y position just below the last row.
    pub fn render(
        &self,
        w: &mut DocWriter,
        top: f32,
        rows: &[Vec<String>],
        ruled: bool,
        palette: &Palette,
    ) -> f32 {
        let mut y = self.render_header(w, top, palette);
        for (index, row) in rows.iter().enumerate() {
            if y + ROW_HEIGHT > BODY_LIMIT {
                w.new_page();
                y = self.render_header(w, CONTINUATION_TOP, palette);
            }
            self.render_row(w, y, row, index % 2 == 0, ruled, palette);
            y += ROW_HEIGHT;
        }
        y
    }

    fn render_header(&self, w: &DocWriter, top: f32, palette: &Palette) -> f32 {
        w.set_fill(palette.primary);
        w.fill_rect(self.x, top, self.width, HEADER_HEIGHT);

        w.set_fill(WHITE);
        let baseline = top + HEADER_HEIGHT - 3.0;
        let mut x = self.x;
        for column in &self.columns {
            match column.align {
                Align::Left => {
                    w.text(column.header, HEADER_SIZE, x + CELL_PADDING, baseline, true)
                }
                Align::Right => w.text_right(
                    column.header,
                    HEADER_SIZE,
                    x + column.width - CELL_PADDING,
                    baseline,
                    true,
                ),
            }
            x += column.width;
        }
        top + HEADER_HEIGHT
    }

    fn render_row(
        &self,
        w: &DocWriter,
        top: f32,
        cells: &[String],
        tinted: bool,
        ruled: bool,
        palette: &Palette,
    ) {
        if tinted {
            w.set_fill(palette.light);
            w.fill_rect(self.x, top, self.width, ROW_HEIGHT);
        }
        if ruled {
            w.set_stroke(palette.primary, 0.2);
            w.stroke_rect(self.x, top, self.width, ROW_HEIGHT);
            let mut x = self.x;
            for column in &self.columns[..self.columns.len() - 1] {
                x += column.width;
                w.vline(x, top, top + ROW_HEIGHT);
            }
        }

        w.set_fill(palette.text);
        let baseline = top + ROW_HEIGHT - 2.5;
        let mut x = self.x;
        for (column, cell) in self.columns.iter().zip(cells) {
            let inner = column.width - 2.0 * CELL_PADDING;
            match column.align {
                Align::Left => w.text(
                    &fit_text(cell, inner, BODY_SIZE),
                    BODY_SIZE,
                    x + CELL_PADDING,
                    baseline,
                    false,
                ),
                Align::Right => w.text_right(
                    cell,
                    BODY_SIZE,
                    x + column.width - CELL_PADDING,
                    baseline,
                    false,
                ),
            }
            x += column.width;
        }
    }
}

/// Fallback table: header band plus row-by-row placement at the given
/// absolute column offsets. No geometry validation, no cell rules —
/// but the same column order, zebra tint, and pagination behavior.
pub(crate) fn render_rows_manual(
    w: &mut DocWriter,
    x: f32,
    top: f32,
    width: f32,
    headers: &[(&str, f32)],
    rows: &[Vec<String>],
    palette: &Palette,
) -> f32 {
    let header = |w: &DocWriter, top: f32| -> f32 {
        w.set_fill(palette.primary);
        w.fill_rect(x, top, width, HEADER_HEIGHT);
        w.set_fill(WHITE);
        for (label, offset) in headers {
            w.text(label, HEADER_SIZE, *offset, top + HEADER_HEIGHT - 3.0, true);
        }
        top + HEADER_HEIGHT
    };

    let mut y = header(w, top);
    for (index, row) in rows.iter().enumerate() {
        if y + ROW_HEIGHT > BODY_LIMIT {
            w.new_page();
            y = header(w, CONTINUATION_TOP);
        }
        if index % 2 == 0 {
            w.set_fill(palette.light);
            w.fill_rect(x, y, width, ROW_HEIGHT);
        }
        w.set_fill(palette.text);
        for ((_, offset), cell) in headers.iter().zip(row) {
            w.text(cell, BODY_SIZE, *offset, y + ROW_HEIGHT - 2.5, false);
        }
        y += ROW_HEIGHT;
    }
    y
}
