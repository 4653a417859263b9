use crate::foundation::core::{Color, Point};
use crate::foundation::math::lerp_u8;
use crate::layout::display::{DisplayList, DrawOp};
use crate::text::engine::TextEngine;
use crate::text::fonts::FontStyle;
use crate::text::runs::TextRun;

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub title: String,
    pub width: f64,
}

impl Column {
    pub fn new(title: impl Into<String>, width: f64) -> Self {
        Self {
            title: title.into(),
            width,
        }
    }
}

/// One table cell. Cells without a colour use the table's text colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
    /// Draw the text on a tinted pill of this colour.
    pub badge: Option<Color>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            badge: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::text(text)
        }
    }

    pub fn badge(text: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            badge: Some(color),
            ..Self::text(text)
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableStyle {
    pub header_color: Color,
    pub text_color: Color,
    pub rule_color: Color,
    pub header_fill: Option<Color>,
    pub header_size: f32,
    pub row_size: f32,
    /// Distance from the header top to the first row top.
    pub header_height: f64,
    pub row_height: f64,
    /// Distance from the header top to the rule under it.
    pub rule_offset: f64,
    /// Text offset from the top of its row.
    pub cell_pad_y: f64,
    pub badge_width: f64,
    pub badge_pad_x: f64,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_color: Color::rgb(113, 113, 122),
            text_color: Color::rgb(63, 63, 70),
            rule_color: Color::rgb(228, 228, 231),
            header_fill: None,
            header_size: 11.0,
            row_size: 12.0,
            header_height: 30.0,
            row_height: 32.0,
            rule_offset: 22.0,
            cell_pad_y: 0.0,
            badge_width: 65.0,
            badge_pad_x: 8.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
    pub style: TableStyle,
}

/// A laid-out table: what fits, and how many rows did not.
#[derive(Clone, Debug, PartialEq)]
pub struct TableLayout {
    pub list: DisplayList,
    pub height: f64,
    pub rows_drawn: usize,
    pub truncated_rows: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>, style: TableStyle) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            style,
        }
    }

    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn width(&self) -> f64 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Lay the table out with its header's top-left at `origin`.
    ///
    /// The table never spills past `available` vertical space: rows whose bottom would pass it are
    /// dropped and counted in [`TableLayout::truncated_rows`]. The header is always kept.
    pub fn layout(&self, engine: &mut TextEngine, origin: Point, available: f64) -> TableLayout {
        let st = &self.style;
        let header_font = engine.font(FontStyle::Bold, st.header_size);
        let regular = engine.font(FontStyle::Regular, st.row_size);
        let bold = engine.font(FontStyle::Bold, st.row_size);
        let header_lh = engine.line_height(&header_font);
        let row_lh = engine.line_height(&regular);

        let mut list = DisplayList::new();
        if let Some(fill) = st.header_fill {
            list.push(DrawOp::FillRect {
                rect: kurbo::Rect::new(
                    origin.x,
                    origin.y,
                    origin.x + self.width(),
                    origin.y + st.rule_offset,
                ),
                color: fill,
            });
        }
        let mut x = origin.x;
        for col in &self.columns {
            list.push(DrawOp::Runs {
                origin: Point::new(x, origin.y + st.cell_pad_y),
                lines: vec![vec![TextRun::new(col.title.clone(), st.header_color)]],
                line_height: header_lh,
                font: header_font.clone(),
            });
            x += col.width;
        }
        list.push(DrawOp::Line {
            from: Point::new(origin.x, origin.y + st.rule_offset),
            to: Point::new(origin.x + self.width(), origin.y + st.rule_offset),
            color: st.rule_color,
            width: 1.0,
        });

        let fits = (available - st.header_height) / st.row_height;
        let rows_drawn = if fits.is_nan() || fits < 1.0 {
            0
        } else if fits >= self.rows.len() as f64 {
            self.rows.len()
        } else {
            fits.floor() as usize
        };
        let truncated_rows = self.rows.len() - rows_drawn;
        if truncated_rows > 0 {
            tracing::warn!(
                rows = self.rows.len(),
                dropped = truncated_rows,
                "table taller than its space, dropping rows"
            );
        }

        for (i, row) in self.rows.iter().take(rows_drawn).enumerate() {
            let y = origin.y + st.header_height + i as f64 * st.row_height;
            let mut x = origin.x;
            for (cell, col) in row.iter().zip(&self.columns) {
                let color = cell.color.unwrap_or(st.text_color);
                let font = if cell.bold { bold.clone() } else { regular.clone() };
                let mut text_x = x;
                if let Some(badge) = cell.badge {
                    list.push(DrawOp::FillRoundedRect {
                        rect: kurbo::Rect::new(
                            x,
                            y + st.cell_pad_y - 2.0,
                            x + st.badge_width,
                            y + st.cell_pad_y + f64::from(row_lh),
                        ),
                        radius: 4.0,
                        color: tint(badge, 30),
                    });
                    text_x += st.badge_pad_x;
                }
                list.push(DrawOp::Runs {
                    origin: Point::new(text_x, y + st.cell_pad_y),
                    lines: vec![vec![TextRun::new(cell.text.clone(), color)]],
                    line_height: row_lh,
                    font,
                });
                x += col.width;
            }
        }

        TableLayout {
            list,
            height: st.header_height + rows_drawn as f64 * st.row_height,
            rows_drawn,
            truncated_rows,
        }
    }
}

/// `color` at `alpha / 255` strength over white.
pub fn tint(color: Color, alpha: u8) -> Color {
    Color::rgb(
        lerp_u8(255, color.r, alpha),
        lerp_u8(255, color.g, alpha),
        lerp_u8(255, color.b, alpha),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/table.rs"]
mod tests;
