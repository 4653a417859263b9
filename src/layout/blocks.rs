use crate::foundation::core::{Color, Point};
use crate::layout::boxed::{BoxSection, BoxStyle, measure_box};
use crate::layout::display::{DisplayList, DrawOp};
use crate::layout::flow::PageGeometry;
use crate::layout::table::Table;
use crate::text::engine::TextEngine;
use crate::text::fonts::{Font, FontStyle};
use crate::text::runs::TextRun;
use crate::text::wrap::{wrap_runs, wrap_text};

/// Colours and fixed strings shared by every page of a branded document.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentStyle {
    pub brand: String,
    pub site: String,
    pub accent: Color,
    pub cover_band: Color,
    pub cover_subtitle: Color,
    pub dark: Color,
    pub body: Color,
    pub muted: Color,
    pub panel: Color,
    pub panel_border: Color,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            brand: "AgentRails".to_string(),
            site: "www.agentrails.io".to_string(),
            accent: Color::rgb(79, 70, 229),
            cover_band: Color::rgb(50, 55, 200),
            cover_subtitle: Color::rgb(200, 200, 240),
            dark: Color::rgb(24, 24, 27),
            body: Color::rgb(82, 82, 91),
            muted: Color::rgb(113, 113, 122),
            panel: Color::rgb(248, 250, 252),
            panel_border: Color::rgb(200, 200, 210),
        }
    }
}

/// A unit of document content. The page flow breaks pages only between blocks.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    SectionHeading(String),
    SubHeading(String),
    Paragraph(String),
    /// `- ` bullet; with a prefix the line reads `prefix -- text`, prefix in bold.
    Bullet {
        prefix: Option<String>,
        text: String,
    },
    InfoBox {
        title: String,
        body: String,
    },
    /// Bounded table: rows that do not fit the remaining page are dropped, never carried over.
    Table(Table),
    /// Vertical gap in millimetres.
    Spacer(f64),
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::SectionHeading(text.into())
    }

    pub fn sub_heading(text: impl Into<String>) -> Self {
        Self::SubHeading(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet {
            prefix: None,
            text: text.into(),
        }
    }

    /// Bullet whose `full` text starts with `prefix`; the dash separator after it is dropped.
    pub fn labeled_bullet(full: &str, prefix: &str) -> Self {
        let rest = full.strip_prefix(prefix).unwrap_or(full);
        let rest = rest.trim_start_matches([' ', '\u{2014}', '\u{2013}', '-']);
        Self::Bullet {
            prefix: Some(prefix.to_string()),
            text: rest.to_string(),
        }
    }

    pub fn info_box(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::InfoBox {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// What a block needs to measure itself.
pub struct BlockContext<'a> {
    pub engine: &'a mut TextEngine,
    pub style: &'a DocumentStyle,
    pub geometry: &'a PageGeometry,
}

impl BlockContext<'_> {
    fn mm(&self, mm: f64) -> f64 {
        self.geometry.px(mm)
    }

    fn font(&mut self, style: FontStyle, pt: f64) -> Font {
        let size = self.geometry.pt(pt) as f32;
        self.engine.font(style, size)
    }

    /// Top offset that centres `font`'s line box inside a cell of `cell_mm`.
    fn centre_in(&mut self, font: &Font, cell_mm: f64) -> f64 {
        let lh = f64::from(self.engine.line_height(font));
        ((self.mm(cell_mm) - lh) / 2.0).max(0.0)
    }
}

/// Measured block, positioned with its top at y = 0 and page-absolute x.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockMeasure {
    pub height: f64,
    pub list: DisplayList,
    pub truncated_rows: usize,
}

impl BlockMeasure {
    fn new(height: f64, list: DisplayList) -> Self {
        Self {
            height,
            list,
            truncated_rows: 0,
        }
    }
}

impl Block {
    /// Lay the block out. `available` is the vertical space left on the page; only tables use it.
    pub fn measure(&self, ctx: &mut BlockContext<'_>, available: f64) -> BlockMeasure {
        let left = ctx.geometry.left();
        let width = ctx.geometry.content_width();
        let mut list = DisplayList::new();

        match self {
            Self::SectionHeading(text) => {
                let font = ctx.font(FontStyle::Bold, 14.0);
                let top = ctx.mm(4.0);
                let dy = ctx.centre_in(&font, 10.0);
                let lh = ctx.engine.line_height(&font);
                list.push(DrawOp::Runs {
                    origin: Point::new(left, top + dy),
                    lines: vec![vec![TextRun::new(text.clone(), ctx.style.accent)]],
                    line_height: lh,
                    font,
                });
                let rule_y = top + ctx.mm(10.0);
                list.push(DrawOp::Line {
                    from: Point::new(left, rule_y),
                    to: Point::new(ctx.mm(80.0), rule_y),
                    color: ctx.style.accent,
                    width: ctx.mm(0.3).max(1.0),
                });
                BlockMeasure::new(ctx.mm(17.0), list)
            }
            Self::SubHeading(text) => {
                let font = ctx.font(FontStyle::Bold, 11.0);
                let dy = ctx.centre_in(&font, 8.0);
                let lh = ctx.engine.line_height(&font);
                list.push(DrawOp::Runs {
                    origin: Point::new(left, ctx.mm(2.0) + dy),
                    lines: vec![vec![TextRun::new(text.clone(), ctx.style.dark)]],
                    line_height: lh,
                    font,
                });
                BlockMeasure::new(ctx.mm(10.0), list)
            }
            Self::Paragraph(text) => {
                let font = ctx.font(FontStyle::Regular, 10.0);
                let lines = wrap_text(ctx.engine, text, &font, ctx.style.body, width as f32);
                let n = lines.len() as f64;
                let dy = ctx.centre_in(&font, 5.5);
                list.push(DrawOp::Runs {
                    origin: Point::new(left, dy),
                    lines,
                    line_height: ctx.mm(5.5) as f32,
                    font,
                });
                BlockMeasure::new(n * ctx.mm(5.5) + ctx.mm(2.0), list)
            }
            Self::Bullet { prefix, text } => {
                let font = ctx.font(FontStyle::Regular, 10.0);
                let bold = ctx.font(FontStyle::Bold, 10.0);
                let dy = ctx.centre_in(&font, 5.5);
                let line_height = ctx.mm(5.5) as f32;
                let indent = ctx.mm(6.0);

                let runs = match prefix {
                    Some(p) => vec![
                        TextRun::new(format!("{p} "), ctx.style.dark).with_font(bold),
                        TextRun::new(
                            if text.is_empty() {
                                String::new()
                            } else {
                                format!("-- {text}")
                            },
                            ctx.style.body,
                        ),
                    ],
                    None => vec![TextRun::new(text.clone(), ctx.style.body)],
                };
                let lines = wrap_runs(ctx.engine, &runs, &font, (width - indent) as f32);
                let n = lines.len().max(1) as f64;
                list.push(DrawOp::Runs {
                    origin: Point::new(left, dy),
                    lines: vec![vec![TextRun::new("-", ctx.style.body)]],
                    line_height,
                    font: font.clone(),
                });
                list.push(DrawOp::Runs {
                    origin: Point::new(left + indent, dy),
                    lines,
                    line_height,
                    font,
                });
                BlockMeasure::new(n * ctx.mm(5.5) + ctx.mm(1.0), list)
            }
            Self::InfoBox { title, body } => {
                let title_font = ctx.font(FontStyle::Bold, 10.0);
                let body_font = ctx.font(FontStyle::Regular, 9.0);
                let style = BoxStyle {
                    fill: Some(ctx.style.panel),
                    border: Some(ctx.style.panel_border),
                    border_width: ctx.mm(0.2).max(1.0),
                    radius: 0.0,
                    padding_x: ctx.mm(4.0),
                    padding_top: ctx.mm(3.0),
                    padding_bottom: ctx.mm(4.0),
                };
                let sections = [
                    BoxSection::new(
                        vec![TextRun::new(title.clone(), ctx.style.accent)],
                        title_font,
                        ctx.mm(6.0) as f32,
                    ),
                    BoxSection::new(
                        vec![TextRun::new(body.clone(), ctx.style.body)],
                        body_font,
                        ctx.mm(5.0) as f32,
                    ),
                ];
                let top = ctx.mm(2.0);
                let boxed =
                    measure_box(ctx.engine, Point::new(left, top), width, &style, &sections);
                let height = top + boxed.height + ctx.mm(4.0);
                BlockMeasure::new(height, boxed.commit(&style))
            }
            Self::Table(table) => {
                let pad = ctx.mm(2.0);
                let laid = table.layout(ctx.engine, Point::new(left, pad), available - 2.0 * pad);
                BlockMeasure {
                    height: laid.height + 2.0 * pad,
                    list: laid.list,
                    truncated_rows: laid.truncated_rows,
                }
            }
            Self::Spacer(mm) => BlockMeasure::new(ctx.mm(mm.max(0.0)), list),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/blocks.rs"]
mod tests;
