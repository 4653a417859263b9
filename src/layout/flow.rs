use crate::foundation::core::{Color, Point, Vec2};
use crate::foundation::error::{BrandpressError, BrandpressResult};
use crate::layout::blocks::{Block, BlockContext, BlockMeasure, DocumentStyle};
use crate::layout::display::{DisplayList, DrawOp};
use crate::paint::canvas::Canvas;
use crate::text::engine::TextEngine;
use crate::text::fonts::{Font, FontStyle};
use crate::text::runs::TextRun;
use crate::text::wrap::wrap_text;

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Page size, margins and raster resolution, all lengths in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub px_per_mm: f64,
    pub margin_mm: f64,
    /// Band reserved under the top margin for the running header.
    pub header_mm: f64,
    /// Distance from the page bottom at which content breaks to a new page.
    pub break_margin_mm: f64,
    /// Distance from the page bottom to the top of the footer line.
    pub footer_mm: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4(3.5)
    }
}

impl PageGeometry {
    pub fn a4(px_per_mm: f64) -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            px_per_mm,
            margin_mm: 10.0,
            header_mm: 14.0,
            break_margin_mm: 25.0,
            footer_mm: 15.0,
        }
    }

    pub fn px(&self, mm: f64) -> f64 {
        mm * self.px_per_mm
    }

    /// Pixel size of a font given in points.
    pub fn pt(&self, pt: f64) -> f64 {
        self.px(pt * MM_PER_PT)
    }

    pub fn width_px(&self) -> u32 {
        self.px(self.width_mm).round().max(1.0) as u32
    }

    pub fn height_px(&self) -> u32 {
        self.px(self.height_mm).round().max(1.0) as u32
    }

    pub fn left(&self) -> f64 {
        self.px(self.margin_mm)
    }

    pub fn content_width(&self) -> f64 {
        self.px(self.width_mm - 2.0 * self.margin_mm)
    }

    pub fn content_top(&self) -> f64 {
        self.px(self.margin_mm + self.header_mm)
    }

    /// Y past which a block may not extend without a page break.
    pub fn break_y(&self) -> f64 {
        self.px(self.height_mm - self.break_margin_mm)
    }

    pub fn printable_height(&self) -> f64 {
        (self.break_y() - self.content_top()).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Cover,
    Content,
    Finalized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub kind: PageKind,
    pub header: bool,
    pub footer: bool,
    pub blocks: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowStats {
    pub blocks: usize,
    pub page_breaks: usize,
    /// Table rows dropped by tables that did not fit their page.
    pub truncated_rows: usize,
    /// Blocks taller than a whole page, drawn past the break line.
    pub overflowing_blocks: usize,
}

/// A finished multi-page document: one raster per page.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub title: String,
    pub geometry: PageGeometry,
    pub pages: Vec<Canvas>,
    pub page_info: Vec<PageInfo>,
    pub stats: FlowStats,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn content_pages(&self) -> usize {
        self.page_info
            .iter()
            .filter(|p| p.kind == PageKind::Content)
            .count()
    }
}

/// Sequences blocks onto pages.
///
/// Starts in [`FlowState::Cover`]; the first emitted block opens a content page. A content page
/// gets its header when it opens and its footer when it closes. Before each block the flow checks
/// whether the block fits above the break line and opens a new page if not, unless the current page
/// is still empty. [`PageFlow::finish`] closes the last page and moves the document out; the flow
/// then rejects further work.
pub struct PageFlow<'e> {
    engine: &'e mut TextEngine,
    style: DocumentStyle,
    geometry: PageGeometry,
    title: String,
    state: FlowState,
    pages: Vec<Canvas>,
    info: Vec<PageInfo>,
    current: Option<(Canvas, PageInfo)>,
    cursor: f64,
    stats: FlowStats,
}

impl<'e> PageFlow<'e> {
    pub fn new(
        engine: &'e mut TextEngine,
        title: impl Into<String>,
        style: DocumentStyle,
        geometry: PageGeometry,
    ) -> Self {
        Self {
            engine,
            style,
            geometry,
            title: title.into(),
            state: FlowState::Cover,
            pages: Vec::new(),
            info: Vec::new(),
            current: None,
            cursor: geometry.content_top(),
            stats: FlowStats::default(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Pages closed so far plus the open one.
    pub fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.current.is_some())
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Draw the full-bleed cover page. Only valid once, before any content.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn cover(&mut self, title: &str, subtitle: &str, date: &str) -> BrandpressResult<()> {
        if self.state != FlowState::Cover || !self.pages.is_empty() {
            return Err(BrandpressError::layout(
                "cover page must be the first page of a document",
            ));
        }
        let g = self.geometry;
        let st = &self.style;
        let mut list = DisplayList::new();
        list.push(DrawOp::FillRect {
            rect: kurbo::Rect::new(0.0, 0.0, g.px(g.width_mm), g.px(100.0)),
            color: st.accent,
        });
        list.push(DrawOp::FillRect {
            rect: kurbo::Rect::new(0.0, 0.0, g.px(g.width_mm), g.px(4.0)),
            color: st.cover_band,
        });

        let mark = self.engine.font(FontStyle::Bold, g.pt(28.0) as f32);
        let heading = self.engine.font(FontStyle::Bold, g.pt(22.0) as f32);
        let sub = self.engine.font(FontStyle::Regular, g.pt(12.0) as f32);
        let small = self.engine.font(FontStyle::Regular, g.pt(10.0) as f32);

        let origin = |y_mm: f64| Point::new(g.px(20.0), g.px(y_mm));
        list.push(single_line(
            self.engine,
            origin(25.0),
            format!(">_ {}", st.brand),
            Color::WHITE,
            mark,
        ));
        let title_lines = wrap_text(self.engine, title, &heading, Color::WHITE, g.px(170.0) as f32);
        list.push(DrawOp::Runs {
            origin: origin(50.0),
            lines: title_lines,
            line_height: g.px(10.0) as f32,
            font: heading,
        });
        list.push(single_line(self.engine, origin(78.0), subtitle, st.cover_subtitle, sub));
        list.push(single_line(self.engine, origin(110.0), date, st.muted, small.clone()));
        list.push(single_line(self.engine, origin(116.0), st.site.clone(), st.muted, small));

        let mut canvas = Canvas::new(g.width_px(), g.height_px(), Color::WHITE);
        list.paint(&mut canvas, self.engine, Vec2::ZERO)?;
        self.pages.push(canvas);
        self.info.push(PageInfo {
            kind: PageKind::Cover,
            header: false,
            footer: false,
            blocks: 0,
        });
        Ok(())
    }

    /// Place `block` at the cursor, opening a new page first if it would cross the break line.
    pub fn emit(&mut self, block: &Block) -> BrandpressResult<()> {
        match self.state {
            FlowState::Finalized => {
                return Err(BrandpressError::layout(
                    "cannot emit content into a finished document",
                ));
            }
            FlowState::Cover => {
                self.open_page()?;
                self.state = FlowState::Content;
            }
            FlowState::Content => {}
        }

        let g = self.geometry;
        let mut measure = self.measure(block, g.printable_height());
        let has_content = self.current.as_ref().is_some_and(|(_, info)| info.blocks > 0);
        if self.cursor + measure.height > g.break_y() && has_content {
            self.close_page()?;
            self.open_page()?;
            self.stats.page_breaks += 1;
            tracing::debug!(page = self.page_count(), "page break");
        }

        let remaining = g.break_y() - self.cursor;
        if measure.height > remaining {
            // Only a bounded table can shrink to the space that is left.
            measure = self.measure(block, remaining);
            if measure.height > remaining {
                self.stats.overflowing_blocks += 1;
                tracing::debug!(
                    height = measure.height,
                    remaining,
                    "block taller than the page"
                );
            }
        }

        let Some((canvas, info)) = self.current.as_mut() else {
            return Err(BrandpressError::layout("no open page"));
        };
        measure
            .list
            .paint(canvas, self.engine, Vec2::new(0.0, self.cursor))?;
        info.blocks += 1;
        self.cursor += measure.height;
        self.stats.blocks += 1;
        self.stats.truncated_rows += measure.truncated_rows;
        Ok(())
    }

    /// Close the open page and move the document out.
    #[tracing::instrument(level = "debug", skip(self), fields(title = %self.title))]
    pub fn finish(&mut self) -> BrandpressResult<Document> {
        if self.state == FlowState::Finalized {
            return Err(BrandpressError::layout("document already finished"));
        }
        if self.current.is_some() {
            self.close_page()?;
        }
        self.state = FlowState::Finalized;
        Ok(Document {
            title: self.title.clone(),
            geometry: self.geometry,
            pages: std::mem::take(&mut self.pages),
            page_info: std::mem::take(&mut self.info),
            stats: self.stats,
        })
    }

    fn measure(&mut self, block: &Block, available: f64) -> BlockMeasure {
        let mut ctx = BlockContext {
            engine: self.engine,
            style: &self.style,
            geometry: &self.geometry,
        };
        block.measure(&mut ctx, available)
    }

    fn open_page(&mut self) -> BrandpressResult<()> {
        let g = self.geometry;
        let mut canvas = Canvas::new(g.width_px(), g.height_px(), Color::WHITE);
        self.header_list().paint(&mut canvas, self.engine, Vec2::ZERO)?;
        self.current = Some((
            canvas,
            PageInfo {
                kind: PageKind::Content,
                header: true,
                footer: false,
                blocks: 0,
            },
        ));
        self.cursor = g.content_top();
        Ok(())
    }

    fn close_page(&mut self) -> BrandpressResult<()> {
        let Some((mut canvas, mut info)) = self.current.take() else {
            return Ok(());
        };
        // Pages are numbered from the cover.
        let number = self.pages.len() + 1;
        self.footer_list(number)
            .paint(&mut canvas, self.engine, Vec2::ZERO)?;
        info.footer = true;
        self.pages.push(canvas);
        self.info.push(info);
        Ok(())
    }

    fn header_list(&mut self) -> DisplayList {
        let g = self.geometry;
        let font = self.engine.font(FontStyle::Bold, g.pt(9.0) as f32);
        let lh = self.engine.line_height(&font);
        let dy = ((g.px(8.0) - f64::from(lh)) / 2.0).max(0.0);
        let top = g.px(g.margin_mm);
        let title_w = f64::from(self.engine.measure(&self.title, &font));
        let right = g.px(g.width_mm - g.margin_mm);

        let mut list = DisplayList::new();
        list.push(DrawOp::Runs {
            origin: Point::new(g.left(), top + dy),
            lines: vec![vec![TextRun::new(self.style.brand.clone(), self.style.muted)]],
            line_height: lh,
            font: font.clone(),
        });
        list.push(DrawOp::Runs {
            origin: Point::new(right - title_w, top + dy),
            lines: vec![vec![TextRun::new(self.title.clone(), self.style.muted)]],
            line_height: lh,
            font,
        });
        let rule_y = top + g.px(8.0);
        list.push(DrawOp::Line {
            from: Point::new(g.left(), rule_y),
            to: Point::new(right, rule_y),
            color: self.style.accent,
            width: g.px(0.5).max(1.0),
        });
        list
    }

    fn footer_list(&mut self, number: usize) -> DisplayList {
        let g = self.geometry;
        let font = self.engine.font(FontStyle::Regular, g.pt(8.0) as f32);
        let lh = self.engine.line_height(&font);
        let text = format!("{}  |  Page {number}", self.style.site);
        let w = f64::from(self.engine.measure(&text, &font));
        let top = g.px(g.height_mm - g.footer_mm) + ((g.px(10.0) - f64::from(lh)) / 2.0).max(0.0);

        let mut list = DisplayList::new();
        list.push(DrawOp::Runs {
            origin: Point::new((g.px(g.width_mm) - w) / 2.0, top),
            lines: vec![vec![TextRun::new(text, self.style.muted)]],
            line_height: lh,
            font,
        });
        list
    }
}

fn single_line(
    engine: &mut TextEngine,
    origin: Point,
    text: impl Into<String>,
    color: Color,
    font: Font,
) -> DrawOp {
    DrawOp::Runs {
        origin,
        lines: vec![vec![TextRun::new(text, color)]],
        line_height: engine.line_height(&font),
        font,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
