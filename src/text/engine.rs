use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use crate::foundation::core::{Color, Point};
use crate::foundation::error::BrandpressResult;
use crate::paint::canvas::Canvas;
use crate::text::builtin;
use crate::text::fonts::{Font, FontBook, FontFace, FontSources, FontStyle, OutlineFace};

type MeasureKey = (Arc<str>, u32, String);

/// Style of one byte range of a paragraph handed to [`TextEngine::break_lines`].
pub(crate) struct StyledSpan<'a> {
    pub range: Range<usize>,
    pub family: &'a str,
    pub size: f32,
    pub color: Color,
}

/// Shapes, measures and rasterises text for one run.
///
/// Owns the Parley contexts and the font book, so every font file is registered once and every
/// `(family, size, text)` measurement is computed once. Widths never depend on colour.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Color>,
    book: FontBook,
    widths: HashMap<MeasureKey, f32>,
    line_heights: HashMap<(Arc<str>, u32), f32>,
}

impl TextEngine {
    pub fn new(sources: FontSources) -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            book: FontBook::new(sources),
            widths: HashMap::new(),
            line_heights: HashMap::new(),
        }
    }

    /// Engine with no font candidates; every request resolves to the built-in face.
    pub fn builtin_only() -> Self {
        Self::new(FontSources::builtin_only())
    }

    pub fn sources(&self) -> &FontSources {
        self.book.sources()
    }

    /// Resolve a font request. Never fails: missing files fall back to the built-in face.
    pub fn font(&mut self, style: FontStyle, size: f32) -> Font {
        self.book.resolve(&mut self.font_ctx, style, size)
    }

    /// Horizontal advance of `text`, trailing spaces included.
    pub fn measure(&mut self, text: &str, font: &Font) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match &font.face {
            FontFace::Builtin => builtin::advance(text, font.size),
            FontFace::Outline(face) => {
                let key = (face.family.clone(), font.size.to_bits(), text.to_string());
                if let Some(w) = self.widths.get(&key) {
                    return *w;
                }
                let w = self.layout(text, &face.family, font.size).full_width();
                self.widths.insert(key, w);
                w
            }
        }
    }

    /// Natural line box height for `font`.
    pub fn line_height(&mut self, font: &Font) -> f32 {
        match &font.face {
            FontFace::Builtin => builtin::line_height(font.size),
            FontFace::Outline(face) => {
                let key = (face.family.clone(), font.size.to_bits());
                if let Some(h) = self.line_heights.get(&key) {
                    return *h;
                }
                let h = self.layout("Ag", &face.family, font.size).height().ceil();
                self.line_heights.insert(key, h);
                h
            }
        }
    }

    /// Draw one line of `text` with its line box's top-left at `origin`; returns the advance.
    pub fn draw_text(
        &mut self,
        canvas: &mut Canvas,
        origin: Point,
        text: &str,
        font: &Font,
        color: Color,
    ) -> BrandpressResult<f32> {
        if text.is_empty() {
            return Ok(0.0);
        }
        match &font.face {
            FontFace::Builtin => Ok(builtin::draw(
                canvas,
                origin.x.round() as i32,
                origin.y.round() as i32,
                text,
                font.size,
                color,
            )),
            FontFace::Outline(face) => {
                let face = face.clone();
                self.draw_outline(canvas, origin, text, &face, font.size, color)
            }
        }
    }

    fn layout(&mut self, text: &str, family: &str, size: f32) -> parley::Layout<Color> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        let mut layout: parley::Layout<Color> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Break `text` into lines no wider than `max_width` with Parley's line breaker.
    ///
    /// Returns the byte range of every line in order; trailing whitespace stays with the line it
    /// ends. Words wider than `max_width` break anywhere.
    pub(crate) fn break_lines(
        &mut self,
        text: &str,
        spans: &[StyledSpan<'_>],
        max_width: f32,
    ) -> Vec<Range<usize>> {
        use parley::style::{FontStack, OverflowWrap, StyleProperty};

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(StyleProperty::OverflowWrap(OverflowWrap::Anywhere));
        for span in spans {
            builder.push(
                StyleProperty::FontStack(FontStack::Source(Cow::Borrowed(span.family))),
                span.range.clone(),
            );
            builder.push(StyleProperty::FontSize(span.size), span.range.clone());
            builder.push(StyleProperty::Brush(span.color), span.range.clone());
        }
        let mut layout: parley::Layout<Color> = builder.build(text);
        layout.break_all_lines((max_width < f32::MAX).then_some(max_width));
        layout.lines().map(|line| line.text_range()).collect()
    }

    #[tracing::instrument(level = "trace", skip(self, canvas, face, color))]
    fn draw_outline(
        &mut self,
        canvas: &mut Canvas,
        origin: Point,
        text: &str,
        face: &OutlineFace,
        size: f32,
        color: Color,
    ) -> BrandpressResult<f32> {
        let layout = self.layout(text, &face.family, size);
        let advance = layout.full_width();

        // One pixel of slack on each side for glyph overhang and the sub-pixel origin offset.
        let w = (advance.ceil() as u32 + 3).min(u32::from(u16::MAX)) as u16;
        let h = (layout.height().ceil() as u32 + 3).min(u32::from(u16::MAX)) as u16;
        let (ox, oy) = (origin.x.floor(), origin.y.floor());
        let (fx, fy) = (origin.x - ox + 1.0, origin.y - oy + 1.0);

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((fx, fy)));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, 255,
        ));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&face.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        canvas.blend_premul_rgba(
            ox as i32 - 1,
            oy as i32 - 1,
            u32::from(w),
            u32::from(h),
            pixmap.data_as_u8_slice(),
        )?;
        Ok(advance)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
