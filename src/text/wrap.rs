use std::ops::Range;

use crate::foundation::core::Color;
use crate::text::engine::{StyledSpan, TextEngine};
use crate::text::fonts::{Font, FontFace};
use crate::text::runs::{CodeLine, TextRun};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Word,
    Space,
    Newline,
}

#[derive(Clone, Debug)]
struct Piece {
    text: String,
    color: Color,
    font: Option<Font>,
    kind: Kind,
    width: f32,
}

fn split_run(run: &TextRun, out: &mut Vec<(String, Kind)>) {
    let mut current = String::new();
    let mut kind = Kind::Word;
    for c in run.text.chars() {
        let k = match c {
            '\n' => Kind::Newline,
            ' ' | '\t' => Kind::Space,
            _ => Kind::Word,
        };
        if !current.is_empty() && (k != kind || k == Kind::Newline) {
            out.push((std::mem::take(&mut current), kind));
        }
        kind = k;
        current.push(if c == '\t' { ' ' } else { c });
    }
    if !current.is_empty() {
        out.push((current, kind));
    }
}

struct LineBuilder<'a> {
    engine: &'a mut TextEngine,
    font: &'a Font,
    max_width: f32,
    lines: Vec<Vec<Piece>>,
    line: Vec<Piece>,
    width: f32,
}

impl LineBuilder<'_> {
    fn has_word(&self) -> bool {
        self.line.iter().any(|p| p.kind == Kind::Word)
    }

    fn break_line(&mut self) {
        while self.line.last().is_some_and(|p| p.kind == Kind::Space) {
            self.line.pop();
        }
        self.lines.push(std::mem::take(&mut self.line));
        self.width = 0.0;
    }

    fn push(&mut self, piece: Piece) {
        self.width += piece.width;
        self.line.push(piece);
    }

    fn place_word(&mut self, piece: Piece) {
        if self.width + piece.width <= self.max_width {
            self.push(piece);
            return;
        }
        if self.has_word() {
            self.break_line();
        }
        if piece.width > self.max_width {
            self.place_by_chars(piece);
        } else {
            self.push(piece);
        }
    }

    /// Break a word wider than the line by characters, at least one character per line.
    fn place_by_chars(&mut self, piece: Piece) {
        let font = piece.font.clone();
        let measure_font = font.as_ref().unwrap_or(self.font).clone();
        let mut chunk = String::new();
        let mut chunk_width = 0.0f32;
        for c in piece.text.chars() {
            let cw = self.engine.measure(c.encode_utf8(&mut [0; 4]), &measure_font);
            if !chunk.is_empty() && self.width + chunk_width + cw > self.max_width {
                self.push(Piece {
                    text: std::mem::take(&mut chunk),
                    color: piece.color,
                    font: font.clone(),
                    kind: Kind::Word,
                    width: chunk_width,
                });
                self.break_line();
                chunk_width = 0.0;
            }
            chunk.push(c);
            chunk_width += cw;
        }
        if !chunk.is_empty() {
            self.push(Piece {
                text: chunk,
                color: piece.color,
                font,
                kind: Kind::Word,
                width: chunk_width,
            });
        }
    }
}

/// Word wrap across styled runs.
///
/// `\n` always breaks. When every run resolves to an outline face, each paragraph is laid out as
/// one ranged Parley layout and broken with its line breaker, words wider than the line breaking
/// anywhere. Otherwise lines are built greedily: they break at spaces when the next word would pass
/// `max_width`, and a word wider than `max_width` on its own is split by characters. Either way
/// trailing spaces are dropped from every line and adjacent pieces that share colour and font are
/// merged back into a single run.
pub fn wrap_runs(
    engine: &mut TextEngine,
    runs: &[TextRun],
    font: &Font,
    max_width: f32,
) -> Vec<CodeLine> {
    let max_width = if max_width.is_finite() {
        max_width.max(0.0)
    } else {
        f32::MAX
    };
    let shaped = runs
        .iter()
        .all(|run| matches!(run.font.as_ref().unwrap_or(font).face, FontFace::Outline(_)));
    if shaped {
        wrap_shaped(engine, runs, font, max_width)
    } else {
        wrap_greedy(engine, runs, font, max_width)
    }
}

/// One `\n`-free stretch of the input with the style of each byte range.
#[derive(Default)]
struct Paragraph {
    text: String,
    spans: Vec<(Range<usize>, Color, Option<Font>)>,
}

impl Paragraph {
    fn push(&mut self, text: &str, run: &TextRun) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(&text.replace('\t', " "));
        self.spans.push((start..self.text.len(), run.color, run.font.clone()));
    }

    /// The runs covering `range`, trailing spaces removed.
    fn line(&self, range: Range<usize>) -> CodeLine {
        let end = range.start + self.text[range.clone()].trim_end_matches(' ').len();
        let pieces = self.spans.iter().filter_map(|(span, color, font)| {
            let (from, to) = (span.start.max(range.start), span.end.min(end));
            (from < to).then(|| Piece {
                text: self.text[from..to].to_string(),
                color: *color,
                font: font.clone(),
                kind: Kind::Word,
                width: 0.0,
            })
        });
        merge_pieces(pieces.collect())
    }
}

fn paragraphs(runs: &[TextRun]) -> Vec<Paragraph> {
    let mut out = vec![Paragraph::default()];
    for run in runs {
        let mut parts = run.text.split('\n');
        if let (Some(first), Some(current)) = (parts.next(), out.last_mut()) {
            current.push(first, run);
        }
        for part in parts {
            let mut next = Paragraph::default();
            next.push(part, run);
            out.push(next);
        }
    }
    out
}

fn wrap_shaped(
    engine: &mut TextEngine,
    runs: &[TextRun],
    font: &Font,
    max_width: f32,
) -> Vec<CodeLine> {
    if runs.iter().all(|r| r.text.is_empty()) {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for para in paragraphs(runs) {
        if para.text.is_empty() {
            lines.push(Vec::new());
            continue;
        }
        let spans: Vec<StyledSpan<'_>> = para
            .spans
            .iter()
            .filter_map(|(range, color, run_font)| {
                let f = run_font.as_ref().unwrap_or(font);
                let FontFace::Outline(face) = &f.face else {
                    return None;
                };
                Some(StyledSpan {
                    range: range.clone(),
                    family: &face.family,
                    size: f.size,
                    color: *color,
                })
            })
            .collect();
        for range in engine.break_lines(&para.text, &spans, max_width) {
            lines.push(para.line(range));
        }
    }
    lines
}

fn wrap_greedy(
    engine: &mut TextEngine,
    runs: &[TextRun],
    font: &Font,
    max_width: f32,
) -> Vec<CodeLine> {
    let mut builder = LineBuilder {
        engine,
        font,
        max_width,
        lines: Vec::new(),
        line: Vec::new(),
        width: 0.0,
    };
    let mut soft_start = false;
    let mut any = false;

    let mut parts = Vec::new();
    for run in runs {
        parts.clear();
        split_run(run, &mut parts);
        for (text, kind) in parts.drain(..) {
            any = true;
            let run_font = run.font.as_ref().unwrap_or(font);
            let width = match kind {
                Kind::Newline => 0.0,
                _ => builder.engine.measure(&text, run_font),
            };
            let piece = Piece {
                text,
                color: run.color,
                font: run.font.clone(),
                kind,
                width,
            };
            match kind {
                Kind::Newline => {
                    builder.break_line();
                    soft_start = false;
                }
                Kind::Space => {
                    if builder.line.is_empty() && soft_start {
                        continue;
                    }
                    builder.push(piece);
                }
                Kind::Word => {
                    let before = builder.lines.len();
                    builder.place_word(piece);
                    if builder.lines.len() > before {
                        soft_start = true;
                    }
                }
            }
        }
    }
    if !any {
        return Vec::new();
    }
    if !builder.line.is_empty() || builder.lines.is_empty() {
        builder.break_line();
    }
    builder.lines.into_iter().map(merge_pieces).collect()
}

/// Single-style convenience over [`wrap_runs`].
pub fn wrap_text(
    engine: &mut TextEngine,
    text: &str,
    font: &Font,
    color: Color,
    max_width: f32,
) -> Vec<CodeLine> {
    wrap_runs(engine, &[TextRun::new(text, color)], font, max_width)
}

fn merge_pieces(pieces: Vec<Piece>) -> CodeLine {
    let mut line: CodeLine = Vec::new();
    for p in pieces {
        match line.last_mut() {
            Some(last) if last.color == p.color && last.font == p.font => {
                last.text.push_str(&p.text);
            }
            _ => line.push(TextRun {
                text: p.text,
                color: p.color,
                font: p.font,
            }),
        }
    }
    line
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
