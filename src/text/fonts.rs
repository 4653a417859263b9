use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::text::builtin;

/// Style class a font request is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Regular,
    Bold,
    Mono,
}

/// Ordered font-file candidates per style class. The first file that loads wins.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSources {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
    pub mono: Vec<PathBuf>,
}

impl Default for FontSources {
    fn default() -> Self {
        let paths = |list: &[&str]| list.iter().map(PathBuf::from).collect::<Vec<_>>();
        Self {
            regular: paths(&[
                "C:/Windows/Fonts/segoeui.ttf",
                "C:/Windows/Fonts/arial.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
            ]),
            bold: paths(&[
                "C:/Windows/Fonts/segoeuib.ttf",
                "C:/Windows/Fonts/arialbd.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
            ]),
            mono: paths(&[
                "C:/Windows/Fonts/consola.ttf",
                "C:/Windows/Fonts/cour.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
                "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
                "/System/Library/Fonts/Menlo.ttc",
            ]),
        }
    }
}

impl FontSources {
    /// No candidates at all; every request resolves to the built-in font.
    pub fn builtin_only() -> Self {
        Self {
            regular: Vec::new(),
            bold: Vec::new(),
            mono: Vec::new(),
        }
    }

    pub fn candidates(&self, style: FontStyle) -> &[PathBuf] {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Mono => &self.mono,
        }
    }
}

/// An outline font registered with the shaping context.
#[derive(Clone)]
pub struct OutlineFace {
    pub(crate) family: Arc<str>,
    pub(crate) path: PathBuf,
    pub(crate) data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for OutlineFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFace")
            .field("family", &self.family)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub enum FontFace {
    Outline(Arc<OutlineFace>),
    Builtin,
}

impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Outline(a), Self::Outline(b)) => a.family == b.family && a.path == b.path,
            (Self::Builtin, Self::Builtin) => true,
            _ => false,
        }
    }
}

/// A resolved font request: a face at a pixel size.
///
/// Cheap to clone; the face bytes are shared.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub(crate) face: FontFace,
    pub(crate) style: FontStyle,
    pub(crate) size: f32,
}

impl Font {
    /// The built-in bitmap face at `size` pixels.
    pub fn builtin(style: FontStyle, size: f32) -> Self {
        Self {
            face: FontFace::Builtin,
            style,
            size: builtin::sanitize_size(size),
        }
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin)
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }
}

/// Per-run font resolver.
///
/// Each `(style, size)` request probes the candidate list once and memoizes the answer, so a
/// missing font is reported once and never retried. Font files are read and registered at most
/// once regardless of how many sizes use them.
pub(crate) struct FontBook {
    sources: FontSources,
    faces: HashMap<PathBuf, Option<Arc<OutlineFace>>>,
    resolved: HashMap<(FontStyle, u32), Font>,
}

impl FontBook {
    pub(crate) fn new(sources: FontSources) -> Self {
        Self {
            sources,
            faces: HashMap::new(),
            resolved: HashMap::new(),
        }
    }

    pub(crate) fn sources(&self) -> &FontSources {
        &self.sources
    }

    pub(crate) fn resolve(
        &mut self,
        font_ctx: &mut parley::FontContext,
        style: FontStyle,
        size: f32,
    ) -> Font {
        let size = builtin::sanitize_size(size);
        let key = (style, size.to_bits());
        if let Some(font) = self.resolved.get(&key) {
            return font.clone();
        }

        let candidates = self.sources.candidates(style).to_vec();
        let face = candidates
            .iter()
            .find_map(|path| self.face_for(font_ctx, path));

        let font = match face {
            Some(face) => Font {
                face: FontFace::Outline(face),
                style,
                size,
            },
            None => {
                if !candidates.is_empty() {
                    tracing::warn!(?style, size, "no font candidate loaded, using built-in font");
                }
                Font::builtin(style, size)
            }
        };
        self.resolved.insert(key, font.clone());
        font
    }

    fn face_for(
        &mut self,
        font_ctx: &mut parley::FontContext,
        path: &Path,
    ) -> Option<Arc<OutlineFace>> {
        if let Some(cached) = self.faces.get(path) {
            return cached.clone();
        }
        let face = load_face(font_ctx, path).map(Arc::new);
        self.faces.insert(path.to_path_buf(), face.clone());
        face
    }
}

fn load_face(font_ctx: &mut parley::FontContext, path: &Path) -> Option<OutlineFace> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "font candidate unavailable");
            return None;
        }
    };

    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    let Some(family_id) = families.first().map(|(id, _)| *id) else {
        tracing::debug!(path = %path.display(), "font file registered no families");
        return None;
    };
    let family = font_ctx.collection.family_name(family_id)?.to_string();

    Some(OutlineFace {
        family: Arc::from(family),
        path: path.to_path_buf(),
        data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
