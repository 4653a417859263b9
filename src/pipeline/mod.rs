//! The full branded artifact set: logos, screenshots, a video thumbnail and three documents.

pub mod brand;
pub mod config;
pub mod documents;
pub mod logos;
pub mod palette;
pub mod scenes;

use crate::foundation::error::BrandpressResult;
use crate::output::sink::ArtifactSink;
use crate::pipeline::config::RunConfig;
use crate::pipeline::documents::DocumentKind;
use crate::pipeline::logos::{LOGO_SIZES, logo, logo_name};
use crate::pipeline::scenes::Scene;
use crate::text::engine::TextEngine;

/// Which half of the artifact set a run produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Images,
    Documents,
}

impl Selection {
    fn images(self) -> bool {
        matches!(self, Self::All | Self::Images)
    }

    fn documents(self) -> bool {
        matches!(self, Self::All | Self::Documents)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub images: usize,
    pub documents: usize,
    pub pages: usize,
    pub page_breaks: usize,
    pub truncated_rows: usize,
}

/// Produce the selected artifacts in publication order and hand each to `sink`.
///
/// Logos come first (largest first), then the screenshots and thumbnail, then the documents. The
/// first error stops the run; artifacts already written stay written.
#[tracing::instrument(skip(config, sink))]
pub fn run(
    config: &RunConfig,
    sink: &mut dyn ArtifactSink,
    selection: Selection,
) -> BrandpressResult<RunSummary> {
    config.validate()?;
    let mut engine = TextEngine::new(config.fonts.clone());
    let mut summary = RunSummary::default();

    if selection.images() {
        for size in LOGO_SIZES {
            let name = logo_name(size);
            checked(&name, sink.write_image(&name, &logo(size)?))?;
            summary.images += 1;
        }
        for scene in Scene::ALL {
            let canvas = scene.render(&mut engine)?;
            checked(scene.file_name(), sink.write_image(scene.file_name(), &canvas))?;
            summary.images += 1;
        }
    }

    if selection.documents() {
        let geometry = config.geometry();
        for kind in DocumentKind::ALL {
            let doc = kind.render(&mut engine, &geometry)?;
            checked(kind.file_name(), sink.write_document(kind.file_name(), &doc))?;
            summary.documents += 1;
            summary.pages += doc.page_count();
            summary.page_breaks += doc.stats.page_breaks;
            summary.truncated_rows += doc.stats.truncated_rows;
        }
    }

    tracing::info!(
        images = summary.images,
        documents = summary.documents,
        pages = summary.pages,
        "run complete"
    );
    Ok(summary)
}

/// Log a failed write at a level that reflects whether the output itself is unusable.
fn checked(artifact: &str, written: BrandpressResult<()>) -> BrandpressResult<()> {
    if let Err(err) = &written {
        if err.is_fatal() {
            tracing::error!(artifact, error = %err, "output failed, run aborted");
        } else {
            tracing::warn!(artifact, error = %err, "artifact rejected, run aborted");
        }
    }
    written
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
