use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{BrandpressError, BrandpressResult};
use crate::layout::flow::Document;
use crate::output::pdf::encode_pdf;
use crate::paint::canvas::Canvas;

/// Destination for finished artifacts, addressed by file name.
pub trait ArtifactSink {
    fn write_image(&mut self, name: &str, canvas: &Canvas) -> BrandpressResult<()>;

    fn write_document(&mut self, name: &str, doc: &Document) -> BrandpressResult<()>;
}

/// Writes PNG and PDF files into an existing directory.
#[derive(Clone, Debug)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    /// Fails with an output error when `dir` is not an existing directory.
    pub fn open(dir: impl Into<PathBuf>) -> BrandpressResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(BrandpressError::output(format!(
                "output directory '{}' does not exist",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ArtifactSink for FsSink {
    fn write_image(&mut self, name: &str, canvas: &Canvas) -> BrandpressResult<()> {
        let path = self.path(name);
        let img = canvas.to_rgb_image()?;
        img.save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))
            .map_err(|e| BrandpressError::output(format!("{e:#}")))?;
        tracing::info!(path = %path.display(), "created image");
        Ok(())
    }

    fn write_document(&mut self, name: &str, doc: &Document) -> BrandpressResult<()> {
        let path = self.path(name);
        let bytes = encode_pdf(doc)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("write pdf '{}'", path.display()))
            .map_err(|e| BrandpressError::output(format!("{e:#}")))?;
        tracing::info!(path = %path.display(), pages = doc.page_count(), "created document");
        Ok(())
    }
}

/// Keeps artifacts in memory, in write order.
#[derive(Clone, Debug, Default)]
pub struct InMemorySink {
    order: Vec<String>,
    images: BTreeMap<String, Canvas>,
    documents: BTreeMap<String, Document>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifact names in the order they were written.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn image(&self, name: &str) -> Option<&Canvas> {
        self.images.get(name)
    }

    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    pub fn images(&self) -> impl Iterator<Item = (&str, &Canvas)> {
        self.images.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn documents(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.documents.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn record(&mut self, name: &str) {
        if !self.order.iter().any(|n| n == name) {
            self.order.push(name.to_string());
        }
    }
}

impl ArtifactSink for InMemorySink {
    fn write_image(&mut self, name: &str, canvas: &Canvas) -> BrandpressResult<()> {
        self.record(name);
        self.images.insert(name.to_string(), canvas.clone());
        Ok(())
    }

    fn write_document(&mut self, name: &str, doc: &Document) -> BrandpressResult<()> {
        self.record(name);
        self.documents.insert(name.to_string(), doc.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
