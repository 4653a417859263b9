use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{BrandpressError, BrandpressResult};
use crate::layout::flow::PageGeometry;
use crate::text::fonts::FontSources;

/// Settings for one generation run. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub fonts: FontSources,
    /// Document raster resolution.
    pub px_per_mm: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            fonts: FontSources::default(),
            px_per_mm: 3.5,
        }
    }
}

impl RunConfig {
    pub fn from_json(json: &str) -> BrandpressResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| BrandpressError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> BrandpressResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| BrandpressError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> BrandpressResult<()> {
        if !self.px_per_mm.is_finite() || self.px_per_mm <= 0.0 {
            return Err(BrandpressError::validation("px_per_mm must be positive"));
        }
        if self.px_per_mm > 20.0 {
            return Err(BrandpressError::validation(
                "px_per_mm above 20 produces pages over 4000 px wide",
            ));
        }
        Ok(())
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::a4(self.px_per_mm)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
