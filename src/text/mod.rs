//! Font resolution, measurement and drawing of styled text runs.
//!
//! Outline fonts are shaped with Parley and rasterised with `vello_cpu`; when no candidate file
//! loads, a built-in bitmap face takes over so text still measures and draws deterministically.

pub(crate) mod builtin;
pub mod engine;
pub mod fonts;
pub mod runs;
pub mod wrap;

#[cfg(test)]
#[path = "../../tests/unit/text/fixtures.rs"]
pub(crate) mod fixtures;
