//! Pixel-level drawing: the canvas, gradients and mask compositing.

/// Owned RGB8 canvas and solid-colour primitives.
pub mod canvas;
/// Two-stop colour interpolation and gradient fills.
pub mod gradient;
/// Blend-weight masks and masked compositing.
pub mod mask;
