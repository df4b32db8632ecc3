//! Renderer trait abstraction.

use crate::frame::Frame;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for rendering backends.
///
/// A backend receives the frame description once per paint and turns
/// it into whatever command buffer its engine needs. Eraser strokes
/// must honor the clear blend so they cut through earlier ink; labels
/// are only painted when `labels_editable` is false (the host overlays
/// its own text inputs while editing).
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, frame: &Frame) -> RenderResult<()>;
}
