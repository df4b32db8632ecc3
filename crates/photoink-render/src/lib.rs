//! PhotoInk Render Library
//!
//! Renderer-agnostic frame descriptions for the PhotoInk annotation
//! model, plus the backend trait a host implements to paint them.

mod frame;
mod renderer;

pub use frame::{Frame, LabelPrimitive, StrokePrimitive};
pub use renderer::{RenderResult, Renderer, RendererError};
