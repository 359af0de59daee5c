//! CPU rasterization of surfaces.
//!
//! The [`Rasterizer`] consumes a [`Surface`](crate::surface::Surface) plus a
//! model-view and projection matrix and honors whatever render binding the
//! surface currently carries. It never computes normals itself.

mod framebuffer;
mod rasterizer;
mod shader;

pub use framebuffer::FrameBuffer;
pub use rasterizer::Rasterizer;
pub use shader::{PixelShader, ShadedVertex, SurfaceShader};
