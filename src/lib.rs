//! A maze of cubes and a player sphere, drawn by a CPU rasterizer.
//!
//! The interesting part is [`surface`]: a triangle container that owns its
//! storage, derives face and flat vertex normals, and keeps the draw routine
//! it is bound to in sync with its render options. SDL2 is only used for the
//! window and input.
//!
//! # Quick Start
//!
//! ```ignore
//! use cubemaze::prelude::*;
//!
//! let config = Config::default();
//! let mut window = Window::new(&config.title, config.width, config.height)?;
//! let mut engine = Engine::new(&config)?;
//! engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod math;
pub mod maze;
pub mod primitives;
pub mod render;
pub mod surface;
pub mod texture;
pub mod window;

pub use config::Config;
pub use engine::Engine;
pub use surface::{NormalSource, RenderBinding, Surface, SurfaceOptions, Triangle, Vertex};
pub use texture::{TextureError, TextureId, TextureStore};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::engine::Engine;

    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};

    pub use crate::render::Rasterizer;
    pub use crate::surface::{
        NormalSource, RenderBinding, Surface, SurfaceOptions, Triangle, Vertex,
    };
    pub use crate::texture::{Texture, TextureId, TextureStore};

    pub use crate::window::{FrameLimiter, InputState, Key, Window, WindowEvent};
}
