//! Texture decoding and the id space surfaces refer to.
//!
//! A [`Surface`](crate::surface::Surface) only stores an opaque
//! [`TextureId`]. The pixels live in a [`TextureStore`] owned by whoever
//! drives the rasterizer.

use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque texture handle. `TextureId::NONE` (0) means "no texture bound".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: Self = TextureId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[derive(Debug)]
pub enum TextureError {
    /// The file could not be opened or decoded.
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    /// The file decoded to an image with no pixels.
    Empty { path: PathBuf },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Image { path, source } => {
                write!(f, "failed to load texture {}: {}", path.display(), source)
            }
            TextureError::Empty { path } => {
                write!(f, "texture {} has no pixels", path.display())
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Image { source, .. } => Some(source),
            TextureError::Empty { .. } => None,
        }
    }
}

/// Represents a 2D texture for texture mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // ARGB8888
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from an image file (BMP, PNG, JPG, ...).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| TextureError::Image {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty {
                path: path.to_path_buf(),
            });
        }

        let data = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Procedural two-color checkerboard of `size` x `size` pixels with
    /// 8 squares per side.
    pub fn checkerboard(size: u32, a: u32, b: u32) -> Self {
        let size = size.max(1);
        let square = (size / 8).max(1);
        let data = (0..size * size)
            .map(|i| {
                let (x, y) = (i % size, i / size);
                if ((x / square) + (y / square)) % 2 == 0 {
                    a
                } else {
                    b
                }
            })
            .collect();
        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// UVs wrap (repeat). V is flipped so that v=0 is the bottom row.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let u = u.rem_euclid(1.0);
        let v = (1.0 - v).rem_euclid(1.0);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Owns decoded textures and hands out ids, starting at 1.
#[derive(Default)]
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and register it.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<TextureId, TextureError> {
        let texture = Texture::from_file(path.as_ref())?;
        log::info!(
            "loaded texture {} ({}x{})",
            path.as_ref().display(),
            texture.width(),
            texture.height()
        );
        Ok(self.insert(texture))
    }

    pub fn insert(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() as u32)
    }

    /// `None` for `TextureId::NONE` and for ids this store never issued.
    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.textures.get(index)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
