//! Demo settings.

use std::path::PathBuf;

use crate::math::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Edge length of one maze cell (and of its cube).
    pub cube_size: f32,
    /// Player speed in world units per second.
    pub player_speed: f32,
    pub player_start: Vec3,
    pub player_scale: f32,
    pub sphere_longitudes: u32,
    pub sphere_latitudes: u32,
    /// Image to texture the cubes and the sphere with. A checkerboard is
    /// generated when unset.
    pub texture_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "cubemaze".to_string(),
            width: 800,
            height: 800,
            target_fps: 60,
            cube_size: 4.0,
            player_speed: 2.0,
            player_start: Vec3::new(-10.0, 0.0, 0.0),
            player_scale: 1.8,
            sphere_longitudes: 10,
            sphere_latitudes: 10,
            texture_path: None,
        }
    }
}

impl Config {
    /// Parses `[--width N] [--height N] [TEXTURE]` (program name excluded).
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => config.width = parse_dimension(&arg, args.next())?,
                "--height" => config.height = parse_dimension(&arg, args.next())?,
                flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
                path => config.texture_path = Some(PathBuf::from(path)),
            }
        }

        Ok(config)
    }

    /// Target frame time in milliseconds.
    pub fn frame_time_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} expects a positive integer, got {:?}", flag, value)),
    }
}
