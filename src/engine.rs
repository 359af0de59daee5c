//! The demo scene.
//!
//! The [`Engine`] owns the two surfaces (a cube instanced on every maze wall
//! and the player's sphere), the textures they point at, and the rasterizer
//! that draws them. Each frame the caller feeds input to [`Engine::update`],
//! then calls [`Engine::render`] and presents [`Engine::frame_buffer`].

use crate::colors;
use crate::config::Config;
use crate::math::{Mat4, Vec3};
use crate::maze::Maze;
use crate::primitives;
use crate::render::Rasterizer;
use crate::surface::{Surface, SurfaceOptions};
use crate::texture::{Texture, TextureError, TextureStore};
use crate::window::{InputState, Key};

const FOV_Y_DEGREES: f32 = 60.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;
const CHECKER_SIZE: u32 = 64;

/// Camera above the maze, behind its first row.
const EYE: Vec3 = Vec3::new(0.0, 70.0, -55.0);
const TARGET: Vec3 = Vec3::new(0.0, 0.0, 0.0);

pub struct Engine {
    config: Config,
    rasterizer: Rasterizer,
    textures: TextureStore,
    cube: Surface,
    sphere: Surface,
    maze: Maze,
    player: Vec3,
    player_cell: Option<(usize, usize)>,
    view: Mat4,
    projection: Mat4,
    use_texture: bool,
    use_color: bool,
    use_lighting: bool,
}

impl Engine {
    /// Builds the scene. A texture that fails to load aborts construction.
    pub fn new(config: &Config) -> Result<Self, TextureError> {
        let mut textures = TextureStore::new();
        let texture_id = match &config.texture_path {
            Some(path) => textures.load(path)?,
            None => textures.insert(Texture::checkerboard(
                CHECKER_SIZE,
                colors::CHECKER_LIGHT,
                colors::CHECKER_DARK,
            )),
        };

        let mut cube = primitives::cube();
        cube.set_diffuse_color(colors::WALL);
        let mut sphere = primitives::sphere(config.sphere_longitudes, config.sphere_latitudes);
        sphere.set_diffuse_color(colors::PLAYER);

        for surface in [&mut cube, &mut sphere] {
            surface.set_texture_id(texture_id);
            surface.enable_option(SurfaceOptions::USE_TEXTURE);
            surface.enable_option(SurfaceOptions::USE_LIGHTING);
        }

        let maze = Maze::default();
        let player = config.player_start;
        let player_cell = maze.cell_at(player.x, player.z, config.cube_size);

        log::info!(
            "scene ready: {} walls, cube {} tris, sphere {} tris",
            maze.walls().count(),
            cube.triangle_count(),
            sphere.triangle_count()
        );

        Ok(Self {
            config: config.clone(),
            rasterizer: Rasterizer::new(config.width, config.height),
            textures,
            cube,
            sphere,
            maze,
            player,
            player_cell,
            view: Mat4::look_at_lh(EYE, TARGET, Vec3::Y),
            projection: Self::projection_for(config.width, config.height),
            use_texture: true,
            use_color: true,
            use_lighting: true,
        })
    }

    fn projection_for(width: u32, height: u32) -> Mat4 {
        let aspect_ratio = width as f32 / height.max(1) as f32;
        Mat4::perspective_lh(FOV_Y_DEGREES.to_radians(), aspect_ratio, Z_NEAR, Z_FAR)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.rasterizer.resize(width, height);
        self.projection = Self::projection_for(width, height);
    }

    pub fn cube(&self) -> &Surface {
        &self.cube
    }

    pub fn sphere(&self) -> &Surface {
        &self.sphere
    }

    pub fn player_position(&self) -> Vec3 {
        self.player
    }

    pub fn player_cell(&self) -> Option<(usize, usize)> {
        self.player_cell
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.rasterizer.as_bytes()
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Advances the scene by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        let step = self.config.player_speed * dt;
        if input.is_held(Key::Right) {
            self.player.x += step;
        }
        if input.is_held(Key::Left) {
            self.player.x -= step;
        }
        if input.is_held(Key::Up) {
            self.player.z += step;
        }
        if input.is_held(Key::Down) {
            self.player.z -= step;
        }

        let cell = self
            .maze
            .cell_at(self.player.x, self.player.z, self.config.cube_size);
        if cell != self.player_cell {
            log::debug!("player entered cell {:?}", cell);
            self.player_cell = cell;
        }

        if input.was_pressed(Key::ToggleTexture) {
            self.use_texture = !self.use_texture;
            self.sphere
                .set_option(SurfaceOptions::USE_TEXTURE, self.use_texture);
        }
        if input.was_pressed(Key::ToggleColor) {
            self.use_color = !self.use_color;
            self.sphere
                .set_option(SurfaceOptions::USE_COLOR, self.use_color);
        }
        if input.was_pressed(Key::ToggleLighting) {
            self.use_lighting = !self.use_lighting;
            self.sphere
                .set_option(SurfaceOptions::USE_LIGHTING, self.use_lighting);
        }
    }

    /// Draws every wall cube and the player sphere.
    pub fn render(&mut self) {
        self.rasterizer.clear(colors::BACKGROUND);
        self.rasterizer.clear_depth_buffer();

        let size = self.config.cube_size;
        let half = size / 2.0;
        self.cube.set_diffuse_color(colors::WALL);
        for (row, col) in self.maze.walls() {
            let (x, z) = self.maze.cell_center(row, col, size);
            let model_view =
                self.view * Mat4::translation(x, 0.0, z) * Mat4::scaling(half, half, half);
            self.rasterizer
                .draw_surface(&self.cube, &model_view, &self.projection, &self.textures);
        }

        let scale = self.config.player_scale;
        self.sphere.set_diffuse_color(colors::PLAYER);
        let model_view = self.view
            * Mat4::translation(self.player.x, self.player.y, self.player.z)
            * Mat4::scaling(scale, scale, scale);
        self.rasterizer
            .draw_surface(&self.sphere, &model_view, &self.projection, &self.textures);
    }
}
