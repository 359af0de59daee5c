//! SDL2 window, frame pacing and keyboard state.

use std::collections::HashSet;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    ToggleTexture,
    ToggleColor,
    ToggleLighting,
}

impl Key {
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        match keycode {
            Keycode::Left => Some(Key::Left),
            Keycode::Right => Some(Key::Right),
            Keycode::Up => Some(Key::Up),
            Keycode::Down => Some(Key::Down),
            Keycode::T => Some(Key::ToggleTexture),
            Keycode::C => Some(Key::ToggleColor),
            Keycode::L => Some(Key::ToggleLighting),
            _ => None,
        }
    }
}

/// Held keys plus the keys that went down during the current frame.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl InputState {
    /// Forgets last frame's presses. Held keys stay held.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    /// Auto-repeat of a held key does not count as a new press.
    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_time_ms: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, frame_time_ms: u64) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_time_ms,
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < self.frame_time_ms {
            std::thread::sleep(std::time::Duration::from_millis(
                self.frame_time_ms - delta_time,
            ));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` borrows from `texture_creator` and must drop first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;
        let texture = Self::streaming_texture(&texture_creator, width, height)?;

        log::info!("opened {}x{} window", width, height);

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    fn streaming_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>, String> {
        // SAFETY: the creator is boxed and owned by the same Window as the
        // texture, and `texture` is declared before it so it drops first.
        let creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())
    }

    /// Drains pending events into `input` and reports the last window-level event.
    pub fn poll_events(&mut self, input: &mut InputState) -> WindowEvent {
        input.begin_frame();
        let mut result = WindowEvent::None;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w as u32, h as u32),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        input.key_down(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        input.key_up(key);
                    }
                }
                _ => {}
            }
        }

        result
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.texture = Self::streaming_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        log::debug!("window resized to {}x{}", width, height);
        Ok(())
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
