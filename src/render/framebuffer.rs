//! Color and depth buffers.
//!
//! The depth buffer stores 1/w (reciprocal of clip-space W) per pixel. 1/w
//! interpolates linearly in screen space; larger values are closer to the
//! camera, and 0.0 means "infinitely far".

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, clear_color: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![clear_color; size],
            depth_buffer: vec![0.0; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(0.0);
    }

    /// Writes `color` if `inv_depth` is nearer than what the pixel holds.
    /// Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, inv_depth: f32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            if inv_depth > self.depth_buffer[idx] {
                self.depth_buffer[idx] = inv_depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Color buffer as ARGB8888 bytes, ready for an SDL streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1; the slice covers
        // exactly the bytes of `color_buffer` and borrows it immutably.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * std::mem::size_of::<u32>(),
            )
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_test_keeps_nearest() {
        let mut fb = FrameBuffer::new(4, 4, 0);
        fb.set_pixel_with_depth(1, 1, 0.5, 0xAA);
        fb.set_pixel_with_depth(1, 1, 0.2, 0xBB);
        assert_eq!(fb.pixel(1, 1), Some(0xAA));
        fb.set_pixel_with_depth(1, 1, 0.9, 0xCC);
        assert_eq!(fb.pixel(1, 1), Some(0xCC));
    }

    #[test]
    fn clear_depth_reopens_pixels() {
        let mut fb = FrameBuffer::new(2, 2, 0);
        fb.set_pixel_with_depth(0, 0, 0.5, 1);
        fb.clear_depth();
        fb.set_pixel_with_depth(0, 0, 0.1, 2);
        assert_eq!(fb.pixel(0, 0), Some(2));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2, 7);
        fb.set_pixel_with_depth(-1, 0, 1.0, 1);
        fb.set_pixel_with_depth(2, 0, 1.0, 1);
        assert_eq!(fb.pixel(2, 0), None);
        assert_eq!(fb.as_bytes().len(), 16);
    }
}
