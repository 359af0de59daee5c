//! Render options and the routine table they resolve to.

use bitflags::bitflags;

bitflags! {
    /// Independent rendering behaviors of a surface.
    ///
    /// Bits outside the named flags are kept as given but never influence
    /// which routine is bound.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SurfaceOptions: u32 {
        /// Sample the bound texture.
        const USE_TEXTURE = 1 << 0;
        /// Multiply by the diffuse color.
        const USE_COLOR = 1 << 1;
        /// Apply per-vertex (Gouraud) lighting.
        const USE_LIGHTING = 1 << 2;

        /// Options every new surface starts with.
        const DEFAULT = Self::USE_COLOR.bits();
    }
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The draw routine a surface is currently bound to.
///
/// One variant per combination of the three known option bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderBinding {
    /// Fallback when texture, color and lighting are all off.
    Plain,
    Textured,
    Colored,
    TexturedColored,
    Lit,
    LitTextured,
    LitColored,
    LitTexturedColored,
}

/// Indexed by the known bits of a [`SurfaceOptions`] value.
const DISPATCH: [RenderBinding; 8] = [
    RenderBinding::Plain,              // ---
    RenderBinding::Textured,           // --T
    RenderBinding::Colored,            // -C-
    RenderBinding::TexturedColored,    // -CT
    RenderBinding::Lit,                // L--
    RenderBinding::LitTextured,        // L-T
    RenderBinding::LitColored,         // LC-
    RenderBinding::LitTexturedColored, // LCT
];

impl RenderBinding {
    /// Pure lookup of the routine matching `options`.
    pub fn resolve(options: SurfaceOptions) -> Self {
        DISPATCH[(options & SurfaceOptions::all()).bits() as usize]
    }

    /// The option set this routine implements (inverse of [`resolve`](Self::resolve)).
    pub fn options(self) -> SurfaceOptions {
        let index = DISPATCH
            .iter()
            .position(|&binding| binding == self)
            .unwrap_or_default();
        SurfaceOptions::from_bits_truncate(index as u32)
    }

    pub fn uses_texture(self) -> bool {
        self.options().contains(SurfaceOptions::USE_TEXTURE)
    }

    pub fn uses_color(self) -> bool {
        self.options().contains(SurfaceOptions::USE_COLOR)
    }

    pub fn uses_lighting(self) -> bool {
        self.options().contains(SurfaceOptions::USE_LIGHTING)
    }
}

impl std::fmt::Display for RenderBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RenderBinding::Plain => "plain",
            RenderBinding::Textured => "textured",
            RenderBinding::Colored => "colored",
            RenderBinding::TexturedColored => "textured+colored",
            RenderBinding::Lit => "lit",
            RenderBinding::LitTextured => "lit+textured",
            RenderBinding::LitColored => "lit+colored",
            RenderBinding::LitTexturedColored => "lit+textured+colored",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_color_only() {
        assert_eq!(SurfaceOptions::default(), SurfaceOptions::USE_COLOR);
        assert_eq!(
            RenderBinding::resolve(SurfaceOptions::DEFAULT),
            RenderBinding::Colored
        );
    }

    #[test]
    fn every_combination_round_trips() {
        for bits in 0..8u32 {
            let options = SurfaceOptions::from_bits_truncate(bits);
            assert_eq!(RenderBinding::resolve(options).options(), options);
        }
    }

    #[test]
    fn all_off_resolves_to_plain() {
        assert_eq!(
            RenderBinding::resolve(SurfaceOptions::empty()),
            RenderBinding::Plain
        );
    }

    #[test]
    fn unknown_bits_are_inert() {
        let noisy = SurfaceOptions::USE_LIGHTING | SurfaceOptions::from_bits_retain(0xF0);
        assert_eq!(noisy.bits(), 0xF4);
        assert_eq!(RenderBinding::resolve(noisy), RenderBinding::Lit);
    }

    #[test]
    fn routine_needs_match_bits() {
        let b = RenderBinding::LitTextured;
        assert!(b.uses_texture());
        assert!(b.uses_lighting());
        assert!(!b.uses_color());
    }
}
