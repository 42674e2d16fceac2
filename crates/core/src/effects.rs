//! Random parameters for the decorative hearts and the final confetti burst.

use rand::Rng;
use rand::seq::IndexedRandom;

pub const CONFETTI_COUNT: usize = 120;
/// How long a burst stays on screen before it is cleared.
pub const CONFETTI_LIFETIME_MS: u64 = 2600;

pub const HEART_GLYPHS: [&str; 5] = ["❤", "💗", "💖", "💘", "💝"];
pub const HEART_POOL_SIZE: usize = 10;
pub const HEART_SPAWN_INTERVAL_MS: u64 = 450;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub left_vw: f32,
    pub hue: u16,
    pub drift_px: f32,
    pub fall_vh: f32,
    pub rotation_deg: f32,
    pub duration_ms: u32,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.random_range(0.0..100.0),
            hue: rng.random_range(0..360),
            drift_px: rng.random_range(-120.0..120.0),
            fall_vh: rng.random_range(100.0..180.0),
            rotation_deg: rng.random_range(-360.0..360.0),
            duration_ms: rng.random_range(1400..2300),
        }
    }
}

/// A full burst of `count` pieces.
pub fn confetti_burst<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count).map(|_| ConfettiPiece::random(rng)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartSprite {
    pub glyph: &'static str,
    pub left_vw: f32,
    pub duration_s: f32,
    pub font_px: f32,
    pub opacity: f32,
}

impl HeartSprite {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            glyph: HEART_GLYPHS.choose(rng).copied().unwrap_or("❤"),
            left_vw: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(6.0..12.0),
            font_px: rng.random_range(14.0..32.0),
            opacity: rng.random_range(0.10..0.28),
        }
    }
}
