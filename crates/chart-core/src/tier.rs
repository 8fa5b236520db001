// File: crates/chart-core/src/tier.rs
// Summary: The ten named rating tiers (ranges, abbreviations, colors) and threshold lookups.

use skia_safe as skia;

/// One named rating band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    pub name: &'static str,
    pub abbr: &'static str,
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
    /// Display color as 0xRRGGBB.
    pub rgb: u32,
}

const fn tier(name: &'static str, abbr: &'static str, min: i32, max: i32, rgb: u32) -> Tier {
    Tier { name, abbr, min, max, rgb }
}

/// Tiers ordered by rating, lowest first.
pub static TIERS: [Tier; 10] = [
    tier("Newbie", "Newbie", 0, 1199, 0x808080),
    tier("Pupil", "Pupil", 1200, 1399, 0x008000),
    tier("Specialist", "Specialist", 1400, 1599, 0x03a89e),
    tier("Expert", "Expert", 1600, 1899, 0x0000ff),
    tier("Candidate Master", "C. Master", 1900, 2099, 0xaa00aa),
    tier("Master", "Master", 2100, 2299, 0xff8c00),
    tier("International Master", "I. Master", 2300, 2399, 0xff8c00),
    tier("Grandmaster", "G. Master", 2400, 2599, 0xff0000),
    tier("International Grandmaster", "I.G.M.", 2600, 2999, 0xff0000),
    tier("Legendary Grandmaster", "Legendary", 3000, 4000, 0xcc0000),
];

/// Lower bounds of every tier above Newbie.
pub const THRESHOLDS: [i32; 9] = [1200, 1400, 1600, 1900, 2100, 2300, 2400, 2600, 3000];

impl Tier {
    /// Opaque display color.
    pub fn color(&self) -> skia::Color {
        skia::Color::new(0xFF00_0000 | self.rgb)
    }

    /// Tier a rating falls into. Ratings below zero are Newbie, anything from
    /// 3000 up is Legendary.
    pub fn for_rating(rating: i32) -> &'static Tier {
        TIERS
            .iter()
            .rev()
            .find(|t| rating >= t.min)
            .unwrap_or(&TIERS[0])
    }

    /// First threshold strictly greater than `rating`, if any.
    pub fn threshold_above(rating: i32) -> Option<i32> {
        THRESHOLDS.iter().copied().find(|&t| t > rating)
    }
}
