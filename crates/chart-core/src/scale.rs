// File: crates/chart-core/src/scale.rs
// Summary: Tier-aligned rating domain resolution and the value (Y) to pixel transform.

use crate::tier::Tier;

/// Vertical rating domain of one redraw.
/// Contract: `min < max`.
///
/// Bounds are `i64` so snapping and widening stay exact for any `i32` rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingDomain {
    pub min: i64,
    pub max: i64,
}

impl RatingDomain {
    /// Resolve the domain for a set of ratings; `None` when there are none.
    ///
    /// The top edge snaps to the first tier threshold strictly above the
    /// highest rating, or to the next multiple of 100 above it when the rating
    /// already sits past the last threshold. The bottom edge rounds down to a
    /// multiple of 100.
    pub fn resolve<I: IntoIterator<Item = i32>>(ratings: I) -> Option<Self> {
        let mut iter = ratings.into_iter();
        let first = iter.next()?;
        let (raw_min, raw_max) = iter.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r)));

        let mut max = match Tier::threshold_above(raw_max) {
            Some(t) => i64::from(t),
            None => ceil_to_hundred(i64::from(raw_max) + 1),
        };
        let mut min = i64::from(raw_min).div_euclid(100) * 100;
        if min == max {
            min -= 100;
            max += 100;
        }
        Some(Self { min, max })
    }

    pub fn span(&self) -> i64 { self.max - self.min }

    /// Whether `rating` lies inside the closed domain.
    pub fn contains(&self, rating: i32) -> bool {
        (self.min..=self.max).contains(&i64::from(rating))
    }
}

fn ceil_to_hundred(v: i64) -> i64 {
    -((-v).div_euclid(100) * 100)
}

/// Linear map from rating to pixel row over a plot band.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub height_px: f32,
    pub domain: RatingDomain,
}

impl ValueScale {
    pub fn new(top_px: f32, height_px: f32, domain: RatingDomain) -> Self {
        Self { top_px, height_px, domain }
    }

    #[inline]
    pub fn to_px(&self, rating: i32) -> f32 {
        let span = self.domain.span().max(1) as f64;
        let frac = (f64::from(rating) - self.domain.min as f64) / span;
        self.top_px + self.height_px - (frac * f64::from(self.height_px)) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn top_snaps_to_next_threshold() {
        let d = RatingDomain::resolve([1800, 2050]).unwrap();
        assert_eq!(d.max, 2100);
        assert_eq!(d.min, 1800);
    }

    #[test]
    fn top_exactly_on_threshold_moves_to_the_next_one() {
        let d = RatingDomain::resolve([1900]).unwrap();
        assert_eq!(d, RatingDomain { min: 1900, max: 2100 });
    }

    #[test]
    fn above_all_thresholds_rounds_up_past_max() {
        assert_eq!(RatingDomain::resolve([3100]).unwrap().max, 3200);
        assert_eq!(RatingDomain::resolve([3099]).unwrap().max, 3100);
        assert_eq!(RatingDomain::resolve([3000]).unwrap().max, 3100);
    }

    #[test]
    fn flat_series_never_collapses() {
        let d = RatingDomain::resolve([1500, 1500, 1500]).unwrap();
        assert_eq!(d, RatingDomain { min: 1500, max: 1600 });
        assert!(d.min < d.max);
    }

    #[test]
    fn bottom_rounds_down_including_negatives() {
        assert_eq!(RatingDomain::resolve([1234, 1300]).unwrap().min, 1200);
        assert_eq!(RatingDomain::resolve([-30, 100]).unwrap().min, -100);
    }

    #[test]
    fn empty_has_no_domain() {
        assert!(RatingDomain::resolve(Vec::<i32>::new()).is_none());
    }

    #[test]
    fn value_scale_maps_edges() {
        let s = ValueScale::new(65.0, 230.0, RatingDomain { min: 1400, max: 1900 });
        assert_relative_eq!(s.to_px(1400), 295.0);
        assert_relative_eq!(s.to_px(1900), 65.0);
        assert_relative_eq!(s.to_px(1650), 180.0);
    }

    #[test]
    fn extreme_ratings_resolve_without_overflow() {
        let top = RatingDomain::resolve([i32::MAX]).unwrap();
        assert_eq!(top.max, 2_147_483_700);
        assert!(top.min < top.max);

        let wide = RatingDomain::resolve([-2_000_000_000, 2_000_000_000]).unwrap();
        assert_eq!(wide, RatingDomain { min: -2_000_000_000, max: 2_000_000_100 });
        assert_eq!(wide.span(), 4_000_000_100);

        let low = RatingDomain::resolve([i32::MIN]).unwrap();
        assert_eq!(low.min, -2_147_483_700);
        assert!(low.contains(i32::MIN));
    }

    #[test]
    fn extreme_domains_map_inside_the_band() {
        let s = ValueScale::new(65.0, 230.0, RatingDomain::resolve([i32::MIN, i32::MAX]).unwrap());
        let (hi, lo) = (s.to_px(i32::MAX), s.to_px(i32::MIN));
        assert!(hi.is_finite() && lo.is_finite());
        assert!((65.0..=295.0).contains(&hi));
        assert!((65.0..=295.0).contains(&lo));
        assert!(hi < lo);
    }
}
