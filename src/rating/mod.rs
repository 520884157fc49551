//! Rating rendering: star decomposition and summary calculation.

use serde::{Deserialize, Serialize};

/// Total star slots in the visual rating scale.
const STAR_SCALE: u8 = 5;

/// A rating's decomposition into star glyphs.
///
/// A half star counts as one visual slot, so `full + half + empty` is
/// always [`STAR_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// Decompose a rating into full, half and empty star counts.
///
/// Ratings are clamped to `[0, 5]` first; out-of-range and non-finite
/// inputs must never panic or produce negative counts. The half slot lights
/// up when the fractional part reaches `0.5`.
pub fn star_breakdown(rating: f64) -> StarBreakdown {
    let clamped = if rating.is_finite() {
        rating.clamp(0.0, f64::from(STAR_SCALE))
    } else {
        0.0
    };
    let full = clamped.floor() as u8;
    let half = u8::from(clamped - clamped.floor() >= 0.5);
    StarBreakdown {
        full,
        half,
        empty: STAR_SCALE - full - half,
    }
}

/// Aggregate rating over a party's full review history.
///
/// `average` is kept at full precision; one-decimal rounding happens at
/// display time via [`RatingSummary::display_average`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub total: u32,
}

impl RatingSummary {
    /// The empty summary: no reviews, average pinned to zero.
    pub fn empty() -> Self {
        Self {
            average: 0.0,
            total: 0,
        }
    }

    /// One-decimal display form of the average, e.g. `"4.5"`.
    pub fn display_average(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Star decomposition of the full-precision average.
    pub fn stars(&self) -> StarBreakdown {
        star_breakdown(self.average)
    }
}

/// Arithmetic mean over a collection of ratings.
///
/// An empty collection yields the zero summary rather than an error.
/// Individual ratings are assumed already validated upstream.
pub fn summarize(ratings: impl IntoIterator<Item = f64>) -> RatingSummary {
    let mut sum = 0.0;
    let mut total: u32 = 0;
    for rating in ratings {
        sum += rating;
        total += 1;
    }
    if total == 0 {
        return RatingSummary::empty();
    }
    RatingSummary {
        average: sum / f64::from(total),
        total,
    }
}
