//! Multi-stop gradient sampling
//!
//! A gradient is a piecewise-linear path through its stops. Sampling it at
//! `steps` evenly spaced positions includes both endpoints exactly.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::gradient;
use crate::{Result, SwatchError};

use super::shades::{mix_colors, step_fraction};
use super::Palette;

/// Validated gradient definition: at least two stops and two steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GradientFields")]
pub struct GradientSpec {
    stops: Vec<Rgb>,
    steps: usize,
}

/// Unvalidated wire form of [`GradientSpec`]
#[derive(Deserialize)]
struct GradientFields {
    stops: Vec<Rgb>,
    steps: usize,
}

impl TryFrom<GradientFields> for GradientSpec {
    type Error = SwatchError;

    fn try_from(fields: GradientFields) -> Result<Self> {
        Self::new(fields.stops, fields.steps)
    }
}

impl GradientSpec {
    /// Create a gradient
    ///
    /// # Errors
    ///
    /// Returns `SwatchError::InvalidParameter` if there are fewer than two
    /// stops or fewer than two steps
    pub fn new(stops: Vec<Rgb>, steps: usize) -> Result<Self> {
        if stops.len() < gradient::MIN_STOPS {
            return Err(SwatchError::invalid_parameter("gradient stops", stops.len()));
        }
        if steps < gradient::MIN_STEPS {
            return Err(SwatchError::invalid_parameter("gradient steps", steps));
        }
        Ok(Self { stops, steps })
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sample the gradient at every step
    pub fn sample(&self) -> Palette {
        generate_gradient(&self.stops, self.steps)
    }
}

/// Sample `steps` colors along the path through `stops`.
///
/// Step `i` sits at position `p = i / (steps - 1) * (stops - 1)` and mixes
/// `stops[floor(p)]` with the next stop by the fractional part of `p`. The
/// final step is the last stop exactly.
///
/// Degenerate input does not fail: no stops or zero steps give an empty
/// palette, a single stop is repeated, and a single step is the first stop.
pub fn generate_gradient(stops: &[Rgb], steps: usize) -> Palette {
    let Some(&last) = stops.last() else {
        return Vec::new();
    };
    let segments = stops.len() - 1;

    (0..steps)
        .map(|i| {
            let position = step_fraction(i, steps) * segments as f64;
            let index = position.floor() as usize;
            if index >= segments {
                return last;
            }
            let t = position - index as f64;
            mix_colors(stops[index], stops[index + 1], t * 100.0)
        })
        .collect()
}
