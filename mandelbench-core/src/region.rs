use crate::ValidationError;
use serde::Serialize;

/// Rectangle of the complex plane to sample.
///
/// Bounds are half-open: the grid covers `[re_min, re_max)` horizontally and
/// `[im_min, im_max)` vertically. A `Region` can only be built through
/// [`Region::new`], so every instance has finite bounds with `min < max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Region {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Region {
    /// Create a region, rejecting non-finite or inverted bounds.
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, ValidationError> {
        let finite = [re_min, re_max, im_min, im_max]
            .iter()
            .all(|v| v.is_finite());

        if !finite || re_min >= re_max || im_min >= im_max {
            return Err(ValidationError::InvalidRegion {
                re_min,
                re_max,
                im_min,
                im_max,
            });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    /// Extent along the real axis.
    pub fn re_span(&self) -> f64 {
        self.re_max - self.re_min
    }

    /// Extent along the imaginary axis.
    pub fn im_span(&self) -> f64 {
        self.im_max - self.im_min
    }

    /// `(re_min, re_max, im_min, im_max)`, the layout plotting tools call an extent.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (self.re_min, self.re_max, self.im_min, self.im_max)
    }
}
