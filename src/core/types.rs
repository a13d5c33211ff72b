use serde::{Deserialize, Serialize};

use crate::error::{StripError, StripResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins reserved around the plot body for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    #[must_use]
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub fn uniform(px: f64) -> Self {
        Self::new(px, px, px, px)
    }

    /// Checks margins against the viewport they pad; a positive plot body
    /// must remain on both axes.
    pub fn validate(self, viewport: Viewport) -> StripResult<Self> {
        let all = [self.left, self.right, self.top, self.bottom];
        if all.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(StripError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.left + self.right >= f64::from(viewport.width)
            || self.top + self.bottom >= f64::from(viewport.height)
        {
            return Err(StripError::InvalidData(
                "margins leave no plot body inside the viewport".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}
