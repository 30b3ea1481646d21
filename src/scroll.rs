/// Offset (in CSS pixels) past which the scroll-to-top button appears.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

/// Distance of the viewport from the top of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset(0.0);

    /// Negative values (overscroll bounce) and NaN collapse to the top.
    pub fn new(offset: f64) -> Self {
        if offset.is_nan() || offset < 0.0 {
            Self::TOP
        } else {
            Self(offset)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ScrollOffset {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

pub fn scroll_to_top_visible(offset: impl Into<ScrollOffset>) -> bool {
    offset.into().get() > SCROLL_TO_TOP_THRESHOLD
}
