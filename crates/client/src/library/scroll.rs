/// Scroll position of the list viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

/// Content left below the top of the viewport, in viewport heights, that
/// counts as "near the bottom".
pub const NEAR_BOTTOM_VIEWPORTS: f64 = 1.5;

impl ScrollMetrics {
    pub fn near_bottom(&self) -> bool {
        self.content_height - self.scroll_top <= self.viewport_height * NEAR_BOTTOM_VIEWPORTS
    }
}
