use crate::utils::clamp;

pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Percentage of the scrollable range already travelled. A page that does
/// not scroll is always at 0.
pub fn progress_percent(metrics: &ScrollMetrics) -> f64 {
    let max = metrics.scroll_height - metrics.client_height;
    let p = if max > 0.0 { (metrics.scroll_top / max) * 100.0 } else { 0.0 };
    clamp(p, 0.0, 100.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTelemetry {
    pub progress: f64,
    pub back_to_top: bool,
}

impl ScrollTelemetry {
    pub fn update(&mut self, metrics: &ScrollMetrics) {
        self.progress = progress_percent(metrics);
        self.back_to_top = metrics.scroll_top > BACK_TO_TOP_THRESHOLD;
    }

    pub fn bar_width(&self) -> String {
        format!("{}%", self.progress)
    }
}
