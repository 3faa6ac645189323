use super::clamp;

/// Ease-out cubic count-up from zero.
pub fn count_up_value(target: f64, elapsed_ms: f64, duration_ms: f64) -> i64 {
    let p = if duration_ms > 0.0 { clamp(elapsed_ms / duration_ms, 0.0, 1.0) } else { 1.0 };
    (target * (1.0 - (1.0 - p).powi(3))).round() as i64
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterState {
    pub target: u32,
    pub shown: i64,
    pub started: bool,
}

impl CounterState {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            shown: 0,
            started: false,
        }
    }

    /// Returns true only the first time; a counter animates once.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }
}
