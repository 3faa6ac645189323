mod counter;
mod theme_state;
mod toast;

pub use counter::{ count_up_value, CounterState };
pub use theme_state::{ ThemeController, ThemeMode, ThemeState };
pub use toast::ToastState;

pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}
