/// Transient notification. Every `show` starts a new generation; an expiry
/// only hides the toast if no newer message has replaced it since.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Whether an expiry for `generation` would still hide something.
    pub fn is_current(&self, generation: u64) -> bool {
        self.visible && generation == self.generation
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.visible = false;
        true
    }
}
