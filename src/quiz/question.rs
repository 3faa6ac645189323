#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct_index: usize,
}

impl Question {
    pub const fn new(prompt: &'static str, options: &'static [&'static str], correct_index: usize) -> Self {
        Self {
            prompt,
            options,
            correct_index,
        }
    }

    /// An out-of-range answer key simply never matches.
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index && option < self.options.len()
    }
}
