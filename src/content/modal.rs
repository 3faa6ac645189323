#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalEntry {
    pub title: &'static str,
    /// Trusted, hand-written markup.
    pub body: &'static str,
}

/// The single modal dialog of a page. At most one topic is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModalState {
    open: Option<&'static ModalEntry>,
}

impl ModalState {
    /// `None` (unknown key) leaves the modal as it was.
    pub fn open(&mut self, entry: Option<&'static ModalEntry>) -> bool {
        match entry {
            Some(entry) => {
                self.open = Some(entry);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&'static ModalEntry> {
        self.open
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() { "false" } else { "true" }
    }
}
