mod chrome;
mod content_root;
mod modal;
mod quiz;
mod runtime;

pub use chrome::{ BackToTop, ScrollProgress, SearchBox, ThemeToggle, Toast, Toc };
pub use content_root::ContentRoot;
pub use modal::{ CheatSheetButton, Modal };
pub use quiz::Quiz;
pub use runtime::use_page;
