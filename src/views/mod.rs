mod cancer;
mod home;
mod navbar;
mod page;
mod tabac;

pub use cancer::Cancer;
pub use home::Home;
pub use navbar::Navbar;
pub use page::AwarenessPage;
pub use tabac::Tabac;
