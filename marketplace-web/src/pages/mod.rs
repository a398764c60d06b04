//! Page modules

pub mod explore;
pub mod home;

pub use explore::ExplorePage;
pub use home::HomePage;
