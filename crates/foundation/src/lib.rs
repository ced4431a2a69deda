pub mod lonlat;
pub mod mercator;
pub mod screen;

// Foundation crate: small, well-tested primitives only.
pub use lonlat::*;
pub use mercator::*;
pub use screen::*;
