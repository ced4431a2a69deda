//! Reactive coordination core for the point-data viewer.
//!
//! Turns raw map clicks into a stable target location, joins that location
//! with the externally-owned product/date selection, and decides when a
//! point-data fetch is actually warranted. Map rendering stays behind the
//! [`MapUnproject`] and [`MarkerLayer`] seams.

pub mod basemap;
pub mod click;
pub mod location;
pub mod marker;
pub mod session;
pub mod sync;

pub use basemap::*;
pub use click::*;
pub use location::*;
pub use marker::*;
pub use session::*;
pub use sync::*;
