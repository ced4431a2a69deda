pub mod dataset;
pub mod product;
pub mod selection;

pub use dataset::*;
pub use product::*;
pub use selection::*;
