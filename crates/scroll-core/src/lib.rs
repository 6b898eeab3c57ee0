pub mod constants;
pub mod css;
pub mod math;
pub mod parallax;
pub mod schedule;
pub mod scroll;
pub mod viewport;

pub use parallax::*;
pub use schedule::*;
pub use scroll::*;
pub use viewport::*;
