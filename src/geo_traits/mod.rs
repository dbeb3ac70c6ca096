//! Traits for accessing coordinate data independently of the concrete geometry family.

pub use coord::CoordTrait;

mod coord;
