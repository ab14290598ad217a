pub mod matches;
pub mod roster;

pub use matches::*;
pub use roster::*;
