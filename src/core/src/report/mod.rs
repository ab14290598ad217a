pub mod reporter;
pub mod snapshot;

pub use reporter::*;
pub use snapshot::*;
