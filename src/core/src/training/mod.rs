pub mod compare;
pub mod config;
pub mod finance;
pub mod growth;
pub mod simulator;

pub use compare::*;
pub use config::*;
pub use finance::*;
pub use growth::*;
pub use simulator::*;
