//! Seeded self-play package that performs the trick over the core session
//! API while tracking a secret card, for bulk verification and reports.

mod config;
mod error;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use simulator::*;
pub use trace::*;
