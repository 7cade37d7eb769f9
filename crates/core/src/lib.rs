//! Core trick logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod events;
pub mod patter;
pub mod rng;
pub mod session;
pub mod trick;

pub use cards::*;
pub use deck::*;
pub use events::*;
pub use patter::*;
pub use rng::*;
pub use session::*;
pub use trick::*;
