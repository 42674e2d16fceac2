#![forbid(unsafe_code)]

pub mod content;
pub mod deck;
pub mod effects;
pub mod error;
pub mod games;
pub mod model;
pub mod screen;
pub mod time;

pub use content::ArcadeContent;
pub use error::DeckError;
pub use time::Clock;
