//! Domain models for the reading tracker.
//!
//! These mirror the records kept by the storage layer, using chrono types for
//! dates. The REST layer converts them to the string-dated DTOs in `shared`.

pub mod achievement;
pub mod book;
pub mod child;
pub mod family;
pub mod genre;
pub mod level;
pub mod reading_session;

pub use achievement::*;
pub use book::*;
pub use child::*;
pub use family::*;
pub use genre::*;
pub use level::*;
pub use reading_session::*;
