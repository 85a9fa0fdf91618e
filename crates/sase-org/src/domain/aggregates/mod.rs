//! Aggregates module

pub mod department;
pub mod location;
pub mod position;

pub use department::Department;
pub use location::Location;
pub use position::Position;
