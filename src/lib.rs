#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auxiliary;
pub mod error;
pub mod projects;
pub mod traits_and_structs;

pub use error::Error;
pub use traits_and_structs::cell::Cell;
pub use traits_and_structs::config::{Adjacency, LifeConfig};
pub use traits_and_structs::universe::Universe;
