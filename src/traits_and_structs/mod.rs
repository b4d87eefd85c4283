pub mod automata_trait;
pub mod cell;
pub mod config;
pub mod universe;
