//! Immutable compressed-sparse-row graphs built from plain edge lists.
//!
//! Node identifiers in the input are arbitrary, possibly sparse integers.
//! Loading compacts them into a dense index space in order of first
//! appearance and assembles the row offsets, column indices and values
//! arrays in two passes over the source.

pub mod graphs;
pub mod utils;
