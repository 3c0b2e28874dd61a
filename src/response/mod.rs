//! Response module
//!
//! Reads the nested envelope of one page and rebuilds a single logical
//! response once every page has arrived.
//!
//! # Overview
//!
//! - `ResponseLayout` - Where the root entity, profile and item collection sit
//! - `ResultAccumulator` - Ordered item merge plus the first page's envelope
//! - `reassemble` - One response shaped like an ungapped page

mod accumulator;
mod layout;
mod reassembler;

pub use accumulator::ResultAccumulator;
pub use layout::{Envelope, LocatedPage, ResponseLayout};
pub use reassembler::{reassemble, ReassembledResponse};

#[cfg(test)]
mod tests;
