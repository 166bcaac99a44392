//! Payload buffers for hello functions.
//!
//! This crate provides the `Data` type, the buffer of bytes a host hands to a
//! function and receives back from it, along with the [encoding::Extract] trait that
//! turns those bytes into handler inputs.

mod data;

pub use data::Data;
pub mod encoding;
