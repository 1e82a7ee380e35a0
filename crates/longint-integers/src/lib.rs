//! # longint-integers
//!
//! The arbitrary precision integer primitive underneath the longint kernel.
//!
//! This crate wraps `dashu` to provide `Integer`, whose multiplication is
//! already sub-quadratic. Everything quadratic (division, radix conversion)
//! is replaced by divide-and-conquer algorithms in `longint-kernel`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
