#![doc = include_str!("../README.md")]
#![no_std]

mod search;

#[cfg(kani)]
mod proofs;

pub use search::*;
