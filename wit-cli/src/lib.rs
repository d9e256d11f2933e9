//! Support code for the `wittgenstein` binary.
//!
//! Kept out of main.rs so it can be unit tested: path resolution for the convert command and
//! the JSON report behind the inspect command.

pub mod inspect;
pub mod paths;
