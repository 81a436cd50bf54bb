// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utility functions for finding the project root and resolving paths.
//!
//! The generator runs as a build step from anywhere inside a checkout; these
//! helpers anchor its conventional input and output locations to the root.

pub mod path_utils;

// Re-export for convenience
pub use path_utils::*;
