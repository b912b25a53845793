// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output line matching for hookprobe self-tests.
//!
//! [`LineMatcher`] checks captured output against shell-style glob patterns,
//! either as an ordered subsequence ([`LineMatcher::match_in_order`]) or as a
//! set ([`LineMatcher::match_any_order`]).

mod block;
mod error;
mod linecomp;
mod matcher;
mod pattern;

pub use block::pattern_block;
pub use error::LineMatchError;
pub use linecomp::LineComp;
pub use matcher::LineMatcher;
pub use pattern::{fnmatch, LinePattern};
