// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bit-parallel approximate search.
//!
//! `bitap` is the scanner for one pattern chunk against one text. `pattern`
//! compiles a query once, handles chunking for long queries, and exposes the
//! field-level entry point the query evaluator calls.

pub mod bitap;
mod pattern;

pub use pattern::{FieldHit, Pattern};
