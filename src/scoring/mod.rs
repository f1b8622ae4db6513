// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores run from 0.0 (perfect) to 1.0 (barely a match). Field-level bitap
//! scores are folded into one document score, then documents are sorted
//! ascending with corpus order as the tiebreaker.

mod core;
pub mod ranking;

pub use core::*;
