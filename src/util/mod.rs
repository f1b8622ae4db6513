// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small shared helpers.

pub mod json_file;
pub mod normalize;
