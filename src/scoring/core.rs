// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind document scores.
//!
//! Each matched field contributes `field_score ^ (key_weight * field_norm)`
//! and the contributions multiply. All factors live in `[0, 1]`, so:
//!
//! - a better field match (smaller score) always lowers the product,
//! - matching in more fields lowers it further,
//! - short fields (large norm) pull harder than long ones, which is why an
//!   exact title hit beats the same word buried in a post body.
//!
//! # Constants
//!
//! | Name             | Value        | Why this value |
//! |------------------|--------------|----------------|
//! | `NORM_MANTISSA`  | 3            | Norms are rounded so equal-length fields tie exactly |
//! | `PERFECT_FACTOR` | `f64::EPSILON` | A perfect weighted field must still be comparable, not collapse to 0 |

/// Decimal places kept in a field-length norm.
pub const NORM_MANTISSA: i32 = 3;

/// Stand-in for a 0.0 field score on a weighted key.
pub const PERFECT_FACTOR: f64 = f64::EPSILON;

/// Field-length norm: `1 / tokens^(0.5 * weight)`, rounded.
///
/// Tokens are runs of non-space chars. A blank field has no tokens; callers
/// never index those, but the norm degrades to 1.0 rather than dividing by 0.
pub fn field_norm(text: &str, weight: f64) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count();
    if tokens == 0 {
        return 1.0;
    }
    let norm = 1.0 / (tokens as f64).powf(0.5 * weight);
    let scale = 10f64.powi(NORM_MANTISSA);
    (norm * scale).round() / scale
}

/// One matched field's inputs to the document score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    /// Normalized key weight (all keys sum to 1).
    pub weight: f64,
    pub norm: f64,
    pub score: f64,
}

/// Combine matched fields into a document score (lower is better).
///
/// An empty iterator yields 1.0, the worst score; the evaluator never calls
/// it that way because unmatched documents are dropped first.
pub fn document_score(fields: impl IntoIterator<Item = FieldScore>, ignore_field_norm: bool) -> f64 {
    fields.into_iter().fold(1.0, |total, field| {
        let base = if field.score == 0.0 && field.weight > 0.0 {
            PERFECT_FACTOR
        } else {
            field.score
        };
        let norm = if ignore_field_norm { 1.0 } else { field.norm };
        total * base.powf(field.weight * norm)
    })
}

/// Scale raw key weights so they sum to 1.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}
