#![deny(unsafe_code)]

use growth_model::ReferencePoint;
use serde::Serialize;

use crate::error::StandardsError;

/// Ordered control points of one growth curve.
///
/// Invariants, checked on construction:
/// - at least two points
/// - every value finite
/// - M and S strictly positive
/// - keys strictly ascending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceTable {
    points: Vec<ReferencePoint>,
}

impl ReferenceTable {
    pub fn new(points: Vec<ReferencePoint>) -> Result<Self, StandardsError> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Builds a table from compiled-in data. Validity of built-in data is
    /// covered by the crate's tests.
    pub(crate) fn from_static(points: &[ReferencePoint]) -> Self {
        debug_assert!(validate_points(points).is_ok());
        Self {
            points: points.to_vec(),
        }
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a table holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &ReferencePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &ReferencePoint {
        &self.points[self.points.len() - 1]
    }

    /// Inclusive key range covered by the table.
    pub fn domain(&self) -> (f64, f64) {
        (self.first().key, self.last().key)
    }

    /// Returns the pair of adjacent points with `lower.key <= key < upper.key`.
    ///
    /// `None` when `key` is outside the open interior of the table, i.e. at or
    /// beyond either edge, or NaN.
    pub fn bracket(&self, key: f64) -> Option<(&ReferencePoint, &ReferencePoint)> {
        if !(key > self.first().key && key < self.last().key) {
            return None;
        }
        // First index whose key is greater than `key`; never 0 or len here.
        let upper = self.points.partition_point(|point| point.key <= key);
        Some((&self.points[upper - 1], &self.points[upper]))
    }
}

fn validate_points(points: &[ReferencePoint]) -> Result<(), StandardsError> {
    if points.len() < 2 {
        return Err(StandardsError::InvalidPoints {
            message: format!("expected at least 2 points, found {}", points.len()),
        });
    }
    if let Some(point) = points.iter().find(|point| !point.is_finite()) {
        return Err(StandardsError::InvalidPoints {
            message: format!("non-finite values at key {}", point.key),
        });
    }
    if let Some(point) = points.iter().find(|point| point.m <= 0.0 || point.s <= 0.0) {
        return Err(StandardsError::InvalidPoints {
            message: format!("M and S must be positive at key {}", point.key),
        });
    }
    for pair in points.windows(2) {
        if pair[1].key <= pair[0].key {
            return Err(StandardsError::InvalidPoints {
                message: format!(
                    "keys must be strictly ascending ({} then {})",
                    pair[0].key, pair[1].key
                ),
            });
        }
    }
    Ok(())
}
