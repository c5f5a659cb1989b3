//! Tunable collision behaviour.

use serde::{Deserialize, Serialize};

/// How the convexity check classifies adjacent edges that are parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollinearEdges {
    /// A collinear edge pair matches either winding sign.
    #[default]
    Allow,
    /// A collinear edge pair makes the polygon non-convex.
    Reject,
}

/// Whether shapes whose boundaries only touch count as colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contact {
    /// Touching is colliding: projection intervals meeting at a single point overlap.
    #[default]
    Inclusive,
    /// Touching is separated: intervals must share more than a point.
    Exclusive,
}

impl Contact {
    /// Returns true if `[min_a, max_a]` and `[min_b, max_b]` are disjoint under this policy.
    pub fn separated(self, min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> bool {
        match self {
            Contact::Inclusive => max_a < min_b || max_b < min_a,
            Contact::Exclusive => max_a <= min_b || max_b <= min_a,
        }
    }
}

/// Collision settings, typically loaded alongside level data.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub collinear_edges: CollinearEdges,
    pub contact: Contact,
}
