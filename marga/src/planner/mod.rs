//! Planner boundary.
//!
//! The sampling-based planner lives outside this crate. It receives a
//! [`PlanRequest`] plus a [`CollisionChecker`] and hands back the raw path in
//! the planning frame, optionally with the edges of its exploration tree.

use crate::collision::CollisionChecker;
use crate::core::{Bounds, Node, Point2D};
use crate::path::Path;

/// What to plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanRequest {
    pub start: Point2D,
    pub goal: Point2D,
    /// Sampling region
    pub bounds: Bounds,
}

impl PlanRequest {
    pub fn new(start: Point2D, goal: Point2D, bounds: Bounds) -> Self {
        Self { start, goal, bounds }
    }
}

/// One parent → child edge of an exploration tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeEdge {
    pub from: Point2D,
    pub to: Point2D,
}

impl TreeEdge {
    pub fn new(from: Point2D, to: Point2D) -> Self {
        Self { from, to }
    }

    /// Edge from a node's parent to the node; `None` for a root.
    pub fn from_node(node: &Node) -> Option<Self> {
        node.parent.map(|parent| Self::new(parent, node.point))
    }
}

/// Planner output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlannedPath {
    /// Raw waypoints, start to goal, planning frame
    pub path: Path,
    /// Exploration tree, empty if the planner does not report one
    pub tree: Vec<TreeEdge>,
}

/// Something that produces a path from start to goal.
pub trait PathPlanner {
    /// `None` when no path was found.
    fn plan(&mut self, request: &PlanRequest, checker: &dyn CollisionChecker) -> Option<PlannedPath>;
}

/// Replays a pre-recorded path.
#[derive(Clone, Debug, Default)]
pub struct FixedPathPlanner {
    recorded: PlannedPath,
}

impl FixedPathPlanner {
    pub fn new(path: Path) -> Self {
        Self {
            recorded: PlannedPath {
                path,
                tree: Vec::new(),
            },
        }
    }

    /// Attach tree edges to report along with the path.
    pub fn with_tree(mut self, tree: Vec<TreeEdge>) -> Self {
        self.recorded.tree = tree;
        self
    }
}

impl PathPlanner for FixedPathPlanner {
    fn plan(&mut self, request: &PlanRequest, _checker: &dyn CollisionChecker) -> Option<PlannedPath> {
        if self.recorded.path.is_empty() {
            log::warn!("Recorded path is empty, nothing to replay");
            return None;
        }

        if self.recorded.path.first() != Some(request.start)
            || self.recorded.path.last() != Some(request.goal)
        {
            log::debug!(
                "Recorded path endpoints differ from request ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                request.start.x,
                request.start.y,
                request.goal.x,
                request.goal.y
            );
        }

        Some(self.recorded.clone())
    }
}
