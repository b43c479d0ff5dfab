//! Visualization boundary.
//!
//! The navigation core only pushes data into a [`VisualizationSink`]; it
//! never reads anything back. [`SvgSink`] renders a static SVG.

mod svg_sink;

pub use svg_sink::SvgSink;

use crate::core::Point2D;
use crate::obstacle::ObstacleSet;
use crate::path::Path;
use crate::planner::TreeEdge;

/// Which path is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStyle {
    /// Planner output before down-sampling
    Raw,
    /// Down-sampled waypoints
    Filtered,
}

/// Receiver for obstacles, trees and paths, all in the planning frame.
pub trait VisualizationSink {
    fn draw_obstacles(&mut self, obstacles: &ObstacleSet);
    fn draw_tree(&mut self, edges: &[TreeEdge]);
    fn draw_path(&mut self, path: &Path, style: PathStyle);
    fn draw_endpoints(&mut self, start: Point2D, goal: Point2D);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl VisualizationSink for NullSink {
    fn draw_obstacles(&mut self, _obstacles: &ObstacleSet) {}
    fn draw_tree(&mut self, _edges: &[TreeEdge]) {}
    fn draw_path(&mut self, _path: &Path, _style: PathStyle) {}
    fn draw_endpoints(&mut self, _start: Point2D, _goal: Point2D) {}
}
