//! SVG rendering of a planning run.

use svg::Document;
use svg::node::element::{Circle, Group, Line, Polygon, Polyline, Rectangle};

use crate::core::math::fov_points;
use crate::core::{Bounds, Point2D};
use crate::obstacle::{ObstacleSet, Rect};
use crate::path::Path;
use crate::planner::TreeEdge;

use super::{PathStyle, VisualizationSink};

mod colors {
    pub const BACKGROUND: &str = "#DDDDDD";
    pub const BOUNDARY: &str = "white";
    pub const OBSTACLE_FILL: &str = "gray";
    pub const OBSTACLE_EDGE: &str = "black";
    pub const TREE: &str = "#CCCCCC";
    pub const RAW_PATH: &str = "#E69F00";
    pub const FILTERED_PATH: &str = "#D55E00";
    pub const START: &str = "#0072B2";
    pub const GOAL: &str = "#CC0000";
    pub const FOV: &str = "#56B4E9";
}

/// Side of the start/goal squares (pixels).
const ENDPOINT_SIZE: f32 = 10.0;

/// Camera wedge drawn at each filtered waypoint.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FovOverlay {
    angle: f32,
    range: f32,
}

/// Static SVG renderer, 100 px per meter with the y axis pointing up.
///
/// Draw calls append layers in call order; [`SvgSink::document`] assembles
/// them on a gray background sized to the workspace bounds.
#[derive(Clone, Debug)]
pub struct SvgSink {
    bounds: Bounds,
    scale: f32,
    margin: f32,
    fov: Option<FovOverlay>,
    layers: Vec<Group>,
}

impl SvgSink {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            scale: 100.0, // 100 pixels per meter
            margin: 20.0,
            fov: None,
            layers: Vec::new(),
        }
    }

    /// Draw a field-of-view wedge (`angle` radians wide, `range` meters
    /// deep) at each filtered waypoint, facing along the path.
    pub fn with_fov(mut self, angle: f32, range: f32) -> Self {
        self.fov = Some(FovOverlay { angle, range });
        self
    }

    fn width_px(&self) -> f32 {
        self.bounds.width() * self.scale + 2.0 * self.margin
    }

    fn height_px(&self) -> f32 {
        self.bounds.height() * self.scale + 2.0 * self.margin
    }

    /// World → SVG pixels; SVG y grows downward.
    fn transform_point(&self, p: Point2D) -> (f32, f32) {
        let x = (p.x - self.bounds.min.x) * self.scale + self.margin;
        let y = self.height_px() - ((p.y - self.bounds.min.y) * self.scale + self.margin);
        (x, y)
    }

    fn points_attr(&self, points: impl Iterator<Item = Point2D>) -> String {
        points
            .map(|p| {
                let (x, y) = self.transform_point(p);
                format!("{},{}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn rect(&self, rect: &Rect, fill: &str, stroke: &str) -> Rectangle {
        // Top-left corner in SVG space is the world top-left
        let (x, y) = self.transform_point(Point2D::new(rect.x, rect.y + rect.height));
        Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", rect.width * self.scale)
            .set("height", rect.height * self.scale)
            .set("fill", fill)
            .set("stroke", stroke)
            .set("stroke-width", 1)
    }

    fn square(&self, center: Point2D, color: &str) -> Rectangle {
        let (x, y) = self.transform_point(center);
        Rectangle::new()
            .set("x", x - ENDPOINT_SIZE / 2.0)
            .set("y", y - ENDPOINT_SIZE / 2.0)
            .set("width", ENDPOINT_SIZE)
            .set("height", ENDPOINT_SIZE)
            .set("fill", color)
    }

    fn render_fov(&self, path: &Path, fov: FovOverlay) -> Group {
        let mut group = Group::new()
            .set("id", "fov")
            .set("fill", colors::FOV)
            .set("fill-opacity", 0.15)
            .set("stroke", "none");

        for (prev, cur) in path.segments() {
            let yaw = prev.angle_to(cur);
            let (left, right) = fov_points(cur, yaw, fov.angle, fov.range);
            let wedge = Polygon::new().set("points", self.points_attr([cur, left, right].into_iter()));
            group = group.add(wedge);
        }

        group
    }

    /// Number of layers drawn so far.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Assemble the SVG document.
    pub fn document(&self) -> Document {
        let width = self.width_px();
        let height = self.height_px();

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", colors::BACKGROUND),
            );

        for layer in &self.layers {
            doc = doc.add(layer.clone());
        }

        doc
    }

    /// Write the document to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        svg::save(path, &self.document())
    }
}

impl VisualizationSink for SvgSink {
    fn draw_obstacles(&mut self, obstacles: &ObstacleSet) {
        let mut group = Group::new().set("id", "obstacles");

        for rect in obstacles.boundaries() {
            group = group.add(self.rect(rect, colors::BOUNDARY, colors::BOUNDARY));
        }
        for rect in obstacles.rectangles() {
            group = group.add(self.rect(rect, colors::OBSTACLE_FILL, colors::OBSTACLE_EDGE));
        }
        for circle in obstacles.circles() {
            let (cx, cy) = self.transform_point(circle.center());
            group = group.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", circle.radius * self.scale)
                    .set("fill", colors::OBSTACLE_FILL)
                    .set("stroke", colors::OBSTACLE_EDGE)
                    .set("stroke-width", 1),
            );
        }

        self.layers.push(group);
    }

    fn draw_tree(&mut self, edges: &[TreeEdge]) {
        let mut group = Group::new()
            .set("id", "tree")
            .set("stroke", colors::TREE)
            .set("stroke-width", 1);

        for edge in edges {
            let (x1, y1) = self.transform_point(edge.from);
            let (x2, y2) = self.transform_point(edge.to);
            group = group.add(
                Line::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2),
            );
        }

        self.layers.push(group);
    }

    fn draw_path(&mut self, path: &Path, style: PathStyle) {
        if path.is_empty() {
            return;
        }

        let (id, color) = match style {
            PathStyle::Raw => ("raw_path", colors::RAW_PATH),
            PathStyle::Filtered => ("filtered_path", colors::FILTERED_PATH),
        };

        let mut line = Polyline::new()
            .set("points", self.points_attr(path.iter()))
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-width", 2.5)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round");
        if style == PathStyle::Raw {
            line = line.set("stroke-dasharray", "6,4");
        }

        let mut group = Group::new().set("id", id);
        if let (PathStyle::Filtered, Some(fov)) = (style, self.fov) {
            group = group.add(self.render_fov(path, fov));
        }
        self.layers.push(group.add(line));
    }

    fn draw_endpoints(&mut self, start: Point2D, goal: Point2D) {
        let group = Group::new()
            .set("id", "endpoints")
            .add(self.square(start, colors::START))
            .add(self.square(goal, colors::GOAL));
        self.layers.push(group);
    }
}
