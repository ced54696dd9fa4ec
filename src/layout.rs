//! Level-by-level positioning of call nodes.
//!
//! Nodes sharing a depth are spread evenly across the canvas width in
//! creation order; a lone node on a level is centred.

use serde::Serialize;

use crate::graph::CallGraph;

/// Canvas geometry for [`position_nodes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width: f64,
    /// `y` of the root level.
    pub top: f64,
    /// Vertical distance between depths.
    pub level_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            top: 50.0,
            level_height: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Coordinates for every node of `graph`, indexed like `graph.nodes`.
pub fn position_nodes(graph: &CallGraph, config: &LayoutConfig) -> Vec<Point> {
    let levels = graph.max_depth() + 1;
    let mut per_level = vec![0usize; levels];
    for node in &graph.nodes {
        per_level[node.depth] += 1;
    }

    let mut seen = vec![0usize; levels];
    graph
        .nodes
        .iter()
        .map(|node| {
            let count = per_level[node.depth];
            let slot = seen[node.depth];
            seen[node.depth] += 1;
            let x = if count == 1 {
                config.width / 2.0
            } else {
                config.width / (count as f64 + 1.0) * (slot as f64 + 1.0)
            };
            Point {
                x,
                y: config.top + node.depth as f64 * config.level_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::Fibonacci;
    use crate::traits::TracedProblem;

    #[test]
    fn levels_and_spacing() {
        // depth 0: f3; depth 1: f2, f1; depth 2: f1, f0
        let sol = Fibonacci::new(3).solve_recursive();
        let graph = sol.graph().expect("tree");
        let pts = position_nodes(graph, &LayoutConfig::default());
        assert_eq!(pts.len(), graph.len());
        assert_eq!(pts[0], Point { x: 400.0, y: 50.0 });

        let spacing = 800.0 / 3.0;
        let depth_one: Vec<_> = graph
            .nodes
            .iter()
            .zip(&pts)
            .filter(|(n, _)| n.depth == 1)
            .map(|(_, p)| *p)
            .collect();
        assert_eq!(depth_one.len(), 2);
        assert!((depth_one[0].x - spacing).abs() < 1e-9);
        assert!((depth_one[1].x - 2.0 * spacing).abs() < 1e-9);
        assert!(depth_one.iter().all(|p| p.y == 130.0));
    }

    #[test]
    fn empty_graph_has_no_points() {
        assert!(position_nodes(&CallGraph::new(), &LayoutConfig::default()).is_empty());
    }
}
