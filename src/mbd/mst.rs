use bit_vec::BitVec;
use log::debug;

use super::{GridGraph, MAX_EDGE_WEIGHT};

/// Pending edges in FIFO buckets indexed by weight
///
/// Weights are bounded by `MAX_EDGE_WEIGHT`, so one bucket per weight
/// replaces the usual binary heap. A bitset tracks which buckets are
/// non-empty; a cursor per bucket avoids shifting on pop.
struct BucketQueue {
    buckets: Vec<Vec<u32>>,
    cursors: Vec<usize>,
    occupied: BitVec,
}

impl BucketQueue {
    fn new() -> Self {
        let levels = MAX_EDGE_WEIGHT as usize + 1;
        Self {
            buckets: vec![Vec::new(); levels],
            cursors: vec![0; levels],
            occupied: BitVec::from_elem(levels, false),
        }
    }

    fn push(&mut self, weight: u8, edge_index: u32) {
        self.buckets[weight as usize].push(edge_index);
        self.occupied.set(weight as usize, true);
    }

    /// Pops the earliest-pushed edge of the smallest occupied weight
    fn pop_min(&mut self) -> Option<u32> {
        let w = self.occupied.iter().position(|occupied| occupied)?;
        let edge_index = self.buckets[w][self.cursors[w]];
        self.cursors[w] += 1;
        if self.cursors[w] == self.buckets[w].len() {
            self.buckets[w].clear();
            self.cursors[w] = 0;
            self.occupied.set(w, false);
        }
        Some(edge_index)
    }
}

/// Minimum spanning tree of a `GridGraph`
///
/// Every vertex the root can reach holds the edge it was claimed through;
/// child edges are kept in claim order. Vertices in other components hold
/// no parent and appear in no child list.
pub struct SpanningTree {
    root: usize,
    parent_edge: Vec<Option<u32>>,
    child_edges: Vec<Vec<u32>>,
}

impl SpanningTree {
    /// Grows the tree from `root` with Prim's algorithm on bucketed weights
    ///
    /// Edges to already-claimed vertices are dropped lazily when popped, so
    /// the whole construction is linear in the edge count plus one bucket
    /// scan per pop.
    pub fn build(graph: &GridGraph, root: usize) -> Self {
        let mut builder = TreeBuilder {
            graph,
            queue: BucketQueue::new(),
            has_chosen: BitVec::from_elem(graph.vertex_count(), false),
            parent_edge: vec![None; graph.vertex_count()],
            child_edges: vec![Vec::new(); graph.vertex_count()],
        };

        if graph.vertex_count() > 0 {
            builder.expand_frontier(root);
            builder.grow();
        }

        let reached = builder.parent_edge.iter().filter(|e| e.is_some()).count()
            + if graph.vertex_count() > 0 { 1 } else { 0 };
        debug!(
            "spanning tree: {} of {} vertices reached",
            reached,
            graph.vertex_count()
        );

        Self {
            root,
            parent_edge: builder.parent_edge,
            child_edges: builder.child_edges,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn vertex_count(&self) -> usize {
        self.parent_edge.len()
    }

    /// The edge `vertex` was claimed through, pointing from its parent
    pub fn parent_edge(&self, vertex: usize) -> Option<u32> {
        self.parent_edge[vertex]
    }

    /// Edges from `vertex` to its children, in claim order
    pub fn child_edges(&self, vertex: usize) -> &[u32] {
        &self.child_edges[vertex]
    }
}

struct TreeBuilder<'a> {
    graph: &'a GridGraph,
    queue: BucketQueue,
    has_chosen: BitVec,
    parent_edge: Vec<Option<u32>>,
    child_edges: Vec<Vec<u32>>,
}

impl TreeBuilder<'_> {
    /// Claims `vertex` and queues its edges to unclaimed neighbors
    fn expand_frontier(&mut self, vertex: usize) {
        self.has_chosen.set(vertex, true);
        for &edge_index in self.graph.adjacent(vertex) {
            let edge = self.graph.edge(edge_index);
            if !self.has_chosen.get(edge.to as usize).unwrap() {
                self.queue.push(edge.weight, edge_index);
            }
        }
    }

    fn grow(&mut self) {
        while let Some(edge_index) = self.queue.pop_min() {
            let edge = self.graph.edge(edge_index);
            let to = edge.to as usize;
            if self.has_chosen.get(to).unwrap() {
                continue; // stale; `to` was claimed through an earlier edge
            }
            self.parent_edge[to] = Some(edge_index);
            self.child_edges[edge.from as usize].push(edge_index);
            self.expand_frontier(to);
        }
    }
}

/// Tree depth of every vertex, plus the deepest-first sweep order
pub struct TreeLevels {
    level: Vec<Option<u32>>,
    deepest_first: Vec<u32>,
}

impl TreeLevels {
    /// Walks the tree breadth-first from the root
    ///
    /// The root sits at level 0 and every child one below its parent.
    /// Unreached vertices keep no level and are absent from the sweep
    /// order. Within a level the sweep keeps discovery order.
    pub fn compute(graph: &GridGraph, tree: &SpanningTree) -> Self {
        let vertex_count = tree.vertex_count();
        let mut level = vec![None; vertex_count];
        if vertex_count == 0 {
            return Self {
                level,
                deepest_first: Vec::new(),
            };
        }

        level[tree.root()] = Some(0);
        let mut waves: Vec<Vec<u32>> = Vec::new();
        let mut frontier = vec![tree.root() as u32];
        let mut depth = 0;
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &v in frontier.iter() {
                for &edge_index in tree.child_edges(v as usize) {
                    let child = graph.edge(edge_index).to;
                    level[child as usize] = Some(depth + 1);
                    next.push(child);
                }
            }
            waves.push(frontier);
            frontier = next;
            depth += 1;
        }

        let deepest_first = waves.into_iter().rev().flatten().collect();
        Self {
            level,
            deepest_first,
        }
    }

    pub fn level(&self, vertex: usize) -> Option<u32> {
        self.level[vertex]
    }

    /// Every reached vertex once, deepest level first
    pub fn deepest_first(&self) -> &[u32] {
        &self.deepest_first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorI32, ColorImage};

    fn test_image(width: usize, height: usize) -> ColorImage {
        let mut image = ColorImage::new_w_h(width, height);
        for i in 0..width * height {
            image.set_pixel_at(
                i,
                &Color::new(
                    ((i * 31 + 7) % 251) as u8,
                    ((i * 91 + 3) % 256) as u8,
                    ((i * 13 + 101) % 256) as u8,
                ),
            );
        }
        image
    }

    /// Textbook Prim with an array scan, for cross-checking
    fn reference_tree_weight(graph: &GridGraph) -> i64 {
        let n = graph.vertex_count();
        let mut in_tree = vec![false; n];
        let mut best = vec![i32::MAX; n];
        best[0] = 0;
        let mut total = 0;
        loop {
            let mut u = n;
            for v in 0..n {
                if !in_tree[v] && best[v] < i32::MAX && (u == n || best[v] < best[u]) {
                    u = v;
                }
            }
            if u == n {
                break;
            }
            in_tree[u] = true;
            total += best[u] as i64;
            for &e in graph.adjacent(u) {
                let edge = graph.edge(e);
                let to = edge.to as usize;
                if !in_tree[to] && (edge.weight as i32) < best[to] {
                    best[to] = edge.weight as i32;
                }
            }
        }
        total
    }

    fn tree_weight(graph: &GridGraph, tree: &SpanningTree) -> i64 {
        (0..graph.vertex_count())
            .filter_map(|v| tree.parent_edge(v))
            .map(|e| graph.edge(e).weight as i64)
            .sum()
    }

    #[test]
    fn tree_spans_all_vertices() {
        let graph = GridGraph::from_color_image(&test_image(5, 4));
        let tree = SpanningTree::build(&graph, 0);
        let n = graph.vertex_count();

        let with_parent = (0..n).filter(|&v| tree.parent_edge(v).is_some()).count();
        assert_eq!(with_parent, n - 1);
        assert_eq!(tree.parent_edge(tree.root()), None);

        for v in 0..n {
            let mut current = v;
            let mut steps = 0;
            while let Some(e) = tree.parent_edge(current) {
                current = graph.edge(e).from as usize;
                steps += 1;
                assert!(steps < n);
            }
            assert_eq!(current, tree.root());
        }
    }

    #[test]
    fn equal_weights_pop_in_push_order() {
        // All weights are zero, so the tree shape is decided purely by
        // bucket order: vertex 3 must be claimed through 1, not 2.
        let graph = GridGraph::from_color_image(&ColorImage::new_w_h(2, 2));
        let tree = SpanningTree::build(&graph, 0);
        let e = tree.parent_edge(3).unwrap();
        assert_eq!(graph.edge(e).from, 1);
    }

    #[test]
    fn matches_reference_total_weight() {
        let graph = GridGraph::from_color_image(&test_image(7, 5));
        let tree = SpanningTree::build(&graph, 0);
        assert_eq!(tree_weight(&graph, &tree), reference_tree_weight(&graph));
    }

    #[test]
    fn unreachable_vertex_has_no_parent() {
        let graph = GridGraph {
            width: 2,
            height: 1,
            values: vec![ColorI32::default(); 2],
            edges: vec![],
            adjacent: vec![vec![], vec![]],
        };
        let tree = SpanningTree::build(&graph, 0);
        assert_eq!(tree.parent_edge(0), None);
        assert_eq!(tree.parent_edge(1), None);
        assert!(tree.child_edges(0).is_empty());

        let levels = TreeLevels::compute(&graph, &tree);
        assert_eq!(levels.level(0), Some(0));
        assert_eq!(levels.level(1), None);
        assert_eq!(levels.deepest_first(), [0]);
    }

    #[test]
    fn levels_follow_parents() {
        let graph = GridGraph::from_color_image(&test_image(4, 3));
        let tree = SpanningTree::build(&graph, 0);
        let levels = TreeLevels::compute(&graph, &tree);

        assert_eq!(levels.level(tree.root()), Some(0));
        for v in 0..graph.vertex_count() {
            if let Some(e) = tree.parent_edge(v) {
                let parent = graph.edge(e).from as usize;
                assert_eq!(levels.level(v), levels.level(parent).map(|d| d + 1));
            }
        }
    }

    #[test]
    fn deepest_first_levels_never_increase() {
        let graph = GridGraph::from_color_image(&test_image(4, 3));
        let tree = SpanningTree::build(&graph, 0);
        let levels = TreeLevels::compute(&graph, &tree);

        let order = levels.deepest_first();
        assert_eq!(order.len(), graph.vertex_count());
        for pair in order.windows(2) {
            assert!(levels.level(pair[0] as usize) >= levels.level(pair[1] as usize));
        }
        assert_eq!(*order.last().unwrap(), tree.root() as u32);
    }

    #[test]
    fn deepest_first_keeps_discovery_order_within_level() {
        let graph = GridGraph::from_color_image(&ColorImage::new_w_h(2, 2));
        let tree = SpanningTree::build(&graph, 0);
        let levels = TreeLevels::compute(&graph, &tree);
        // Levels are [0, 1, 1, 2]; vertices 1 and 2 tie and keep the
        // order the tree claimed them in.
        assert_eq!(levels.deepest_first(), [3, 1, 2, 0]);
    }

    #[test]
    fn chain_levels() {
        let graph = GridGraph::from_color_image(&ColorImage::new_w_h(1, 4));
        let tree = SpanningTree::build(&graph, 0);
        let levels = TreeLevels::compute(&graph, &tree);
        for v in 0..4 {
            assert_eq!(levels.level(v), Some(v as u32));
        }
        assert_eq!(levels.deepest_first(), [3, 2, 1, 0]);
    }
}
