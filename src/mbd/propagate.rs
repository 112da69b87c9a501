use log::debug;

use super::{GridGraph, SpanningTree, TreeLevels};
use crate::{BinaryImage, ColorI32, Field};

/// Sweeps barrier distances over a spanning tree
///
/// Each vertex carries the per-channel extrema of the best path found so
/// far; its distance is the smallest channel of `max - min` along that
/// path. Seeds start at zero. One bottom-up sweep and one top-down sweep
/// reach the fixed point, since tree paths bend at most once.
pub struct Propagator<'a> {
    graph: &'a GridGraph,
    tree: &'a SpanningTree,
    min_along_path: Vec<ColorI32>,
    max_along_path: Vec<ColorI32>,
    dist: Vec<Option<i32>>,
}

impl<'a> Propagator<'a> {
    pub fn new(graph: &'a GridGraph, tree: &'a SpanningTree) -> Self {
        Self {
            graph,
            tree,
            min_along_path: graph.values.clone(),
            max_along_path: graph.values.clone(),
            dist: vec![None; graph.vertex_count()],
        }
    }

    /// Marks every set pixel of `seeds` as a zero-distance source
    pub fn seed(&mut self, seeds: &BinaryImage) {
        let mut count = 0;
        for i in 0..self.dist.len() {
            if seeds.get_pixel_index(i) {
                self.dist[i] = Some(0);
                count += 1;
            }
        }
        debug!("seeded {} of {} vertices", count, self.dist.len());
    }

    /// Runs both sweeps and returns the distance map
    pub fn run(mut self, levels: &TreeLevels) -> BarrierMap {
        self.bottom_up(levels.deepest_first());
        self.top_down();

        let defined = self.dist.iter().filter(|d| d.is_some()).count();
        debug!(
            "barrier distances: {} of {} defined",
            defined,
            self.dist.len()
        );

        BarrierMap {
            width: self.graph.width,
            height: self.graph.height,
            dist: self.dist,
        }
    }

    /// Extends the best path ending at `from` by the pixel of `to`;
    /// the result is kept only when it strictly improves `to`
    fn relax(&mut self, from: usize, to: usize) {
        if self.dist[from].is_none() {
            return;
        }
        let min = self.min_along_path[from].min_components(&self.graph.value(to));
        let max = self.max_along_path[from].max_components(&self.graph.value(to));
        let dist = max.diff(&min).min_channel();
        if self.dist[to].map_or(true, |d| dist < d) {
            self.dist[to] = Some(dist);
            self.min_along_path[to] = min;
            self.max_along_path[to] = max;
        }
    }

    fn bottom_up(&mut self, deepest_first: &[u32]) {
        for &v in deepest_first {
            if let Some(edge_index) = self.tree.parent_edge(v as usize) {
                let parent = self.graph.edge(edge_index).from as usize;
                self.relax(v as usize, parent);
            }
        }
    }

    fn top_down(&mut self) {
        if self.dist.is_empty() {
            return;
        }
        let mut frontier = vec![self.tree.root() as u32];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &v in frontier.iter() {
                if self.dist[v as usize].is_none() {
                    continue; // no seed reaches this subtree at all
                }
                for &edge_index in self.tree.child_edges(v as usize) {
                    let child = self.graph.edge(edge_index).to;
                    self.relax(v as usize, child as usize);
                    next.push(child);
                }
            }
            frontier = next;
        }
    }
}

/// Minimum barrier distance of every pixel to the seed set
///
/// `None` marks pixels no seed can reach.
#[derive(Debug)]
pub struct BarrierMap {
    pub width: usize,
    pub height: usize,
    dist: Vec<Option<i32>>,
}

impl BarrierMap {
    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        self.get_at(y * self.width + x)
    }

    pub fn get_at(&self, index: usize) -> Option<i32> {
        self.dist[index]
    }

    /// Distances as a field, with `undefined` filled in for unreached pixels
    pub fn to_field(&self, undefined: i32) -> Field<i32> {
        let data = self.dist.iter().map(|d| d.unwrap_or(undefined)).collect();
        Field::with_vec(self.width, self.height, data).unwrap()
    }

    /// Distances as 8 bit gray; unreached pixels go to zero
    ///
    /// Distances never exceed 255 because pixel channels are 8 bit.
    pub fn to_gray(&self) -> Field<u8> {
        let data = self
            .dist
            .iter()
            .map(|d| d.unwrap_or(0) as u8)
            .collect();
        Field::with_vec(self.width, self.height, data).unwrap()
    }
}
