//! Minimum barrier distance transform over a spanning tree
//!
//! The barrier of a path is the largest minus the smallest pixel value along
//! it, taken per channel; the minimum barrier distance of a pixel is the
//! smallest barrier over all paths connecting it to a seed. Computing this
//! exactly is expensive, so paths are restricted to the minimum spanning
//! tree of the pixel grid, where two sweeps suffice:
//!
//! + build a 4-connected grid graph weighted by color difference
//! + grow a spanning tree from integer weight buckets
//! + level the tree breadth-first from the root
//! + propagate path extrema bottom-up, then top-down

mod graph;
mod mst;
mod propagate;
mod runner;

pub use graph::*;
pub use mst::*;
pub use propagate::*;
pub use runner::*;
