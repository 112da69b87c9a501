use thiserror::Error;

use super::{BarrierMap, GridGraph, Propagator, SpanningTree, TreeLevels};
use crate::{BinaryImage, ColorImage};

/// Reasons the saliency entry point rejects its input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("image has zero width or height")]
    EmptyImage,
    #[error("pixel buffer holds {actual} bytes but {width}x{height} needs {expected}")]
    BadPixelBuffer {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("seed mask is {seed_width}x{seed_height} but the image is {width}x{height}")]
    SeedSizeMismatch {
        width: usize,
        height: usize,
        seed_width: usize,
        seed_height: usize,
    },
}

/// Computes the minimum barrier distance from `seeds` to every pixel
///
/// Distances follow the minimum spanning tree of the 4-connected pixel
/// grid, a close and much cheaper stand-in for the exact minimum barrier
/// distance. Feeding the border of a photo as seeds turns the result into
/// a saliency map: background pixels connect to the border through flat
/// paths and score low, salient regions have to cross a barrier.
///
/// Pixels the seeds cannot reach stay undefined in the returned map; an
/// empty seed mask yields an all-undefined map.
pub fn compute(image: &ColorImage, seeds: &BinaryImage) -> Result<BarrierMap, Error> {
    if image.width == 0 || image.height == 0 {
        return Err(Error::EmptyImage);
    }
    let expected = image.width * image.height * 4;
    if image.pixels.len() != expected {
        return Err(Error::BadPixelBuffer {
            width: image.width,
            height: image.height,
            expected,
            actual: image.pixels.len(),
        });
    }
    if seeds.width != image.width || seeds.height != image.height {
        return Err(Error::SeedSizeMismatch {
            width: image.width,
            height: image.height,
            seed_width: seeds.width,
            seed_height: seeds.height,
        });
    }

    let graph = GridGraph::from_color_image(image);
    let tree = SpanningTree::build(&graph, 0);
    let levels = TreeLevels::compute(&graph, &tree);
    let mut propagator = Propagator::new(&graph, &tree);
    propagator.seed(seeds);
    Ok(propagator.run(&levels))
}
