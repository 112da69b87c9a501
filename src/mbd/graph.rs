use log::debug;

use crate::{ColorI32, ColorImage};

/// Largest possible weight of a grid edge; pixel channels are 8 bit
pub const MAX_EDGE_WEIGHT: u8 = u8::MAX;

/// Directed half of an undirected link between two grid vertices
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub weight: u8,
}

/// 4-connected grid over an image's pixels
///
/// Vertices are pixels in row-major order. Every undirected link is stored
/// as two `Edge`s, one per direction, both carrying the L-infinity distance
/// between the pixel colors.
pub struct GridGraph {
    pub width: usize,
    pub height: usize,
    pub(crate) values: Vec<ColorI32>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) adjacent: Vec<Vec<u32>>,
}

impl GridGraph {
    pub fn from_color_image(image: &ColorImage) -> Self {
        let width = image.width;
        let height = image.height;
        let vertex_count = width * height;
        let values: Vec<ColorI32> = (0..vertex_count)
            .map(|i| ColorI32::new(&image.get_pixel_at(i)))
            .collect();

        let mut edges = Vec::with_capacity(4 * vertex_count);
        let mut adjacent = vec![Vec::new(); vertex_count];
        for i in 0..vertex_count {
            // Neighbors in up, right, down, left order
            for k in 0..4 {
                let j = match k {
                    0 => {
                        if i < width {
                            continue;
                        }
                        i - width
                    }
                    1 => {
                        if i % width == width - 1 {
                            continue;
                        }
                        i + 1
                    }
                    2 => {
                        if i + width >= vertex_count {
                            continue;
                        }
                        i + width
                    }
                    3 => {
                        if i % width == 0 {
                            continue;
                        }
                        i - 1
                    }
                    _ => unreachable!(),
                };
                let weight = values[i].max_abs_diff(&values[j]) as u8;
                adjacent[i].push(edges.len() as u32);
                edges.push(Edge {
                    from: i as u32,
                    to: j as u32,
                    weight,
                });
            }
        }

        debug!("grid graph: {} vertices, {} edges", vertex_count, edges.len());

        Self {
            width,
            height,
            values,
            edges,
            adjacent,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.values.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, index: u32) -> Edge {
        self.edges[index as usize]
    }

    /// Indices of the edges leaving `vertex`
    pub fn adjacent(&self, vertex: usize) -> &[u32] {
        &self.adjacent[vertex]
    }

    pub fn value(&self, vertex: usize) -> ColorI32 {
        self.values[vertex]
    }
}
