//! Saliency map demo: border pixels as background seeds
//!
//! ```sh
//! cargo run --example saliency -- input.png saliency.png
//! ```

use anyhow::{bail, Context, Result};
use barriermap::{compute, BinaryImage, ColorImage};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => bail!("usage: saliency <input> <output>"),
    };

    let decoded = image::open(&input)
        .with_context(|| format!("cannot read {}", input))?
        .to_rgba8();
    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    if width == 0 || height == 0 {
        bail!("{} has no pixels", input);
    }
    let frame = ColorImage {
        pixels: decoded.into_raw(),
        width,
        height,
    };

    let mut seeds = BinaryImage::new_w_h(width, height);
    for x in 0..width {
        seeds.set_pixel(x, 0, true);
        seeds.set_pixel(x, height - 1, true);
    }
    for y in 0..height {
        seeds.set_pixel(0, y, true);
        seeds.set_pixel(width - 1, y, true);
    }

    let map = compute(&frame, &seeds)?;
    let gray = map.to_gray();
    info!("saliency range 0..{}", gray.max_element().unwrap_or(0));

    let buffer = image::GrayImage::from_raw(width as u32, height as u32, gray.into_vec())
        .context("gray buffer does not match image size")?;
    buffer
        .save(&output)
        .with_context(|| format!("cannot write {}", output))?;
    Ok(())
}
