//! Build the reference Möbius strip, measure it, and render it to a file.
//!
//! Run with: cargo run --example mobius_demo
//!
//! Set `RUST_LOG=debug` to see construction and output logging.

use log::info;

use mobius::prelude::*;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let strip = MobiusStrip::new(1.0, 0.4, 30)?;
    info!(
        "strip R={} w={} n={}",
        strip.radius(),
        strip.width(),
        strip.resolution()
    );

    let area = strip.compute_surface_area();
    let length = strip.compute_edge_length();
    println!("Surface area: {:.6}", area);
    println!("Edge length: {:.6}", length);

    let output = std::env::temp_dir().join("mobius_strip.ply");
    let mut renderer = FileRenderer::new(&output);
    strip.render(&mut renderer)?;
    println!("Rendered: {}", output.display());

    Ok(())
}
