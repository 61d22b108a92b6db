//! Still-image inspection demo
//!
//! Reads an image of a workpiece, runs the inspection pipeline, prints
//! the detection list, and writes an annotated copy next to the input.
//!
//! Usage: cargo run --example inspect -- <image> [annotated-output]

use opencv::core::Vector;
use opencv::imgcodecs;

use sheetscan::{inspect_frame, overlay, DetectionItem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().ok_or("usage: inspect <image> [output]")?;
    let output = args.next().unwrap_or_else(|| "annotated.png".to_string());

    let mut frame = imgcodecs::imread(&input, imgcodecs::IMREAD_COLOR)?;

    let result = inspect_frame(&frame)?;

    for item in result.items() {
        match item {
            DetectionItem::Sheet { width, height } => {
                println!("sheet    {} x {} px", width, height);
            }
            DetectionItem::Hole { position, diameter } => {
                println!("hole     ({}, {}) d={} px", position.x, position.y, diameter);
            }
            DetectionItem::Counterbore { position, category } => {
                println!(
                    "category ({}, {}) {:?}",
                    position.x, position.y, category
                );
            }
        }
    }

    overlay::draw_detections(&mut frame, &result)?;
    imgcodecs::imwrite(&output, &frame, &Vector::new())?;
    println!("annotated frame written to {}", output);

    Ok(())
}
