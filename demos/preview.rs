//! Writes an SVG comparing circular and smoothed corners to stdout.
//!
//! ```text
//! cargo run --example preview -- "smooth(80%)" > preview.svg
//! ```

use squircle::render::svg_document;
use squircle::{LayoutDirection, Path, Rect, SmoothRect, Style};

const SIZES: [f64; 6] = [16.0, 32.0, 48.0, 64.0, 128.0, 256.0];
const GAP: f64 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let style = match std::env::args().nth(1) {
        Some(text) => match text.parse::<Style>() {
            Ok(style) => style,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        },
        None => Style::SMOOTH,
    };

    const LTR: LayoutDirection = LayoutDirection::LeftToRight;
    const RTL: LayoutDirection = LayoutDirection::RightToLeft;

    let mut shapes: Vec<(Path, &str)> = Vec::new();
    let mut x = GAP;
    let tallest = SIZES.iter().copied().fold(0.0, f64::max);
    for size in SIZES {
        let radius = size / 4.0;
        let circular = SmoothRect::uniform(radius, Style::Circular);
        let smooth = SmoothRect::uniform(radius, style);
        let top = Rect::new(x, GAP, size, size);
        let bottom = Rect::new(x, 2.0 * GAP + tallest, size, size);
        shapes.push((circular.evaluate(top, LTR), "#9ca3af"));
        shapes.push((smooth.evaluate(bottom, LTR), "#4f46e5"));
        x += size + GAP;
    }

    // an inset outline drawn over its base shape
    let row = 3.0 * GAP + 2.0 * tallest;
    let base = SmoothRect::uniform(48.0, style);
    let frame = Rect::new(GAP, row, 320.0, 160.0);
    shapes.push((base.evaluate(frame, LTR), "#4f46e5"));
    shapes.push((base.inset(8.0).evaluate(frame, LTR), "#e0e7ff"));

    // one uneven shape laid out left-to-right, then right-to-left
    let uneven = SmoothRect::detailed(64.0, 8.0, 32.0, 0.0, style);
    let ltr_frame = Rect::new(2.0 * GAP + frame.width(), row, 240.0, 160.0);
    let rtl_frame = Rect::new(ltr_frame.max().x + GAP, row, 240.0, 160.0);
    shapes.push((uneven.evaluate(ltr_frame, LTR), "#0f766e"));
    shapes.push((uneven.evaluate(rtl_frame, RTL), "#b45309"));

    tracing::info!(%style, shapes = shapes.len(), "rendering preview");

    let width = x.max(rtl_frame.max().x + GAP);
    let height = frame.max().y + GAP;
    let refs: Vec<(&Path, &str)> = shapes.iter().map(|(path, fill)| (path, *fill)).collect();
    match svg_document(width, height, &refs) {
        Ok(svg) => println!("{svg}"),
        Err(e) => eprintln!("{:?}", miette::Report::new(e)),
    }
}
