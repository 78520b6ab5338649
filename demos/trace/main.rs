//! Region tracer demo: traces a polygon on an in-memory canvas and prints
//! the outline and the rasterized interior as text.
//!
//! Usage:
//! ```text
//! cargo run --example trace                          # concave outline
//! cargo run --example trace -- bowtie                # self-crossing outline
//! RUST_LOG=region_tracer=debug cargo run --example trace
//! ```

use region_tracer::math::Point2;
use region_tracer::operations::{pixel_count, ScanSegment, Validity};
use region_tracer::path::PathBuilder;
use region_tracer::render::Canvas;
use region_tracer::TracerError;

const OUTLINE: [(f64, f64); 8] = [
    (4.0, 3.0),
    (40.0, 3.0),
    (40.0, 18.0),
    (28.0, 18.0),
    (28.0, 9.0),
    (16.0, 9.0),
    (16.0, 18.0),
    (4.0, 18.0),
];

const BOWTIE: [(f64, f64); 4] = [(4.0, 3.0), (30.0, 18.0), (30.0, 3.0), (4.0, 18.0)];

const WIDTH: i64 = 46;
const HEIGHT: i64 = 24;

fn glyph(color: &str) -> char {
    match color {
        "Red" => '+',
        _ => '#',
    }
}

fn print_canvas(canvas: &Canvas, fill: &[ScanSegment]) {
    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| match canvas.pixel(x, y) {
                Some(color) => glyph(color),
                None if fill
                    .iter()
                    .any(|s| s.y == y && (s.start_x..=s.end_x).contains(&x)) =>
                {
                    '.'
                }
                None => ' ',
            })
            .collect();
        println!("{}", row.trim_end());
    }
}

fn main() -> Result<(), TracerError> {
    // Default: WARN for everything, INFO for the tracer.
    // Override with RUST_LOG env var (e.g. RUST_LOG=region_tracer=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("region_tracer=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let outline: &[(f64, f64)] = match std::env::args().nth(1).as_deref() {
        Some("bowtie") => &BOWTIE,
        _ => &OUTLINE,
    };

    let mut path = PathBuilder::new();
    path.attach(Canvas::new());
    for &(x, y) in outline {
        path.add_point(Point2::new(x, y))?;
    }

    let validity = path.check_polygon();
    println!("{} points: {validity}", path.len());

    let fill = if validity == Validity::Valid {
        let fill = path.rasterize()?;
        println!("{} runs, {} pixels", fill.len(), pixel_count(&fill));
        fill
    } else {
        Vec::new()
    };

    if let Some(canvas) = path.renderer() {
        print_canvas(canvas, &fill);
    }

    // Undo back to a single point to show the cross marker.
    while path.len() > 1 {
        path.remove_last_point()?;
    }
    println!("after undo: {:?}", path.drawing());
    if let Some(canvas) = path.renderer() {
        print_canvas(canvas, &[]);
    }

    Ok(())
}
