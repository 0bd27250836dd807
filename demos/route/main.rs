//! Builds a small level and prints a route through it.
//!
//! ```text
//! cargo run --example route
//! RUST_LOG=polynav=trace cargo run --example route
//! ```

use polynav::math::Point2;
use polynav::{NavError, ObstacleMap, Polygon};

fn points(raw: &[(f64, f64)]) -> Vec<Point2> {
    raw.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn main() -> Result<(), NavError> {
    // Default: WARN for everything, DEBUG for polynav.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polynav=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut map = ObstacleMap::new();
    map.insert(Polygon::hole(points(&[(-10.0, -10.0), (-10.0, 10.0), (10.0, 10.0), (10.0, -10.0)]))?);
    map.insert(Polygon::solid(points(&[(-2.0, -4.0), (-2.0, 4.0), (0.0, 4.0), (0.0, -4.0)]))?);
    map.insert(Polygon::solid(points(&[(0.0, 2.0), (0.0, 3.0), (4.0, 3.0), (4.0, 2.0)]))?);
    map.insert(Polygon::solid(points(&[(3.0, -6.0), (3.0, -1.0), (5.0, -1.0), (5.0, -6.0)]))?);

    let mesh = map.build(0.5);
    println!("{} obstacles merged into {} polygons", map.len(), mesh.polygons().len());

    let start = Point2::new(-6.0, 0.0);
    let target = Point2::new(7.0, 0.0);
    let route = mesh.route(start, target)?;

    println!("route ({:.3} units):", route.distance);
    for p in &route.points {
        println!("  ({:.3}, {:.3})", p.x, p.y);
    }
    Ok(())
}
