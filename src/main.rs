use std::io::{self, BufRead};

use anyhow::{bail, Context};
use shapekit::{init_logging, Figure, Point, Polygon, Rectangle, Ring, Scene};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut scene = demo_scene()?;
    print_report(&scene);

    println!();
    println!("enter `x y k` to scale every shape by k about the point (x, y); end input to quit");

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let (pivot, factor) = parse_triple(&line)
            .with_context(|| format!("malformed input on line {}: {:?}", index + 1, line))?;
        scene
            .scale_about_all(pivot, factor)
            .with_context(|| format!("cannot apply scale from line {}", index + 1))?;
        print_report(&scene);
    }

    Ok(())
}

/// The reference figures: one of each shape kind.
fn demo_scene() -> anyhow::Result<Scene> {
    let mut scene = Scene::new();
    scene.add(Rectangle::new(4.0, 5.0, Point::new(2.0, 3.0))?);
    scene.add(Ring::new(
        4.4,
        Point::new(1.0, 1.0),
        1.1,
        Point::new(1.1, 1.1),
    )?);
    scene.add(Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 3.0),
        Point::new(1.0, 4.0),
    ])?);
    Ok(scene)
}

/// Parses one `x y k` line into a pivot point and scale factor.
fn parse_triple(line: &str) -> anyhow::Result<(Point, f64)> {
    let mut fields = line.split_whitespace();
    let mut next = |name: &str| -> anyhow::Result<f64> {
        let raw = fields
            .next()
            .with_context(|| format!("missing {} value", name))?;
        raw.parse::<f64>()
            .with_context(|| format!("{} is not a number: {:?}", name, raw))
    };
    let x = next("x")?;
    let y = next("y")?;
    let k = next("k")?;
    if fields.next().is_some() {
        bail!("trailing input after the three expected numbers");
    }
    Ok((Point::new(x, y), k))
}

fn print_report(scene: &Scene) {
    println!("--- scene report ({} shapes) ---", scene.len());
    for (i, shape) in scene.shapes().iter().enumerate() {
        println!(
            "  {:>2}. {:<9} area {:>12.4}",
            i + 1,
            shape.name(),
            shape.area()
        );
    }
    println!("  total area: {:.4}", scene.total_area());
    for (i, shape) in scene.shapes().iter().enumerate() {
        let f = shape.frame_rect();
        println!(
            "  {:>2}. {:<9} frame {:.4} x {:.4} at ({:.4}, {:.4})",
            i + 1,
            shape.name(),
            f.width,
            f.height,
            f.center.x,
            f.center.y
        );
    }
    match scene.union_frame() {
        Some(f) => println!(
            "  union frame: {:.4} x {:.4} at ({:.4}, {:.4})",
            f.width, f.height, f.center.x, f.center.y
        ),
        None => println!("  scene is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_triple;

    #[test]
    fn parses_whitespace_separated_triple() {
        let (pivot, factor) = parse_triple(" 1.5  -2 0.5 ").unwrap();
        assert_eq!(pivot.x, 1.5);
        assert_eq!(pivot.y, -2.0);
        assert_eq!(factor, 0.5);
    }

    #[test]
    fn rejects_short_and_malformed_lines() {
        assert!(parse_triple("1 2").is_err());
        assert!(parse_triple("1 two 3").is_err());
        assert!(parse_triple("1 2 3 4").is_err());
    }
}
