//! Aggregate reporting tests for the scene.

use shapekit_geom::{Figure, Point, Polygon, Rectangle, Ring, Scene, ShapeType};

const EPS: f64 = 1e-9;

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Rectangle::new(4.0, 5.0, Point::new(2.0, 3.0)).unwrap());
    scene.add(Ring::new(4.4, Point::new(1.0, 1.0), 1.1, Point::new(1.1, 1.1)).unwrap());
    scene.add(
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 3.0),
            Point::new(1.0, 4.0),
        ])
        .unwrap(),
    );
    scene
}

#[test]
fn test_shapes_keep_insertion_order() {
    let scene = sample_scene();
    let kinds: Vec<ShapeType> = scene.shapes().iter().map(|s| s.shape_type()).collect();
    assert_eq!(
        kinds,
        vec![ShapeType::Rectangle, ShapeType::Ring, ShapeType::Polygon]
    );
}

#[test]
fn test_total_area_sums_in_insertion_order() {
    let scene = sample_scene();
    let expected: f64 = scene.shapes().iter().map(|s| s.area()).sum();
    assert_eq!(scene.total_area(), expected);

    let by_hand = 20.0 + std::f64::consts::PI * (4.4 * 4.4 - 1.1 * 1.1) + 4.5;
    assert!((scene.total_area() - by_hand).abs() < EPS);
}

#[test]
fn test_union_frame_edges_are_min_max_of_members() {
    let scene = sample_scene();
    let union = scene.union_frame().unwrap();

    let mut left = f64::INFINITY;
    let mut bottom = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    let mut top = f64::NEG_INFINITY;
    for shape in scene.shapes() {
        let f = shape.frame_rect();
        left = left.min(f.left());
        bottom = bottom.min(f.bottom());
        right = right.max(f.right());
        top = top.max(f.top());
    }

    assert!((union.left() - left).abs() < EPS);
    assert!((union.bottom() - bottom).abs() < EPS);
    assert!((union.right() - right).abs() < EPS);
    assert!((union.top() - top).abs() < EPS);

    // The ring's bounding square (center (1, 1), radius 4.4) sets three
    // edges; the rectangle reaches highest (center y 3, height 5).
    assert!((union.left() - (-3.4)).abs() < EPS);
    assert!((union.bottom() - (-3.4)).abs() < EPS);
    assert!((union.right() - 5.4).abs() < EPS);
    assert!((union.top() - 5.5).abs() < EPS);
}

#[test]
fn test_empty_scene_has_no_union_frame() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert_eq!(scene.total_area(), 0.0);
    assert!(scene.union_frame().is_none());
}

#[test]
fn test_scale_about_all_scales_total_area() {
    let mut scene = sample_scene();
    let before = scene.total_area();

    scene.scale_about_all(Point::new(-2.0, 6.0), 2.0).unwrap();
    assert!((scene.total_area() - 4.0 * before).abs() < 1e-6);
}

#[test]
fn test_scale_about_all_rejects_bad_factor_without_mutating() {
    let mut scene = sample_scene();
    let areas: Vec<f64> = scene.shapes().iter().map(|s| s.area()).collect();

    assert!(scene.scale_about_all(Point::new(0.0, 0.0), 0.0).is_err());
    assert!(scene.scale_about_all(Point::new(0.0, 0.0), -3.0).is_err());

    let after: Vec<f64> = scene.shapes().iter().map(|s| s.area()).collect();
    assert_eq!(areas, after);
}

#[test]
fn test_scene_clone_is_independent() {
    let scene = sample_scene();
    let mut copy = scene.clone();
    copy.scale_about_all(Point::new(0.0, 0.0), 3.0).unwrap();

    assert!((scene.total_area() * 9.0 - copy.total_area()).abs() < 1e-6);
}
