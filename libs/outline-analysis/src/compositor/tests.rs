use super::*;

fn square(x: f64, y: f64, size: f64) -> Polygon {
    Polygon::new(vec![
        Point2::new(x, y),
        Point2::new(x + size, y),
        Point2::new(x + size, y + size),
        Point2::new(x, y + size),
    ])
}

#[test]
fn test_no_hulls_is_just_bounds() {
    let region = compose(Rect::from_size(390.0, 844.0), &[]);
    assert_eq!(region.subpaths().len(), 1);
    assert_eq!(region.bounds(), Some(&Rect::from_size(390.0, 844.0).to_polygon()));
    assert!(region.holes().is_empty());
    assert_eq!(region.fill_rule(), FillRule::EvenOdd);
    assert!(region.contains(Point2::new(100.0, 100.0)));
    assert!(!region.contains(Point2::new(400.0, 100.0)));
}

#[test]
fn test_hulls_are_reversed() {
    let hull = square(10.0, 10.0, 5.0);
    let region = compose(Rect::from_size(100.0, 100.0), &[hull.clone()]);

    assert_eq!(region.holes(), &[hull.reversed()]);
    assert!(region.bounds().map(Polygon::signed_area).unwrap_or_default() > 0.0);
    assert!(region.holes()[0].signed_area() < 0.0);
}

#[test]
fn test_hulls_punch_holes() {
    let hulls = [square(10.0, 10.0, 10.0), square(60.0, 60.0, 10.0)];
    let region = compose(Rect::from_size(100.0, 100.0), &hulls);

    assert!(region.contains(Point2::new(40.0, 40.0)));
    assert!(!region.contains(Point2::new(15.0, 15.0)));
    assert!(!region.contains(Point2::new(65.0, 65.0)));
}

#[test]
fn test_fill_rules_agree_on_disjoint_hulls() {
    let hulls = [square(10.0, 10.0, 10.0), square(50.0, 10.0, 10.0)];
    let even_odd = compose(Rect::from_size(100.0, 100.0), &hulls);
    let non_zero = even_odd.clone().with_fill_rule(FillRule::NonZero);

    for probe in [
        Point2::new(5.0, 5.0),
        Point2::new(15.0, 15.0),
        Point2::new(55.0, 15.0),
        Point2::new(35.0, 90.0),
        Point2::new(150.0, 15.0),
    ] {
        assert_eq!(even_odd.contains(probe), non_zero.contains(probe), "at {probe}");
    }
}

#[test]
fn test_overlapping_hulls_under_even_odd() {
    // The overlap is covered by bounds plus two holes: three crossings, filled.
    let hulls = [square(10.0, 10.0, 20.0), square(20.0, 20.0, 20.0)];
    let region = compose(Rect::from_size(100.0, 100.0), &hulls);
    assert!(region.contains(Point2::new(25.0, 25.0)));
    assert!(!region.contains(Point2::new(12.0, 12.0)));

    // Winding there is +1 - 1 - 1, so non-zero fills it as well.
    let region = region.with_fill_rule(FillRule::NonZero);
    assert!(region.contains(Point2::new(25.0, 25.0)));
    assert!(!region.contains(Point2::new(12.0, 12.0)));
}

#[test]
fn test_degenerate_hulls_are_skipped() {
    let single = Polygon::new(vec![Point2::new(5.0, 5.0)]);
    let region = compose(Rect::from_size(100.0, 100.0), &[Polygon::empty(), single]);
    assert_eq!(region.subpaths().len(), 1);
}

#[test]
fn test_serialized_contract() {
    let region = compose(Rect::from_size(2.0, 2.0), &[]);
    let json = serde_json::to_value(&region).unwrap();
    assert_eq!(json["fill_rule"], "EvenOdd");
    assert_eq!(json["subpaths"][0]["points"][2], serde_json::json!([2.0, 2.0]));
}
