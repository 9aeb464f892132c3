use super::*;

#[test]
fn test_distance2_pythagorean() {
    assert_eq!(distance2(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0)), 5.0);
}

#[test]
fn test_distance2_symmetric_and_zero() {
    let a = Point2::new(-2.5, 7.0);
    let b = Point2::new(3.0, -1.0);
    assert_eq!(distance2(a, b), distance2(b, a));
    assert_eq!(distance2(a, a), 0.0);
}

#[test]
fn test_distance2_off_axis() {
    let d = distance2(Point2::new(-1.0, 2.0), Point2::new(2.0, -2.0));
    assert_eq!(d, 5.0);
    assert_eq!(distance2(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)), 2.0_f64.sqrt());
}
