use super::*;
use crate::error::AnalysisError;
use config::constants::ClusterConfig;
use outline_geometry::{Point2, Rect};

const S1: SurfaceId = SurfaceId::new(1);
const S2: SurfaceId = SurfaceId::new(2);

fn camera(p: Point3) -> Point2 {
    Point2::new(p.x, p.y)
}

/// 3x3 grid with 10 px spacing centered on `(cx, cy)`.
fn blob(cx: f64, cy: f64) -> Vec<Point3> {
    let mut points = Vec::new();
    for i in -1..=1 {
        for j in -1..=1 {
            points.push(Point3::new(cx + 10.0 * i as f64, cy + 10.0 * j as f64, 0.0));
        }
    }
    points
}

fn square_boundary(cx: f64, cy: f64, half: f64) -> Vec<Point3> {
    vec![
        Point3::new(cx - half, cy - half, 0.0),
        Point3::new(cx + half, cy - half, 0.0),
        Point3::new(cx + half, cy + half, 0.0),
        Point3::new(cx - half, cy + half, 0.0),
    ]
}

fn pipeline(mode: Mode, show_markers: bool) -> SpatialPipeline {
    let config = AnalysisConfig::for_screen(390.0, 844.0)
        .unwrap()
        .with_mode(mode)
        .with_markers(show_markers);
    SpatialPipeline::new(config).unwrap()
}

#[test]
fn test_new_revalidates_hand_built_config() {
    let config = AnalysisConfig {
        cluster: ClusterConfig {
            radius: 60.0,
            min_points: 0,
        },
        bounds: Rect::from_size(390.0, 844.0),
        mode: Mode::FeatureTracking,
        show_markers: false,
    };
    assert!(matches!(
        SpatialPipeline::new(config),
        Err(AnalysisError::InvalidParameter { .. })
    ));
}

#[test]
fn test_new_keeps_mode_and_markers() {
    let pipeline = pipeline(Mode::SurfaceDetection, true);
    assert_eq!(pipeline.mode(), Mode::SurfaceDetection);
    assert!(pipeline.show_markers());
    assert_eq!(pipeline.config().cluster.min_points, 8);
}

#[test]
fn test_feature_frame_cuts_out_each_cluster() {
    let pipeline = pipeline(Mode::FeatureTracking, false);
    let mut points = blob(100.0, 100.0);
    points.extend(blob(300.0, 600.0));
    // Isolated noise point.
    points.push(Point3::new(200.0, 400.0, 0.0));

    let region = pipeline.frame(&points, &camera);

    assert_eq!(region.subpaths().len(), 3);
    assert!(!region.contains(Point2::new(100.0, 100.0)));
    assert!(!region.contains(Point2::new(300.0, 600.0)));
    assert!(region.contains(Point2::new(200.0, 400.0)));
    assert!(region.contains(Point2::new(50.0, 50.0)));
}

#[test]
fn test_feature_frame_sparse_points_leave_bounds_only() {
    let pipeline = pipeline(Mode::FeatureTracking, false);
    let points: Vec<Point3> = (0..5).map(|i| Point3::new(10.0 + 70.0 * i as f64, 10.0, 0.0)).collect();
    assert_eq!(pipeline.frame(&points, &camera).subpaths().len(), 1);
}

#[test]
fn test_feature_frame_projects_with_truncation() {
    let pipeline = pipeline(Mode::FeatureTracking, false);
    // Every point lands on the same pixel after truncation: degenerate hull.
    let points: Vec<Point3> = (0..8).map(|i| Point3::new(5.0 + 0.1 * i as f64, 5.5, 0.0)).collect();
    assert_eq!(pipeline.frame(&points, &camera).subpaths().len(), 1);
}

#[test]
fn test_surface_frame_uses_active_outline() {
    let mut pipeline = pipeline(Mode::SurfaceDetection, false);
    let sphere = Sphere::new(Point3::new(100.0, 100.0, 0.0), 20.0);

    assert_eq!(pipeline.frame(&[], &camera).subpaths().len(), 1);

    pipeline.surface_updated(S1, sphere, &square_boundary(100.0, 100.0, 20.0));
    let region = pipeline.frame(&blob(300.0, 600.0), &camera);

    // Feature points are not read in surface detection.
    assert_eq!(region.subpaths().len(), 2);
    assert!(!region.contains(Point2::new(100.0, 100.0)));
    assert!(region.contains(Point2::new(300.0, 600.0)));
}

#[test]
fn test_last_updated_surface_is_outlined() {
    let mut pipeline = pipeline(Mode::SurfaceDetection, false);
    let sphere = Sphere::new(Point3::ZERO, 1.0);
    pipeline.surface_updated(S1, sphere, &square_boundary(100.0, 100.0, 20.0));
    pipeline.surface_updated(S2, sphere, &square_boundary(250.0, 500.0, 20.0));

    let region = pipeline.surface_frame(&camera);
    assert!(region.contains(Point2::new(100.0, 100.0)));
    assert!(!region.contains(Point2::new(250.0, 500.0)));
}

#[test]
fn test_surface_events_ignored_in_feature_tracking() {
    let mut pipeline = pipeline(Mode::FeatureTracking, true);
    let sphere = Sphere::new(Point3::ZERO, 1.0);

    assert_eq!(pipeline.surface_added(S1, sphere), None);
    assert_eq!(pipeline.surface_updated(S1, sphere, &square_boundary(0.0, 0.0, 1.0)), None);
    assert!(pipeline.surfaces().is_empty());
    assert!(pipeline.tracker().active_outline().is_empty());
}

#[test]
fn test_markers_reevaluated_on_surface_events() {
    let mut pipeline = pipeline(Mode::SurfaceDetection, true);

    let first = pipeline.surface_added(S1, Sphere::new(Point3::ZERO, 1.0));
    assert_eq!(first, Some(Vec::new()));

    let second = pipeline
        .surface_added(S2, Sphere::new(Point3::new(4.0, 0.0, 0.0), 1.0))
        .unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].position, Point3::new(2.0, 0.0, 0.0));
    assert_eq!(second[0].source_pair, (S1, S2));

    // Growing S1 until it encloses the meeting point clears the set.
    let third = pipeline
        .surface_updated(S1, Sphere::new(Point3::ZERO, 3.5), &[])
        .unwrap();
    assert!(third.is_empty());
}

#[test]
fn test_markers_disabled_returns_none() {
    let mut pipeline = pipeline(Mode::SurfaceDetection, false);
    assert_eq!(pipeline.surface_added(S1, Sphere::new(Point3::ZERO, 1.0)), None);
    assert_eq!(
        pipeline.surface_added(S2, Sphere::new(Point3::new(4.0, 0.0, 0.0), 1.0)),
        None
    );
    // Still queryable on demand.
    assert_eq!(pipeline.markers().len(), 2);

    pipeline.set_show_markers(true);
    assert_eq!(
        pipeline.surface_added(S2, Sphere::new(Point3::new(4.0, 0.0, 0.0), 1.0)).map(|m| m.len()),
        Some(2)
    );
}

#[test]
fn test_surface_removed_keeps_active_outline() {
    let mut pipeline = pipeline(Mode::SurfaceDetection, false);
    let boundary = square_boundary(100.0, 100.0, 20.0);
    pipeline.surface_updated(S1, Sphere::new(Point3::ZERO, 1.0), &boundary);

    pipeline.surface_removed(S1);

    assert!(pipeline.surface(S1).is_none());
    assert!(!pipeline.tracker().is_tracked(S1));
    assert_eq!(pipeline.tracker().active_outline(), boundary.as_slice());
    assert_eq!(pipeline.surface_frame(&camera).subpaths().len(), 2);
}

#[test]
fn test_mode_switch_resets_session() {
    let mut pipeline = pipeline(Mode::SurfaceDetection, false);
    pipeline.surface_updated(S1, Sphere::new(Point3::ZERO, 1.0), &square_boundary(0.0, 0.0, 1.0));

    // Same mode: nothing happens.
    pipeline.set_mode(Mode::SurfaceDetection);
    assert_eq!(pipeline.surfaces().len(), 1);

    pipeline.set_mode(Mode::FeatureTracking);
    assert_eq!(pipeline.mode(), Mode::FeatureTracking);
    assert!(pipeline.surfaces().is_empty());
    assert_eq!(pipeline.tracker().surface_count(), 0);
    assert!(pipeline.tracker().active_outline().is_empty());
}

#[test]
fn test_render_frame_submits_region() {
    let pipeline = pipeline(Mode::FeatureTracking, false);
    let (sink, frames) = crate::sink::ChannelSink::channel();

    pipeline.render_frame(&blob(100.0, 100.0), &camera, &sink);

    let region = frames.latest().region.unwrap();
    assert_eq!(region, pipeline.frame(&blob(100.0, 100.0), &camera));
    assert_eq!(region.subpaths().len(), 2);
}
