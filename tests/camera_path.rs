#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use cubic_spline::math::Vector3;
use cubic_spline::{ControlPoint, SampleCurve, SampleParams, Spline, SplineError};

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cubic_spline=debug".parse().unwrap_or_default());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn camera_track() -> Spline<Vector3, f64> {
    Spline::from_positions_over(
        [
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(5.0, 2.0, 8.0),
            Vector3::new(10.0, 0.0, 6.0),
            Vector3::new(12.0, -4.0, 6.0),
            Vector3::new(14.0, -4.0, 2.0),
        ],
        8.0,
    )
    .unwrap()
}

#[test]
fn playback_passes_through_keyframes() {
    init_logging();
    let mut track = camera_track();
    let keys: Vec<(f64, Vector3)> = track
        .iter()
        .map(|p| (p.parameter(), *p.position()))
        .collect();

    for (t, position) in &keys[..keys.len() - 1] {
        assert!((track.get(*t).unwrap() - position).norm() < 1e-9);
    }

    // Playback at 60 frames over the whole track, monotonically increasing.
    for frame in 0..60_u32 {
        let t = track.end_time() * f64::from(frame) / 60.0;
        let p = track.get(t).unwrap();
        assert!(p.iter().all(|c| c.is_finite()));
    }
    assert_eq!(track.rebuild_count(), 4);
}

#[test]
fn editing_a_keyframe_reshapes_only_nearby_motion() {
    init_logging();
    let mut track = camera_track();
    track.update();
    let far = track.get(7.5).unwrap();

    track
        .point_mut(1)
        .unwrap()
        .set_position(Vector3::new(5.0, 6.0, 8.0));
    assert!(track.is_point_dirty(1));

    assert!((track.get(2.0).unwrap() - Vector3::new(5.0, 6.0, 8.0)).norm() < 1e-9);
    assert_eq!(track.get(7.5).unwrap(), far);
}

#[test]
fn natural_ends_and_smooth_joins() {
    init_logging();
    let mut track = camera_track();
    assert!(track.acceleration(0.0).unwrap().norm() < 1e-9);
    assert!(track.acceleration(8.0 - 1e-9).unwrap().norm() < 1e-6);

    for knot in [2.0, 4.0, 6.0] {
        let before = track.speed(knot - 1e-9).unwrap();
        let at = track.speed(knot).unwrap();
        assert!((before - at).norm() < 1e-6);
    }
}

#[test]
fn out_of_range_queries_are_rejected() {
    let mut track = camera_track();
    let err = track.get(8.0).unwrap_err();
    assert_eq!(
        err,
        SplineError::ParameterOutOfRange {
            value: 8.0,
            min: 0.0,
            max: 8.0,
        }
    );
    assert_eq!(
        err.to_string(),
        "parameter 8 is out of range [0, 8)"
    );
    assert!(track.speed(-1.0).is_err());
}

#[test]
fn single_precision_keyframes() {
    let mut s = Spline::<f32, f32>::from_control_points([
        ControlPoint::new(0.0, 1.0, 0.0),
        ControlPoint::new(1.0, 0.0, 0.5),
        ControlPoint::new(0.0, -1.0, 1.0),
    ])
    .unwrap();
    assert_relative_eq!(s.get(0.5).unwrap(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(s.speed(0.5).unwrap(), 0.0, epsilon = 1e-5);

    s.add(ControlPoint::new(-1.0, 0.0, 1.5)).unwrap();
    assert_eq!(s.segment_count(), 3);
    assert_relative_eq!(s.get(1.0).unwrap(), 0.0, epsilon = 1e-5);
}

#[test]
fn sampled_track() {
    init_logging();
    let mut track = camera_track();
    let line = SampleCurve::new(SampleParams {
        samples_per_segment: 10,
        ..SampleParams::default()
    })
    .execute(&mut track)
    .unwrap();
    assert_eq!(line.len(), 40);
    assert_relative_eq!(line.parameters[39], 8.0 * 39.0 / 40.0, epsilon = 1e-12);
    assert!((line.points[0] - Vector3::new(0.0, 0.0, 10.0)).norm() < 1e-12);
}
