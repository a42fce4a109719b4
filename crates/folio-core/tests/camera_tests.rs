use folio_core::{pick_section, ray_sphere, Camera, CameraPath, EngineError, Placement};
use glam::Vec3;

#[test]
fn path_maps_progress_linearly_both_ways() {
    let path = CameraPath {
        start_z: 8.0,
        end_z: -75.0,
    };
    assert_eq!(path.z_at(0.0), 8.0);
    assert_eq!(path.z_at(1.0), -75.0);
    assert!((path.z_at(0.5) + 33.5).abs() < 1e-5);
    assert!((path.progress_for_z(-33.5) - 0.5).abs() < 1e-6);
    assert_eq!(path.progress_for_z(50.0), 0.0);
    assert_eq!(path.progress_for_z(-500.0), 1.0);
}

#[test]
fn degenerate_path_is_rejected() {
    let path = CameraPath {
        start_z: 3.0,
        end_z: 3.0,
    };
    assert!(matches!(
        path.validate(),
        Err(EngineError::InvalidCameraPath { .. })
    ));
}

#[test]
fn framing_trails_travel_position_and_follows_offset() {
    let cam = Camera::framing(-30.0, Vec3::new(0.2, -0.1, 0.0), 16.0 / 9.0);
    assert!(cam.eye.z > -30.0);
    assert!(cam.target.z < -30.0);
    assert_eq!(cam.eye.x, 0.2);
    assert_eq!(cam.eye.y, -0.1);
}

#[test]
fn center_ray_points_down_the_view_axis() {
    let cam = Camera::framing(0.0, Vec3::ZERO, 1.0);
    let (ro, rd) = cam.screen_ray(400.0, 400.0, 800.0, 800.0);
    assert_eq!(ro, cam.eye);
    let forward = (cam.target - cam.eye).normalize();
    assert!(rd.dot(forward) > 0.999);
}

#[test]
fn ray_sphere_hit_and_miss() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!((hit.unwrap() - 3.0).abs() < 1e-5);
    let miss = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(miss.is_none());
}

#[test]
fn pick_returns_nearest_hit() {
    let placements = vec![
        Placement {
            id: "far".into(),
            position: Vec3::new(0.0, 0.0, -30.0),
        },
        Placement {
            id: "near".into(),
            position: Vec3::new(0.0, 0.0, -15.0),
        },
        Placement {
            id: "aside".into(),
            position: Vec3::new(20.0, 0.0, -10.0),
        },
    ];
    let picked = pick_section(&placements, Vec3::ZERO, Vec3::NEG_Z, 2.0);
    assert_eq!(picked.map(|p| p.id.as_str()), Some("near"));
    assert!(pick_section(&placements, Vec3::ZERO, Vec3::Y, 2.0).is_none());
}
