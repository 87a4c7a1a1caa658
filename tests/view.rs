use approx::assert_relative_eq;
use glam::{Vec3, Vec4};
use particle_field_wasm::view::{Rotation, ViewState};
use particle_field_wasm::FieldConfig;

fn to_ndc(view: &ViewState, p: Vec3) -> Vec3 {
    let clip = view.projection() * view.view() * Vec4::new(p.x, p.y, p.z, 1.0);
    clip.truncate() / clip.w
}

#[test]
fn camera_uses_configured_lens() {
    let v = ViewState::new(&FieldConfig::default(), 1280.0, 720.0, 1.0);
    assert_eq!(v.fov_degrees, 75.0);
    assert_eq!(v.near, 0.1);
    assert_eq!(v.far, 1000.0);
    assert_eq!(v.camera_z, 5.0);
    assert_relative_eq!(v.aspect, 1280.0 / 720.0);
}

#[test]
fn origin_projects_to_screen_center() {
    let v = ViewState::new(&FieldConfig::default(), 1280.0, 720.0, 1.0);
    let ndc = to_ndc(&v, Vec3::ZERO);
    assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-6);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn near_plane_maps_to_minus_one() {
    let v = ViewState::new(&FieldConfig::default(), 800.0, 800.0, 1.0);
    let ndc = to_ndc(&v, Vec3::new(0.0, 0.0, v.camera_z - v.near as f32));
    assert_relative_eq!(ndc.z, -1.0, epsilon = 1e-4);
}

#[test]
fn wider_viewport_compresses_horizontally() {
    let square = ViewState::new(&FieldConfig::default(), 1000.0, 1000.0, 1.0);
    let wide = ViewState::new(&FieldConfig::default(), 2000.0, 1000.0, 1.0);
    let p = Vec3::new(1.0, 1.0, 0.0);

    let a = to_ndc(&square, p);
    let b = to_ndc(&wide, p);
    assert_relative_eq!(b.x, a.x / 2.0, epsilon = 1e-6);
    assert_relative_eq!(b.y, a.y, epsilon = 1e-6);
}

#[test]
fn surface_size_scales_with_pixel_ratio() {
    let mut v = ViewState::new(&FieldConfig::default(), 1000.0, 500.0, 1.0);
    assert_eq!(v.surface_size(), (1000, 500));
    v.set_viewport(1000.0, 500.0, 1.25);
    assert_eq!(v.surface_size(), (1250, 625));
    // Nonsense ratios keep the previous one.
    v.set_viewport(1000.0, 500.0, 0.0);
    assert_eq!(v.pixel_ratio, 1.25);
}

#[test]
fn rotation_matrix_applies_z_swirl() {
    assert_eq!(Rotation::default().matrix(), glam::Mat4::IDENTITY);

    let r = Rotation { x: 0.0, y: 0.0, z: std::f64::consts::FRAC_PI_2 };
    let p = r.matrix().transform_point3(Vec3::X);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
}
