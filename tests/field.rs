use particle_field_wasm::ParticleField;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn generate_respects_ranges() {
    let mut rng = SmallRng::seed_from_u64(42);
    let field = ParticleField::generate(500, 50.0, 0.0025, &mut rng);
    assert_eq!(field.count(), 500);
    assert_eq!(field.positions().len(), 1500);
    assert_eq!(field.velocities().len(), 1500);
    assert!(field.positions().iter().all(|p| p.abs() <= 50.0));
    assert!(field.velocities().iter().all(|v| v.abs() <= 0.0025));
    // Not degenerate.
    assert!(field.positions().iter().any(|p| *p < -25.0));
    assert!(field.positions().iter().any(|p| *p > 25.0));
}

#[test]
fn from_buffers_checks_shape() {
    assert!(ParticleField::from_buffers(vec![0.0; 6], vec![0.0; 6]).is_some());
    assert!(ParticleField::from_buffers(vec![0.0; 5], vec![0.0; 5]).is_none());
    assert!(ParticleField::from_buffers(vec![0.0; 6], vec![0.0; 3]).is_none());
}

#[test]
fn far_particle_wraps_then_wraps_back() {
    // camera_z = 5, margin = 10, span = 100: band is [-5, 15]. Past 15 the
    // particle drops to -84.5, which is short of -5, so it comes straight back.
    let mut f = ParticleField::from_buffers(vec![1.0, 2.0, 14.5], vec![0.5, 0.25, 1.0]).unwrap();
    f.advance(5.0, 10.0, 100.0);
    assert_eq!(f.position(0), [1.5, 2.25, 15.5]);
}

#[test]
fn near_particle_wraps_to_back() {
    let mut f = ParticleField::from_buffers(vec![0.0, 0.0, -4.5], vec![0.0, 0.0, -1.0]).unwrap();
    f.advance(5.0, 10.0, 100.0);
    assert_eq!(f.position(0)[2], 94.5);
}

#[test]
fn deep_particle_wraps_into_band() {
    let mut f = ParticleField::from_buffers(vec![0.0, 0.0, 95.0], vec![0.0, 0.0, 0.5]).unwrap();
    f.advance(5.0, 10.0, 100.0);
    assert_eq!(f.position(0)[2], -4.5);
}

#[test]
fn particle_inside_band_only_drifts() {
    let mut f = ParticleField::from_buffers(vec![3.0, -3.0, 5.0], vec![0.5, 0.5, 0.5]).unwrap();
    for _ in 0..4 {
        f.advance(5.0, 10.0, 100.0);
    }
    assert_eq!(f.position(0), [5.0, -1.0, 7.0]);
}
