use portfolio_fx::clock::Clock;
use portfolio_fx::config::BackgroundConfig;
use portfolio_fx::field::ParticleField;
use portfolio_fx::view::{ContainerSize, ViewState};

#[test]
fn aspect_is_width_over_height() {
    let cfg = BackgroundConfig::default();
    for (w, h) in [(1920, 1080), (1080, 1920), (333, 777)] {
        let view = ViewState::new(&cfg, ContainerSize::new(w, h));
        assert_eq!(view.aspect(), w as f32 / h as f32);
    }
}

#[test]
fn projection_is_not_stretched() {
    // x scale must be y scale divided by aspect for circles to stay round.
    let cfg = BackgroundConfig::default();
    for (w, h) in [(1920, 1080), (1080, 1920)] {
        let view = ViewState::new(&cfg, ContainerSize::new(w, h));
        let p = view.projection();
        let aspect = w as f32 / h as f32;
        assert!((p.x_axis.x * aspect - p.y_axis.y).abs() < 1e-5);
    }
}

#[test]
fn zero_height_container_falls_back_to_square() {
    let view = ViewState::new(&BackgroundConfig::default(), ContainerSize::new(640, 0));
    assert_eq!(view.aspect(), 1.0);
    assert_eq!(ContainerSize::new(640, 0).aspect(), None);
}

#[test]
fn camera_sits_at_configured_depth() {
    let view = ViewState::new(&BackgroundConfig::default(), ContainerSize::new(4, 3));
    assert_eq!(view.camera_z(), 30.0);
}

#[test]
fn clock_is_monotonic() {
    let mut clock = Clock::start(1_000.0);
    assert_eq!(clock.elapsed(1_000.0), 0.0);
    assert_eq!(clock.elapsed(3_500.0), 2.5);
    assert_eq!(clock.elapsed(2_000.0), 2.5);
    assert_eq!(clock.elapsed(4_000.0), 3.0);
}

#[test]
fn field_flat_layout() {
    let mut rng = fastrand::Rng::with_seed(42);
    let field = ParticleField::generate(3, 60.0, &mut rng);
    let flat = field.to_flat();
    assert_eq!(flat.len(), 9);
    assert_eq!(flat[3..6], field.positions()[1].to_array());
}

#[test]
fn same_seed_same_field() {
    let a = ParticleField::generate(50, 60.0, &mut fastrand::Rng::with_seed(9));
    let b = ParticleField::generate(50, 60.0, &mut fastrand::Rng::with_seed(9));
    assert_eq!(a.positions(), b.positions());
    assert!(ParticleField::generate(0, 60.0, &mut fastrand::Rng::new()).is_empty());
}
