// Host-side tests for parallax offsets and the math they rely on.

use scroll_core::css::px;
use scroll_core::math::{lerp, norm, round_to};
use scroll_core::{ParallaxConfig, ParallaxState};

#[test]
fn lerp_interpolates_and_extrapolates() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(4.0, 8.0, 0.0), 4.0);
    assert_eq!(lerp(4.0, 8.0, 1.0), 8.0);
    // t = 2 overshoots b by (b - a)
    assert_eq!(lerp(100.0, 80.0, 2.0), 60.0);
}

#[test]
fn norm_and_rounding_helpers() {
    assert_eq!(norm(640.0, 0.0, 1280.0), 0.5);
    assert_eq!(norm(15.0, 10.0, 20.0), 0.5);
    assert_eq!(round_to(1.23456, 100.0), 1.23);
    assert_eq!(round_to(-2.005_1, 100.0), -2.01);
}

#[test]
fn rounding_halves_go_toward_positive_infinity() {
    assert_eq!(round_to(0.125, 100.0), 0.13);
    assert_eq!(round_to(-0.125, 100.0), -0.12);
    assert_eq!(round_to(-2.5, 1.0), -2.0);
}

#[test]
fn even_layers_follow_even_rate() {
    let mut state = ParallaxState::new(0.0, ParallaxConfig::default());
    for p in [0.0, 1.0, 250.0, 1337.5] {
        state.on_scroll(p);
        assert_eq!(state.offset_for(0), lerp(p, p * 0.8, 2.0));
        assert_eq!(state.offset_for(2), lerp(p, p * 0.8, 2.0));
    }
    state.on_scroll(1000.0);
    assert!((state.offset_for(0) - 600.0).abs() < 1e-9);
}

#[test]
fn odd_layers_are_shifted_by_construction_baseline() {
    let p0 = 300.0;
    let mut state = ParallaxState::new(p0, ParallaxConfig::default());
    let baseline = lerp(p0, p0 * 0.2, 2.0);
    assert_eq!(state.baseline(), baseline);

    for p in [0.0, 300.0, 900.0] {
        state.on_scroll(p);
        assert_eq!(state.scroll_position(), p);
        assert_eq!(state.offset_for(1), lerp(p, p * 0.2, 2.0) - baseline);
        assert_eq!(state.offset_for(3), state.offset_for(1));
    }
}

#[test]
fn first_frame_before_any_scroll_uses_construction_offset() {
    let state = ParallaxState::new(500.0, ParallaxConfig::default());
    // Odd layers start at zero, even layers at their steady-state position
    assert!(state.offset_for(1).abs() < 1e-9);
    assert!((state.offset_for(0) - 300.0).abs() < 1e-9);
}

#[test]
fn offsets_alternate_by_parity() {
    let mut state = ParallaxState::new(0.0, ParallaxConfig::default());
    state.on_scroll(100.0);
    let offs: Vec<f64> = state.offsets(4).collect();
    assert_eq!(offs.len(), 4);
    assert_eq!(offs[0], offs[2]);
    assert_eq!(offs[1], offs[3]);
    assert_ne!(offs[0], offs[1]);
}

#[test]
fn no_targets_yields_no_offsets() {
    let state = ParallaxState::new(42.0, ParallaxConfig::default());
    assert_eq!(state.offsets(0).count(), 0);
}

#[test]
fn px_formats_background_position() {
    assert_eq!(px(600.0), "600px");
    assert_eq!(px(-120.5), "-120.5px");
    assert_eq!(px(3000.0), "3000px");
}
