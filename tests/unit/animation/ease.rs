use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutBack,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0), "{ease:?}");
        assert!((ease.apply(7.0) - ease.apply(1.0)).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn in_out_cubic_is_symmetric_about_the_midpoint() {
    assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
    for i in 0..=50 {
        let t = i as f64 / 100.0;
        let a = Ease::InOutCubic.apply(t);
        let b = Ease::InOutCubic.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-12, "t={t}");
    }
}

#[test]
fn curves_are_monotone_on_a_sampled_grid() {
    // OutBack overshoots past 1.0 by design and is excluded.
    for ease in &ALL[..7] {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= prev, "{ease:?} decreased at i={i}");
            prev = v;
        }
    }
}

#[test]
fn out_back_overshoots_then_settles() {
    let peak = (0..=100)
        .map(|i| Ease::OutBack.apply(i as f64 / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!((Ease::OutBack.apply(1.0) - 1.0).abs() < 1e-12);
}
