use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=20 {
            let v = ease.apply(i as f64 / 20.0);
            assert!(v >= prev, "{ease:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::InCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::SmoothStep.apply(2.0), 1.0);
}
