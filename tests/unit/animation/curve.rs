use super::*;

fn p(v: f64) -> Progress {
    Progress::new(v)
}

#[test]
fn hold_is_constant_between_keys() {
    let curve = Curve {
        keys: vec![
            CurveKey {
                at: 0.0,
                value: 1.0,
                ease: Ease::Linear,
            },
            CurveKey {
                at: 0.5,
                value: 3.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Hold,
        default: None,
    };
    assert_eq!(curve.sample(p(0.25)).unwrap(), 1.0);
    assert_eq!(curve.sample(p(0.5)).unwrap(), 3.0);
}

#[test]
fn linear_interpolates_and_holds_outside() {
    let curve = Curve::linear([(0.5, 0.2), (0.6, 1.0)]);
    curve.validate().unwrap();
    assert_eq!(curve.sample(p(0.1)).unwrap(), 0.2);
    assert!((curve.sample(p(0.55)).unwrap() - 0.6).abs() < 1e-9);
    assert_eq!(curve.sample(p(0.9)).unwrap(), 1.0);
}

#[test]
fn vec2_curve_interpolates_both_axes() {
    let curve = Curve::linear([(0.0, Vec2::new(0.0, 10.0)), (1.0, Vec2::new(4.0, 0.0))]);
    let v = curve.sample(p(0.5)).unwrap();
    assert_eq!(v, Vec2::new(2.0, 5.0));
}

#[test]
fn validate_rejects_unsorted_and_out_of_range() {
    let unsorted = Curve::linear([(0.6, 0.0), (0.4, 1.0)]);
    assert!(unsorted.validate().is_err());

    let outside = Curve::linear([(1.2, 0.0)]);
    assert!(outside.validate().is_err());

    let empty: Curve<f64> = Curve {
        keys: vec![],
        mode: InterpMode::Linear,
        default: None,
    };
    assert!(empty.validate().is_err());
    assert!(empty.sample(p(0.5)).is_err());
}

#[test]
fn empty_curve_uses_default() {
    let curve: Curve<f64> = Curve {
        keys: vec![],
        mode: InterpMode::Linear,
        default: Some(0.75),
    };
    assert_eq!(curve.sample(p(0.3)).unwrap(), 0.75);
}
