use cellscan_core::error::CellscanError;
use cellscan_core::params::{DetectParams, RawParams};

#[test]
fn test_default_raw_params_round_trip() {
    let parsed = RawParams::default().parse().unwrap();
    assert_eq!(parsed, DetectParams::default());
}

#[test]
fn test_invalid_field_is_named() {
    let mut raw = RawParams::default();
    raw.kernel_size = "seven".into();

    let err = raw.parse().unwrap_err();
    match err {
        CellscanError::InvalidParameter { name, value } => {
            assert_eq!(name, "kernel_size");
            assert_eq!(value, "seven");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_out_of_range_u8_is_invalid() {
    let mut raw = RawParams::default();
    raw.hue_hi = "300".into();
    assert!(matches!(
        raw.parse(),
        Err(CellscanError::InvalidParameter { name: "hue_hi", .. })
    ));
}

#[test]
fn test_whitespace_is_tolerated() {
    let mut raw = RawParams::default();
    raw.min_area = " 42.5 ".into();
    assert_eq!(raw.parse().unwrap().min_area, 42.5);
}

#[test]
fn test_negative_kernel_parses() {
    // Coercion to a usable diameter happens in the pipeline, not here.
    let mut raw = RawParams::default();
    raw.kernel_size = "-3".into();
    assert_eq!(raw.parse().unwrap().kernel_size, -3);
}

#[test]
fn test_toml_with_partial_fields_uses_defaults() {
    let params: DetectParams = toml::from_str(
        r#"
        hue_lo = 5
        hue_hi = 15
        min_area = 100.0
        "#,
    )
    .unwrap();

    assert_eq!(params.hue_lo, 5);
    assert_eq!(params.hue_hi, 15);
    assert_eq!(params.min_area, 100.0);
    assert_eq!(params.sat_lo, DetectParams::default().sat_lo);
    assert_eq!(params.kernel_size, DetectParams::default().kernel_size);
}

#[test]
fn test_toml_round_trip() {
    let params = DetectParams::default();
    let text = toml::to_string(&params).unwrap();
    let back: DetectParams = toml::from_str(&text).unwrap();
    assert_eq!(back, params);
}
