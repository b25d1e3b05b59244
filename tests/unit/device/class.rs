use super::*;

#[test]
fn default_breakpoints_match_viewport_thresholds() {
    let bp = Breakpoints::default();
    assert_eq!(bp.classify(0), DeviceClass::Phone);
    assert_eq!(bp.classify(375), DeviceClass::Phone);
    assert_eq!(bp.classify(420), DeviceClass::Phone);
    assert_eq!(bp.classify(421), DeviceClass::Tablet);
    assert_eq!(bp.classify(900), DeviceClass::Tablet);
    assert_eq!(bp.classify(901), DeviceClass::Desktop);
    assert_eq!(bp.classify(1280), DeviceClass::Desktop);
}

#[test]
fn custom_breakpoints_are_respected() {
    let bp = Breakpoints {
        phone_max: 600,
        tablet_max: 1200,
    };
    assert_eq!(bp.classify(500), DeviceClass::Phone);
    assert_eq!(bp.classify(1000), DeviceClass::Tablet);
    assert_eq!(bp.classify(1201), DeviceClass::Desktop);
}

#[test]
fn names_round_trip_through_serde() {
    for class in DeviceClass::ALL {
        let json = serde_json::to_string(&class).unwrap();
        assert_eq!(json, format!("\"{}\"", class.as_str()));
        let back: DeviceClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, class);
    }
}

#[test]
fn partial_breakpoints_fill_defaults() {
    let bp: Breakpoints = serde_json::from_str(r#"{"phone_max": 360}"#).unwrap();
    assert_eq!(bp.phone_max, 360);
    assert_eq!(bp.tablet_max, 900);
}
