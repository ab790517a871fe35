use super::*;

fn key(frame: u64, prior: f64, ease: Ease) -> Keyframe {
    Keyframe {
        frame: FrameIndex(frame),
        params: DiagramParams::new(prior, 0.5, 0.5).unwrap(),
        ease,
    }
}

fn track() -> ParamTrack {
    ParamTrack::new(vec![
        key(10, 0.2, Ease::Linear),
        key(20, 0.8, Ease::Linear),
        key(40, 0.4, Ease::Linear),
    ])
    .unwrap()
}

#[test]
fn structure_is_validated() {
    assert!(matches!(
        ParamTrack::new(vec![]),
        Err(CredenceError::Animation(_))
    ));

    // Duplicate and out-of-order frames are both rejected.
    assert!(ParamTrack::new(vec![key(5, 0.1, Ease::Linear), key(5, 0.2, Ease::Linear)]).is_err());
    assert!(ParamTrack::new(vec![key(9, 0.1, Ease::Linear), key(3, 0.2, Ease::Linear)]).is_err());

    let mut bad = track();
    bad.keys[1].params.prior = 7.0;
    assert!(bad.validate().is_err());
}

#[test]
fn holds_outside_the_keyed_range() {
    let t = track();
    assert_eq!(t.sample(FrameIndex(0)).prior, 0.2);
    assert_eq!(t.sample(FrameIndex(10)).prior, 0.2);
    assert_eq!(t.sample(FrameIndex(40)).prior, 0.4);
    assert_eq!(t.sample(FrameIndex(999)).prior, 0.4);
    assert_eq!(t.end_frame(), FrameIndex(40));
}

#[test]
fn interpolates_between_neighbors() {
    let t = track();
    let mid = t.sample(FrameIndex(15));
    assert!((mid.prior - 0.5).abs() < 1e-12);

    // Quarter of the way through the second segment.
    let quarter = t.sample(FrameIndex(25));
    assert!((quarter.prior - (0.8 + (0.4 - 0.8) * 0.25)).abs() < 1e-12);
}

#[test]
fn ease_toward_next_key_comes_from_the_left_key() {
    let t = ParamTrack::new(vec![key(0, 0.0, Ease::InQuad), key(10, 1.0, Ease::Linear)]).unwrap();
    // InQuad(0.5) = 0.25, so the halfway frame sits a quarter of the way up.
    assert!((t.sample(FrameIndex(5)).prior - 0.25).abs() < 1e-12);
}

#[test]
fn geometry_at_solves_the_sampled_frame() {
    let t = track();
    let d = t.geometry_at(FrameIndex(15), 2.0).unwrap();
    assert!((d.h_rect.width() - 1.0).abs() < 1e-12);

    let area: f64 = d.strips().iter().map(|r| r.area()).sum();
    assert!((area - 4.0).abs() < 1e-9);
}

#[test]
fn geometry_at_revalidates_the_track() {
    let mut bad = track();
    bad.keys[0].params.likelihood = -0.5;
    assert!(bad.geometry_at(FrameIndex(0), 2.0).is_err());
}

#[test]
fn json_script_round_trips() {
    let t = track();
    let json = t.to_json_string().unwrap();
    let back = ParamTrack::from_json_str(&json).unwrap();
    assert_eq!(back.keys.len(), 3);
    assert_eq!(back.keys[1].frame, FrameIndex(20));
    assert_eq!(back.keys[1].params, t.keys[1].params);
}

#[test]
fn json_script_parse_failures_are_reported() {
    assert!(matches!(
        ParamTrack::from_json_str("not json"),
        Err(CredenceError::Serde(_))
    ));

    // Well-formed JSON carrying invalid probabilities still fails.
    let bad = r#"{"keys":[{"frame":0,"params":{"prior":2.0,"likelihood":0.5,"antilikelihood":0.5},"ease":"Linear"}]}"#;
    assert!(matches!(
        ParamTrack::from_json_str(bad),
        Err(CredenceError::Validation(_))
    ));
}
