use super::*;

#[test]
fn accepts_full_closed_range() {
    assert!(DiagramParams::new(0.0, 0.0, 0.0).is_ok());
    assert!(DiagramParams::new(1.0, 1.0, 1.0).is_ok());
    assert!(DiagramParams::new(0.3, 0.7, 0.2).is_ok());
}

#[test]
fn rejects_out_of_range_instead_of_clamping() {
    let err = DiagramParams::new(1.5, 0.5, 0.5).unwrap_err();
    assert!(matches!(err, CredenceError::Validation(_)));
    assert!(err.to_string().contains("prior"));

    assert!(DiagramParams::new(0.5, -0.1, 0.5).is_err());
    assert!(DiagramParams::new(0.5, 0.5, f64::NAN).is_err());
    assert!(DiagramParams::new(f64::INFINITY, 0.5, 0.5).is_err());
}

#[test]
fn validate_catches_serde_originated_values() {
    let params: DiagramParams =
        serde_json::from_str(r#"{"prior":2.0,"likelihood":0.5,"antilikelihood":0.5}"#).unwrap();
    assert!(params.validate().is_err());
}

#[test]
fn posterior_matches_bayes_theorem() {
    let params = DiagramParams::new(0.01, 0.90, 0.05).unwrap();
    assert!((params.posterior() - 0.1538).abs() < 1e-4);

    let expected = (0.90 * 0.01) / (0.90 * 0.01 + 0.05 * 0.99);
    assert!((params.posterior() - expected).abs() < 1e-12);
}

#[test]
fn posterior_is_zero_when_evidence_is_impossible() {
    let params = DiagramParams::new(0.4, 0.0, 0.0).unwrap();
    assert_eq!(params.posterior(), 0.0);
}

#[test]
fn certain_prior_gives_certain_posterior() {
    let params = DiagramParams::new(1.0, 0.3, 0.9).unwrap();
    assert!((params.posterior() - 1.0).abs() < 1e-12);
}
