//! Init-once lifecycle of the process-wide oracle.
//!
//! A single test keeps the ordering deterministic: the global is
//! per-process state shared by every test in this binary.

use panchanga::{CivilMoment, GeoPoint, PanchangError, Settings, compute, init, is_initialized};

#[test]
fn init_is_required_and_exactly_once() {
    let moment = CivilMoment::new(2000, 1, 1, 0.0);
    let delhi = GeoPoint::new(28.6139, 77.2090);

    // Before init: computation refuses to run
    assert!(!is_initialized());
    assert_eq!(compute(&moment, &delhi).unwrap_err(), PanchangError::NotInitialized);

    // First init succeeds
    init(Settings::default()).unwrap();
    assert!(is_initialized());

    // Second init is rejected, the first configuration stays
    assert_eq!(
        init(Settings::default()).unwrap_err(),
        PanchangError::AlreadyInitialized
    );

    // After init: the reference request computes
    let result = compute(&moment, &delhi).unwrap();
    assert!((1..=30).contains(&result.tithi.number));
}
