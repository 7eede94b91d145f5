use check_graphite::core::{Classifier, Severity, StatusReport, Verdict, VerdictSink};

#[test]
fn test_critical_outranks_unknown() {
    let mut report = StatusReport::new();
    report.emit(Verdict::unknown("a", "target not found: a"));
    report.emit(Verdict::status("b", Severity::Critical, "target is empty: b"));

    assert_eq!(report.status(), Severity::Critical);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn test_unknown_outranks_warning() {
    let classifier = Classifier::new(Some(1.0), None, false);
    let mut report = StatusReport::new();
    report.emit(classifier.classify("a", 5.0));
    report.emit(Verdict::unknown("b", "target not found: b"));

    assert_eq!(report.status(), Severity::Unknown);
    assert_eq!(report.exit_code(), 3);
}

#[test]
fn test_perfdata_with_unset_bounds() {
    let classifier = Classifier::new(None, Some(f64::NAN), true);
    let mut report = StatusReport::new();
    report.emit(classifier.classify("load", 0.5));

    assert_eq!(report.render(), "OK - load at 0.50 | load=0.5;;");
}

#[test]
fn test_percentage_perfdata() {
    let classifier = Classifier::new(Some(2.0), Some(42.0), true);
    let mut report = StatusReport::new();
    report.emit(classifier.classify_percentage("used", 25.0, 50.0));

    assert_eq!(
        report.render(),
        "CRITICAL - used at 50.00% (critical threshold: 42%) | used=50;2;42"
    );
}
