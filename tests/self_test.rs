use letcalc::self_test::{FIXTURES, Fixture, run_fixtures, run_self_test};

#[test]
fn built_in_fixtures_all_pass() {
    let mut out = Vec::new();
    let report = run_self_test(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(report.all_passed(), "self-test output:\n{text}");
    assert_eq!(report.passed, FIXTURES.len());
    assert_eq!(text.matches("[PASS]").count(), FIXTURES.len());
    assert!(!text.contains("[FAIL]"));
    assert!(text.contains("Input: let x = 2 (x + 2) * 3 Result: 12 [PASS]"));
}

#[test]
fn wrong_value_and_error_both_fail() {
    let fixtures = [Fixture { input: "1+1", expected: 3.0 },
                    Fixture { input: "1/0", expected: 0.0 },
                    Fixture { input: "4", expected: 4.0 }];
    let mut out = Vec::new();
    let report = run_fixtures(&fixtures, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 2);
    assert!(!report.all_passed());
    assert!(text.contains("Input: 1+1 Result: 2 [FAIL]"));
    assert!(text.contains("Input: 1/0 Result: Error thrown: Error at column 2: Division by zero. [FAIL]"));
}

#[test]
fn fixtures_do_not_share_variables() {
    let fixtures = [Fixture { input: "let q = 1", expected: 1.0 },
                    Fixture { input: "q", expected: 1.0 }];
    let report = run_fixtures(&fixtures, &mut Vec::new()).unwrap();
    assert_eq!(report.failed, 1);
}
