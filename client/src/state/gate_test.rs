use super::*;

#[test]
fn gate_starts_unknown() {
    assert_eq!(AuthGate::new().phase(), GatePhase::Unknown);
}

#[test]
fn token_present_navigates_home() {
    let mut gate = AuthGate::new();
    assert_eq!(gate.observe(Some("tok")), Some(routes::HOME));
    assert_eq!(gate.phase(), GatePhase::Authenticated);
}

#[test]
fn any_token_navigates_home_exactly_once_and_never_to_login() {
    for token in ["a", "tok-123", "eyJhbGciOiJIUzI1NiJ9.e30.x", " padded "] {
        let mut gate = AuthGate::new();
        let mut targets = Vec::new();
        for _ in 0..3 {
            if let Some(target) = gate.observe(Some(token)) {
                targets.push(target);
            }
        }
        assert_eq!(targets, vec![routes::HOME], "token {token:?}");
    }
}

#[test]
fn absent_token_navigates_to_login() {
    let mut gate = AuthGate::new();
    assert_eq!(gate.observe(None), Some(routes::LOGIN));
    assert_eq!(gate.phase(), GatePhase::Unauthenticated);
}

#[test]
fn empty_token_navigates_to_login() {
    for token in ["", "   "] {
        let mut gate = AuthGate::new();
        assert_eq!(gate.observe(Some(token)), Some(routes::LOGIN));
    }
}

#[test]
fn repeated_absence_does_not_navigate_again() {
    let mut gate = AuthGate::new();
    assert_eq!(gate.observe(None), Some(routes::LOGIN));
    assert_eq!(gate.observe(None), None);
    assert_eq!(gate.observe(Some("")), None);
}

#[test]
fn token_change_re_evaluates() {
    let mut gate = AuthGate::new();
    assert_eq!(gate.observe(None), Some(routes::LOGIN));
    assert_eq!(gate.observe(Some("t1")), Some(routes::HOME));
    assert_eq!(gate.observe(Some("t2")), Some(routes::HOME));
    assert_eq!(gate.observe(None), Some(routes::LOGIN));
    assert_eq!(gate.phase(), GatePhase::Unauthenticated);
}
