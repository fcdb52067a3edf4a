//! Landing-route decision: send the visitor home or to login.
//!
//! DESIGN
//! ======
//! The gate is evaluated from a reactive effect keyed on the session token.
//! It remembers the last token it acted on, so re-running the effect with the
//! same token never produces a second navigation; a different token (login or
//! logout elsewhere) re-evaluates.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::routes;

/// Where the gate currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    /// Before the first evaluation.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Gate state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthGate {
    phase: GatePhase,
    observed: Option<Option<String>>,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Evaluate for `token`. Returns the route to replace history with, or
    /// `None` if this token was already acted on.
    pub fn observe(&mut self, token: Option<&str>) -> Option<&'static str> {
        let token = token.filter(|t| !t.trim().is_empty()).map(str::to_owned);
        if self.observed.as_ref() == Some(&token) {
            return None;
        }
        let (phase, target) = if token.is_some() {
            (GatePhase::Authenticated, routes::HOME)
        } else {
            (GatePhase::Unauthenticated, routes::LOGIN)
        };
        self.phase = phase;
        self.observed = Some(token);
        Some(target)
    }
}
