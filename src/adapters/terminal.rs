//! Terminal implementations of the alert and navigation ports.

use std::io::Write;
use std::sync::Mutex;

use al_core::ports::{AlertPort, NavigatorPort};
use al_core::signup::outcome::SUCCESS_TITLE;
use al_core::signup::{Alert, Route};
use tracing::{info, warn};

/// Prints `title: message`. Success goes to stdout, everything else to stderr.
#[derive(Default)]
pub struct TerminalAlertPresenter {
    shown: Mutex<Vec<Alert>>,
}

impl TerminalAlertPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(alert: &Alert) -> String {
        format!("{}: {}", alert.title, alert.message)
    }

    /// Alerts shown so far, oldest first.
    pub fn shown(&self) -> Vec<Alert> {
        self.shown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl AlertPort for TerminalAlertPresenter {
    fn show(&self, alert: &Alert) {
        let line = Self::format(alert);
        let written = if alert.title == SUCCESS_TITLE {
            writeln!(std::io::stdout().lock(), "{line}")
        } else {
            writeln!(std::io::stderr().lock(), "{line}")
        };
        if let Err(err) = written {
            warn!(error = %err, "failed to print alert");
        }

        self.shown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(alert.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Replace,
    Push,
}

/// Navigator without screens: logs every route change and keeps the history.
#[derive(Default)]
pub struct TerminalNavigator {
    history: Mutex<Vec<(NavigationKind, Route)>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_route(&self) -> Option<Route> {
        self.history().last().map(|(_, route)| *route)
    }

    pub fn history(&self) -> Vec<(NavigationKind, Route)> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, kind: NavigationKind, route: Route) {
        info!(route = %route, kind = ?kind, "navigate");
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((kind, route));
    }
}

impl NavigatorPort for TerminalNavigator {
    fn replace(&self, route: Route) {
        self.record(NavigationKind::Replace, route);
    }

    fn push(&self, route: Route) {
        self.record(NavigationKind::Push, route);
    }
}
