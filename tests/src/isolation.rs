//! Partial-failure tolerance: one rigged panel must not blank its siblings.

use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use webcheck_common::address::classify;
use webcheck_core::boundary::{FailureReporter, Panel, PanelBoundary};
use webcheck_core::dispatch::route_for;
use webcheck_core::panels::panels_for;

struct RiggedPanel;

impl Panel for RiggedPanel {
    fn name(&self) -> &str {
        "Rigged"
    }

    fn render(&mut self) -> Vec<String> {
        panic!("downstream result had an unexpected shape");
    }
}

struct CountingReporter {
    reports: Arc<AtomicUsize>,
}

impl FailureReporter for CountingReporter {
    fn report(&self, _panel: &str, _detail: &str) {
        self.reports.fetch_add(1, Ordering::SeqCst);
    }
}

fn quiet_panics<T>(f: impl FnOnce() -> T) -> T {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = f();
    panic::set_hook(hook);
    result
}

#[test]
fn test_one_failing_section_leaves_siblings_intact() {
    quiet_panics(|| {
        let route = route_for(&classify("1.1.1.1")).unwrap();
        let reports = Arc::new(AtomicUsize::new(0));

        let mut boundaries = panels_for(&route);
        boundaries.push(
            PanelBoundary::new(Box::new(RiggedPanel))
                .with_title("Rigged")
                .with_reporter(Box::new(CountingReporter {
                    reports: reports.clone(),
                })),
        );

        let rendered: Vec<Vec<String>> = boundaries.iter_mut().map(|b| b.render()).collect();

        // The rigged section latched and reported once.
        assert!(boundaries[2].failed());
        assert_eq!(reports.load(Ordering::SeqCst), 1);
        assert_eq!(rendered[2][0], "Rigged");

        // Healthy siblings rendered exactly as they would have alone.
        assert!(!boundaries[0].failed());
        assert!(!boundaries[1].failed());
        assert!(rendered[0].contains(&"Kind: ipv4".to_string()));
        assert!(rendered[1].contains(&"Scope: global".to_string()));

        // Re-rendering the whole view keeps the fallback and does not
        // re-report.
        let again: Vec<Vec<String>> = boundaries.iter_mut().map(|b| b.render()).collect();
        assert_eq!(again, rendered);
        assert_eq!(reports.load(Ordering::SeqCst), 1);
    });
}
