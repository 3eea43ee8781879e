//! # Panel Boundary
//!
//! Failure isolation for independently rendered result sections.
//!
//! The results view composes many panels per classified address. A defect in
//! one panel's render must not blank its siblings, so every panel is wrapped
//! in its own [`PanelBoundary`]: a one-way latch that catches a panic escaping
//! the synchronous render call, reports it once, and renders a static
//! fallback card for the rest of that boundary's life. Recovery means
//! constructing a fresh boundary, never un-latching, because the failed
//! panel's internal state is assumed corrupted.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

const FALLBACK_MESSAGE: &str = "This section unexpectedly failed to render";
const FALLBACK_HINT: &str =
    "This usually happens when a result was not what was expected. Check the logs for more info.";

/// A single, independently failing section of the results view.
pub trait Panel {
    /// Short name, used as the card title and in failure reports.
    fn name(&self) -> &str;

    /// Produces the card body lines. May panic; callers are expected to keep
    /// the panel behind a [`PanelBoundary`].
    fn render(&mut self) -> Vec<String>;
}

/// Receives `(panel, detail)` on every boundary failure transition.
///
/// Fire-and-forget: no return value, and a defect inside a reporter is
/// swallowed by the boundary rather than escalated.
pub trait FailureReporter {
    fn report(&self, panel: &str, detail: &str);
}

/// Default reporter, forwards to the tracing stack.
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, panel: &str, detail: &str) {
        error!("section '{panel}' failed to render: {detail}");
    }
}

/// Wraps one [`Panel`] and converts a panic during its render into a
/// fallback card.
pub struct PanelBoundary {
    inner: Box<dyn Panel>,
    reporter: Box<dyn FailureReporter>,
    /// Optional label shown above the fallback message.
    title: Option<String>,
    failed: bool,
    error_detail: Option<String>,
}

impl PanelBoundary {
    pub fn new(panel: Box<dyn Panel>) -> Self {
        Self {
            inner: panel,
            reporter: Box::new(TracingReporter),
            title: None,
            failed: false,
            error_detail: None,
        }
    }

    /// Sets the fallback card title. Without one, the title line is omitted.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Renders the wrapped panel, or the fallback card once the panel has
    /// panicked during an earlier render of this instance.
    pub fn render(&mut self) -> Vec<String> {
        if self.failed {
            return self.fallback();
        }

        let inner = &mut self.inner;
        match panic::catch_unwind(AssertUnwindSafe(|| inner.render())) {
            Ok(lines) => lines,
            Err(payload) => {
                self.failed = true;
                self.error_detail = Some(panic_message(payload));
                self.report_failure();
                self.fallback()
            }
        }
    }

    fn report_failure(&self) {
        let name = self.inner.name();
        let detail = self.error_detail.as_deref().unwrap_or("unknown");
        let reporter = &self.reporter;
        // Reporting must never raise; a panicking reporter is swallowed.
        let _ = panic::catch_unwind(AssertUnwindSafe(|| reporter.report(name, detail)));
    }

    fn fallback(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.push(FALLBACK_MESSAGE.to_string());
        lines.push(FALLBACK_HINT.to_string());
        if let Some(detail) = &self.error_detail {
            lines.push(format!("details: {detail}"));
        }
        lines
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unrecoverable render failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct HealthyPanel;

    impl Panel for HealthyPanel {
        fn name(&self) -> &str {
            "Healthy"
        }

        fn render(&mut self) -> Vec<String> {
            vec!["all good".to_string()]
        }
    }

    /// Panics on every render, counting how often it was actually invoked.
    struct FailingPanel {
        calls: Arc<AtomicUsize>,
    }

    impl Panel for FailingPanel {
        fn name(&self) -> &str {
            "Failing"
        }

        fn render(&mut self) -> Vec<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            panic!("unexpected result shape");
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

    struct PanickingReporter;

    impl FailureReporter for PanickingReporter {
        fn report(&self, _panel: &str, _detail: &str) {
            panic!("reporter is broken too");
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
    fn test_healthy_panel_renders_through() {
        let mut boundary = PanelBoundary::new(Box::new(HealthyPanel));
        assert_eq!(boundary.render(), vec!["all good".to_string()]);
        assert!(!boundary.failed());
    }

    #[test]
    fn test_failure_latches_and_reports_once() {
        quiet_panics(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let reports = Arc::new(AtomicUsize::new(0));

            let mut boundary = PanelBoundary::new(Box::new(FailingPanel {
                calls: calls.clone(),
            }))
            .with_reporter(Box::new(CountingReporter {
                reports: reports.clone(),
            }));

            let first = boundary.render();
            assert!(boundary.failed());
            assert!(first.contains(&"details: unexpected result shape".to_string()));

            // Re-renders of the same mount keep showing the fallback without
            // re-invoking the panel or the reporter.
            let second = boundary.render();
            let third = boundary.render();
            assert_eq!(first, second);
            assert_eq!(first, third);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert_eq!(reports.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_sibling_boundaries_are_isolated() {
        quiet_panics(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let mut failing = PanelBoundary::new(Box::new(FailingPanel {
                calls: calls.clone(),
            }))
            .with_reporter(Box::new(CountingReporter {
                reports: Arc::new(AtomicUsize::new(0)),
            }));
            let mut healthy = PanelBoundary::new(Box::new(HealthyPanel));

            failing.render();
            assert!(failing.failed());
            assert_eq!(healthy.render(), vec!["all good".to_string()]);
            assert!(!healthy.failed());
        });
    }

    #[test]
    fn test_title_line_is_optional() {
        quiet_panics(|| {
            let mut untitled = PanelBoundary::new(Box::new(FailingPanel {
                calls: Arc::new(AtomicUsize::new(0)),
            }))
            .with_reporter(Box::new(CountingReporter {
                reports: Arc::new(AtomicUsize::new(0)),
            }));
            let lines = untitled.render();
            assert_eq!(lines[0], FALLBACK_MESSAGE);

            let mut titled = PanelBoundary::new(Box::new(FailingPanel {
                calls: Arc::new(AtomicUsize::new(0)),
            }))
            .with_title("Server Info")
            .with_reporter(Box::new(CountingReporter {
                reports: Arc::new(AtomicUsize::new(0)),
            }));
            let lines = titled.render();
            assert_eq!(lines[0], "Server Info");
            assert_eq!(lines[1], FALLBACK_MESSAGE);
        });
    }

    #[test]
    fn test_panicking_reporter_is_swallowed() {
        quiet_panics(|| {
            let mut boundary = PanelBoundary::new(Box::new(FailingPanel {
                calls: Arc::new(AtomicUsize::new(0)),
            }))
            .with_reporter(Box::new(PanickingReporter));

            let lines = boundary.render();
            assert!(boundary.failed());
            assert_eq!(lines[0], FALLBACK_MESSAGE);
        });
    }

    #[test]
    fn test_non_string_panic_payload() {
        quiet_panics(|| {
            struct OpaquePanel;
            impl Panel for OpaquePanel {
                fn name(&self) -> &str {
                    "Opaque"
                }
                fn render(&mut self) -> Vec<String> {
                    panic::panic_any(42_u32);
                }
            }

            let mut boundary = PanelBoundary::new(Box::new(OpaquePanel))
                .with_reporter(Box::new(CountingReporter {
                    reports: Arc::new(AtomicUsize::new(0)),
                }));
            let lines = boundary.render();
            assert!(lines.contains(&"details: unrecoverable render failure".to_string()));
        });
    }
}
