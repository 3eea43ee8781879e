use colored::*;

use webcheck_common::{address, config::Config, info, success, warn};
use webcheck_core::dispatch::{self, Navigator, Route};
use webcheck_core::panels;

use crate::mprint;
use crate::terminal::{colors, format, print};

/// One-shot check: classify, then render the results view or surface the
/// inline message for unroutable input.
pub fn check(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let classification = address::classify(input);

    match dispatch::route_for(&classification) {
        Ok(route) => ResultsView::new(cfg).navigate(route),
        Err(err) => {
            // User-correctable, shown inline and never logged. A no-op, not
            // a process failure.
            print::inline_error(&err.to_string());
            Ok(())
        }
    }
}

/// Terminal adapter for the navigation port: renders every panel of the
/// route's set inside its own boundary, so one failing section leaves the
/// rest of the view standing.
pub struct ResultsView {
    cfg: Config,
}

impl ResultsView {
    pub fn new(cfg: &Config) -> Self {
        Self { cfg: *cfg }
    }
}

impl Navigator for ResultsView {
    fn navigate(&mut self, route: Route) -> anyhow::Result<()> {
        info!("dispatching {}", route.path);
        print::header("results", self.cfg.quiet);
        print::print_status(&format!(
            "{} classified as {}",
            route.state.address.color(colors::PRIMARY),
            format::kind_label(route.state.address_type)
        ));
        mprint!();

        let mut boundaries = panels::panels_for(&route);
        let total = boundaries.len();
        let mut failed = 0;

        for (idx, boundary) in boundaries.iter_mut().enumerate() {
            let name = boundary.name().to_string();
            let lines = boundary.render();

            if boundary.failed() {
                failed += 1;
                print::failure_card(&lines);
            } else {
                print::tree_head(idx, &name);
                print::as_tree_one_level(&lines);
            }

            if idx + 1 != total {
                mprint!();
            }
        }

        if failed > 0 {
            warn!("{failed} of {total} sections failed to render");
        }

        render_summary(total, &self.cfg);
        Ok(())
    }
}

fn render_summary(total: usize, cfg: &Config) {
    let sections: ColoredString = format!("{total} sections").bold().green();
    let output: String = format!("Check complete: {sections} rendered");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
