use webcheck_common::config::Config;

use crate::docs;
use crate::mprint;
use crate::terminal::print;

/// Static docs/legal view: what the downstream checks are and how the tool
/// is licensed. Pure read-only content, nothing here feeds classification.
pub fn about(cfg: &Config) -> anyhow::Result<()> {
    for line in docs::ABOUT {
        print::print_status(line);
    }
    mprint!();

    print::header("supported checks", cfg.quiet);
    let key_width = docs::DOCS
        .iter()
        .map(|doc| doc.title.len())
        .max()
        .unwrap_or(0);
    print::set_key_width(key_width);
    for doc in docs::DOCS {
        print::aligned_line(doc.title, doc.description);
    }

    mprint!();
    print::header("license", cfg.quiet);
    for line in docs::LICENSE_SUMMARY {
        print::print_status(line);
    }

    print::end_of_program();
    Ok(())
}
