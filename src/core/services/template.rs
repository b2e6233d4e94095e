//! Header block templates

use chrono::NaiveDate;

use crate::core::models::{Identity, RuleClass};

use super::header::{CHANGELOG_POINTER, DATE_FORMAT, LAST_UPDATED, MODIFIED_BY};

const RULE: &str = "============================================================";

/// Render a header block for `class` that satisfies the header checker
#[must_use]
pub fn render_template(class: RuleClass, today: NaiveDate, identity: &Identity) -> String {
    let fields = [
        RULE.to_string(),
        CHANGELOG_POINTER.to_string(),
        format!("{LAST_UPDATED} {}", today.format(DATE_FORMAT)),
        format!("{MODIFIED_BY} {identity}"),
        RULE.to_string(),
    ];

    match class {
        RuleClass::LineComment => {
            fields.iter().map(|f| format!("# {f}\n")).collect()
        },
        RuleClass::MarkupComment => {
            let mut out = String::from("<!--\n");
            for f in &fields {
                out.push_str(f);
                out.push('\n');
            }
            out.push_str("-->\n");
            out
        },
        // The identity has to end its line, which a JSON string element
        // cannot do, so the block is emitted as plain lines.
        RuleClass::StructuredData => {
            let mut out = String::from("_metadata:\n");
            for f in &fields[1..fields.len() - 1] {
                out.push_str("  ");
                out.push_str(f);
                out.push('\n');
            }
            out
        },
    }
}
