//! Input collection.
//!
//! A request comes either from a JSON record given with `--info` or from a
//! question-and-answer session driven by [`Prompter`]. Both paths end in the
//! same [`PosterRequest`] constructors, so validation and defaults are shared.

mod prompter;
mod scenes;


pub use prompter::Prompter;
pub use scenes::{collect, collect_course, collect_event, collect_product, load_reference_image};

use crate::error::{PosterError, Result};
use crate::request::{PosterRequest, Scenario, SummaryValue};
use std::io::{BufRead, Write};
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Load a declarative JSON record for `scenario`.
pub fn load_request(path: &Path, scenario: Scenario) -> Result<PosterRequest> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        PosterError::Io(format!(
            "failed to read request file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let request = PosterRequest::from_json(scenario, &json)?;
    tracing::info!(path = %path.display(), %scenario, "loaded request record");
    Ok(request)
}

/// Print the collected request field by field.
pub fn write_summary<W: Write>(out: &mut W, request: &PosterRequest) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let io_err = |e: std::io::Error| PosterError::Io(format!("failed to write summary: {}", e));

    writeln!(out, "\n{rule}\n📝 信息确认\n{rule}").map_err(io_err)?;
    for (key, value) in request.summary_fields() {
        match value {
            SummaryValue::Text(text) => writeln!(out, "{key}: {text}").map_err(io_err)?,
            SummaryValue::Redacted(placeholder) => {
                writeln!(out, "{key}: {placeholder}").map_err(io_err)?
            }
            SummaryValue::List(items) => {
                writeln!(out, "{key}: {} 项", items.len()).map_err(io_err)?;
                for item in items {
                    writeln!(out, "  - {item}").map_err(io_err)?;
                }
            }
        }
    }
    writeln!(out, "{rule}").map_err(io_err)
}

/// Ask for a final go-ahead. Anything but `n` confirms.
pub fn confirm<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    let answer = prompter.ask("\n确认生成? (y/n, 默认y): ")?;
    if answer.eq_ignore_ascii_case("n") {
        prompter.say("已取消")?;
        return Err(PosterError::Cancelled);
    }
    Ok(())
}
