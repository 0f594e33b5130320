//! Two-state line filter over a changelog stream.
//!
//! Scans forward for the target heading, then collects every line until the
//! next version heading or end of input. The input is consumed lazily and
//! the scan breaks at the stop condition, so memory stays bounded by the
//! matched section rather than the whole document.

use crate::heading;
use std::io;

/// Extract the section body for `version` from a stream of lines.
///
/// Returns the lines strictly between the `## [<version>]` heading and the
/// next `## [v...]` heading (or end of input), right-trimmed per line, with
/// trailing blank lines removed from the block. Interior blank lines are
/// kept. An absent version yields an empty block — callers that require
/// presence must check for empty output themselves.
///
/// Matching is literal prefix comparison on the right-trimmed line, so a
/// version that is itself a prefix of another bracketed token (`1.2` vs
/// `1.20`) is a known hazard left to the caller.
pub fn section<I>(lines: I, version: &str) -> io::Result<String>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let target = heading::target_marker(version);
    let mut collecting = false;
    let mut collected: Vec<String> = Vec::new();

    for line in lines {
        let line = line?;
        let line = line.trim_end();
        if !collecting && line.starts_with(&target) {
            collecting = true;
            continue;
        }
        if collecting {
            if heading::is_version_heading(line) {
                break;
            }
            collected.push(line.to_string());
        }
    }

    Ok(collected.join("\n").trim_end().to_string())
}
