//! The three-pass line pipeline and the file driver around it.
//! Each pass consumes one ordered line sequence and produces a new one.

use crate::timestamp::Timestamp;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Gap subtracted from the next cue's start to obtain the current cue's end.
pub const END_GAP_MS: u64 = 10;
/// Duration granted to the final cue, which has no following timestamp.
pub const FINAL_CUE_MS: u64 = 3000;

static SHORTHAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());
static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{3}\s*-->\s*\d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

/// First pass: rewrite shorthand timestamps to the full `HH:MM:SS.fff` form.
/// A line whose stripped content is exactly `M:SS` or `MM:SS` becomes
/// `00:MM:SS.000` with the minutes zero-padded; already-canonical lines and
/// everything else pass through unchanged.
pub fn normalize_timestamps(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| normalize_line(line)).collect()
}

/// Normalize a single line. Matching requires the stripped content to be the
/// whole timestamp; a line with trailing content after a valid shorthand is
/// not rewritten.
fn normalize_line(line: &str) -> String {
    let stripped = line.trim();
    if Timestamp::from_canonical(stripped).is_some() {
        return line.to_string();
    }
    if let Some(caps) = SHORTHAND.captures(stripped) {
        return format!("00:{:0>2}:{}.000\n", &caps[1], &caps[2]);
    }
    line.to_string()
}

/// Second pass: pair each canonical timestamp line with a synthesized end
/// time. The end is the next canonical timestamp in the sequence minus 10 ms
/// (floored at `00:00:00.000`), or the current timestamp plus 3 seconds when
/// no later timestamp exists. Lines between timestamps are neither consumed
/// nor altered; they keep their position in the output.
pub fn synthesize_ranges(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let start = match Timestamp::from_canonical(line.trim()) {
            Some(ts) => ts,
            None => {
                out.push(line.clone());
                continue;
            }
        };
        let next = lines[i + 1..]
            .iter()
            .find_map(|later| Timestamp::from_canonical(later.trim()));
        let end = match next {
            Some(next) => next.saturating_sub(END_GAP_MS),
            None => start.add(FINAL_CUE_MS),
        };
        out.push(format!("{start} --> {end}\n"));
    }
    out
}

/// Third pass: insert a 1-indexed block number before each range line.
/// The first block gets no preceding blank line; every later block gets
/// exactly one. This is the only pass that changes the line count, and it
/// never deletes or reorders existing lines.
pub fn number_blocks(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut block = 1u32;
    for line in lines {
        if RANGE.is_match(line) {
            if block > 1 {
                out.push("\n".to_string());
            }
            out.push(format!("{block}\n"));
            block += 1;
        }
        out.push(line.clone());
    }
    out
}

/// Run the three passes in series over an ordered line sequence.
pub fn process_lines(lines: &[String]) -> Vec<String> {
    let normalized = normalize_timestamps(lines);
    let ranged = synthesize_ranges(&normalized);
    number_blocks(&ranged)
}

/// Derive the output path by dropping the final three characters of the
/// input path and appending `srt`, so `foo.txt` becomes `foosrt`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let raw = input.to_string_lossy();
    let keep = raw.chars().count().saturating_sub(3);
    let base: String = raw.chars().take(keep).collect();
    PathBuf::from(format!("{base}srt"))
}

/// Read a transcript file, run the pipeline over its lines and write the
/// result next to the input.
/// This function should return the path of the written subtitle file.
pub fn process_file(input: &Path) -> Result<PathBuf> {
    trace!("process_file input={}", input.display());
    let content = fs::read_to_string(input)?;
    let lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();
    info!("formatting {} lines", lines.len());
    let processed = process_lines(&lines);
    let out_path = derive_output_path(input);
    fs::write(&out_path, processed.concat())?;
    debug!("wrote {} lines to {}", processed.len(), out_path.display());
    Ok(out_path)
}
