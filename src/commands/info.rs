//! Info command handler
//!
//! Prints the animation facts and its segment table, or the same data as
//! JSON with `--json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use lottie_scrub::markers::SegmentSelector;
use lottie_scrub::theme::Theme;
use lottie_scrub::{logging, AnimationDescription, AnimationMeta, Config, MarkerTable};

/// One row of the segment table.
#[derive(Debug, Serialize)]
struct SegmentRow {
    index: usize,
    name: String,
    start_frame: i64,
    end_frame: i64,
    frames: i64,
    /// Slider position the segment's tick sits at
    position: f64,
}

#[derive(Debug, Serialize)]
struct InfoReport {
    file: PathBuf,
    size_bytes: u64,
    animation: AnimationMeta,
    segments: Vec<SegmentRow>,
}

fn build_report(path: &Path) -> Result<InfoReport> {
    let size_bytes = fs::metadata(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .len();
    let description = AnimationDescription::parse(path)?;
    let table = MarkerTable::build(&description.markers)?;

    let segments = match SegmentSelector::new(&table) {
        Some(selector) => table
            .iter()
            .map(|segment| SegmentRow {
                index: segment.index,
                name: segment.name.clone(),
                start_frame: segment.start_frame,
                end_frame: segment.end_frame,
                frames: segment.frame_count(),
                position: selector.index_to_position(segment.index),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(InfoReport {
        file: path.to_path_buf(),
        size_bytes,
        animation: description.meta(),
        segments,
    })
}

fn render_text(report: &InfoReport, theme: &Theme, color: bool) -> String {
    let paint_accent = |s: &str| {
        if color {
            theme.accent_text(s)
        } else {
            s.to_string()
        }
    };
    let paint_dim = |s: &str| {
        if color {
            theme.secondary_text(s)
        } else {
            s.to_string()
        }
    };

    let meta = &report.animation;
    let seconds = if meta.frame_rate > 0.0 {
        meta.total_frames as f64 / meta.frame_rate
    } else {
        0.0
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        paint_accent(&report.file.display().to_string()),
        paint_dim(&format!(
            "({})",
            humansize::format_size(report.size_bytes, humansize::BINARY)
        ))
    ));
    if let Some(name) = &meta.name {
        out.push_str(&format!("  Name      {}\n", name));
    }
    out.push_str(&format!(
        "  Frames    {} @ {} fps ({:.2}s)\n",
        meta.total_frames, meta.frame_rate, seconds
    ));
    out.push_str(&format!("  Size      {}x{}\n", meta.width, meta.height));
    out.push_str(&format!("  Segments  {}\n", report.segments.len()));

    if report.segments.is_empty() {
        out.push_str(&paint_dim("  (no markers, the whole animation plays)\n"));
        return out;
    }

    out.push('\n');
    out.push_str(&paint_dim(&format!(
        "  {:>3}  {:>7}  {:>7}  {:>7}  {:>8}  {}\n",
        "#", "start", "end", "frames", "slider", "name"
    )));
    for row in &report.segments {
        out.push_str(&format!(
            "  {:>3}  {:>7}  {:>7}  {:>7}  {:>8}  {}\n",
            row.index, row.start_frame, row.end_frame, row.frames, row.position, row.name
        ));
    }
    out
}

/// Print facts about `file`.
pub fn handle(file: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    logging::init_stderr(&config);

    let report = build_report(file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let theme = Theme::by_name(&config.player.theme).unwrap_or_default();
        print!(
            "{}",
            render_text(&report, &theme, atty::is(atty::Stream::Stdout))
        );
    }
    Ok(())
}
