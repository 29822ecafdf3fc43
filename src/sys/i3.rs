//! i3 commands via `i3-msg`.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, bail};
use tracing::debug;

fn run_i3msg(args: &[String]) -> anyhow::Result<()> {
    let status = Command::new("i3-msg")
        .args(args)
        .stdout(Stdio::null())
        .status()
        .context("running i3-msg")?;
    if !status.success() {
        bail!("i3-msg {args:?} exited with {status}");
    }
    Ok(())
}

/// Hands the layout document to i3 through a temp file; `append_layout` only
/// accepts a path. The file lives until i3-msg returns.
pub fn append_layout(document: &serde_json::Value) -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new()
        .prefix("i3-instant-layout-")
        .suffix(".json")
        .tempfile()
        .context("creating layout handoff file")?;
    serde_json::to_writer_pretty(&mut file, document)?;
    file.flush()?;
    let path = file.path().display().to_string();
    debug!(%path, "appending layout");
    run_i3msg(&["append_layout".to_string(), path])
}

pub fn focus_window(id: &str) -> anyhow::Result<()> {
    run_i3msg(&[format!("[id=\"{id}\"]"), "focus".to_string()])
}
