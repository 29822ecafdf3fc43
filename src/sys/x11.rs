//! X11 window queries via `xprop` and `xdotool`.
//!
//! Window ids here are X11 ids, not i3 container ids, because the swallow
//! trick works by unmapping and remapping the X windows. This means the tool
//! is X11-only; sway/wayland is out.

use std::process::Command;

use anyhow::{Context, bail};
use tracing::debug;

fn checked_stdout(cmd: &mut Command) -> anyhow::Result<String> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = cmd.output().with_context(|| format!("running {program}"))?;
    if !output.status.success() {
        bail!("{program} exited with {}", output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn current_desktop() -> anyhow::Result<String> {
    let out = checked_stdout(
        Command::new("xprop").args(["-notype", "-root", "_NET_CURRENT_DESKTOP"]),
    )?;
    let Some(eq) = out.rfind('=') else {
        bail!("unexpected xprop output: {out:?}");
    };
    Ok(out[eq + 1..].trim().to_string())
}

/// All visible windows on the current desktop, in stacking order as reported
/// by `xdotool search`.
pub fn visible_window_ids() -> anyhow::Result<Vec<String>> {
    let desktop = current_desktop()?;
    let out = checked_stdout(Command::new("xdotool").args([
        "search",
        "--all",
        "--onlyvisible",
        "--desktop",
        &desktop,
        "--class",
        "",
    ]))?;
    let ids: Vec<String> = out.split_whitespace().map(str::to_string).collect();
    debug!(%desktop, count = ids.len(), "queried visible windows");
    Ok(ids)
}

pub fn active_window() -> anyhow::Result<String> {
    Ok(checked_stdout(Command::new("xdotool").arg("getactivewindow"))?.trim().to_string())
}

/// Unmaps and remaps every window in one `xdotool` invocation each, forcing
/// i3 to swallow them into the freshly appended placeholders. Batched for
/// speed; window-by-window round trips flicker badly.
pub fn remap_windows(ids: &[String]) -> anyhow::Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let mut unmap = Command::new("xdotool");
    let mut map = Command::new("xdotool");
    for id in ids {
        unmap.arg("windowunmap").arg(id);
        map.arg("windowmap").arg(id);
    }
    checked_stdout(&mut unmap)?;
    checked_stdout(&mut map)?;
    Ok(())
}
