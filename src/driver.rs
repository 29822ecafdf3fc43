//! Glue between the pure layout algebra and the window manager: queries the
//! X11 window list, validates the generated remap, and either prints the
//! layout document or applies it through i3.

use std::iter::once;

use anyhow::bail;
use tracing::{debug, info, warn};

use crate::common::config::{UsageEntry, UsageStore, counter_file, unix_now};
use crate::layout_engine::{LayoutDescriptor, LayoutError, Registry};
use crate::sys::{i3, x11};

/// Turns the current workspace into the given layout. On `dry_run` the
/// append_layout JSON goes to stdout instead.
pub fn apply_layout(descriptor: &LayoutDescriptor, dry_run: bool) -> anyhow::Result<()> {
    let active = x11::active_window()?;
    let mut windows = x11::visible_window_ids()?;
    let window_count = windows.len();
    if window_count == 0 {
        bail!("no windows on the current desktop");
    }

    debug!(layout = descriptor.name, window_count, "generating layout");
    let Some(generated) = (descriptor.generate)(window_count) else {
        bail!(LayoutError::UnsupportedWindowCount {
            layout: descriptor.name,
            window_count,
        });
    };

    if let Some(remap) = &generated.remap {
        generated.validate_remap(window_count)?;
        windows = remap.iter().map(|&ix| windows[ix].clone()).collect();
    }

    let document = generated.root.to_wire();
    if dry_run {
        debug!("\n{}", generated.root.draw());
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    i3::append_layout(&document)?;
    x11::remap_windows(&windows)?;
    i3::focus_window(&active)?;
    info!(layout = descriptor.name, window_count, "layout applied");
    Ok(())
}

/// Bumps the usage counter for the token the user typed. Counter trouble is
/// never fatal; the layout is already applied.
pub fn record_usage(token: &str) {
    let path = counter_file();
    let mut store = UsageStore::load(&path);
    store.record(token);
    if let Err(err) = store.save(&path) {
        warn!("could not update usage counter {}: {err:#}", path.display());
    }
}

/// Every name and alias, most used first: descending usage bucket
/// (`ceil(log10(count + 1))`), then most recently used, then lexicographic
/// for a stable order among the untouched rest. Aliases render as
/// `alias (name)`.
pub fn smart_order(registry: &Registry, usage: &UsageStore, now: f64) -> Vec<String> {
    let mut entries: Vec<(i64, f64, String)> = Vec::new();
    for descriptor in registry.iter() {
        for key in once(descriptor.name).chain(descriptor.aliases.iter().copied()) {
            let UsageEntry(count, last_used) = usage.get(key).unwrap_or(UsageEntry(0, now));
            let bucket = ((count + 1) as f64).log10().ceil() as i64;
            let label = if key == descriptor.name {
                key.to_string()
            } else {
                format!("{key} ({})", descriptor.name)
            };
            entries.push((bucket, last_used, label));
        }
    }
    entries.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.total_cmp(&a.1)).then(a.2.cmp(&b.2)));
    entries.into_iter().map(|(_, _, label)| label).collect()
}

pub fn list_layouts() -> Vec<String> {
    smart_order(
        Registry::builtin(),
        &UsageStore::load(&counter_file()),
        unix_now(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, u64, f64)]) -> UsageStore {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.json");
        let map: crate::common::collections::HashMap<&str, (u64, f64)> =
            entries.iter().map(|&(k, c, t)| (k, (c, t))).collect();
        std::fs::write(&path, serde_json::to_vec(&map).unwrap()).unwrap();
        UsageStore::load(&path)
    }

    #[test]
    fn heavily_used_layouts_sort_first() {
        let usage = store_with(&[("matrix", 100, 2_000.0), ("vStack", 2, 1_000.0)]);
        let order = smart_order(Registry::builtin(), &usage, 10_000.0);
        assert_eq!(order[0], "matrix");
        assert_eq!(order[1], "vStack");
    }

    #[test]
    fn recency_breaks_ties_within_a_bucket() {
        let usage = store_with(&[("ml", 3, 500.0), ("mr", 3, 900.0)]);
        let order = smart_order(Registry::builtin(), &usage, 10_000.0);
        assert_eq!(order[0], "mr (mainRight)");
        assert_eq!(order[1], "ml (mainLeft)");
    }

    #[test]
    fn lists_every_name_and_alias_exactly_once() {
        let registry = Registry::builtin();
        let order = smart_order(registry, &UsageStore::default(), 0.0);
        let expected: usize = registry.iter().map(|d| 1 + d.aliases.len()).sum();
        assert_eq!(order.len(), expected);
        assert!(order.contains(&"snr (SmartNestedRight)".to_string()));
        assert!(order.contains(&"matrix".to_string()));
    }

    #[test]
    fn untouched_layouts_keep_a_stable_lexicographic_order() {
        let order = smart_order(Registry::builtin(), &UsageStore::default(), 42.0);
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
