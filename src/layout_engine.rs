pub mod catalog;
pub mod node;
pub mod registry;
pub mod stack;

pub use node::{LayoutNode, NodeKind, Orientation};
pub use registry::{LayoutDescriptor, Registry, RegistryError};
use thiserror::Error;

/// Signature of a layout generator: window count in, tree out. `None` means
/// the layout declines the count (e.g. main+stack variants need at least 2
/// windows). A count of zero is guarded upstream and never reaches these.
pub type GenerateFn = fn(usize) -> Option<GeneratedLayout>;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout returned remap order {remap:?}, not a permutation of 0..{window_count}")]
    InvalidRemap {
        remap: Vec<usize>,
        window_count: usize,
    },
    #[error("layout '{layout}' does not support {window_count} window(s)")]
    UnsupportedWindowCount {
        layout: &'static str,
        window_count: usize,
    },
}

/// One generated arrangement: the container tree, and an optional remap from
/// depth-first placeholder slot to arrival-order window index for layouts
/// whose construction order differs from arrival order.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLayout {
    pub root: LayoutNode,
    pub remap: Option<Vec<usize>>,
}

impl GeneratedLayout {
    pub fn tree(root: LayoutNode) -> Self { Self { root, remap: None } }

    pub fn with_remap(root: LayoutNode, remap: Vec<usize>) -> Self {
        Self {
            root,
            remap: Some(remap),
        }
    }

    /// A remap must be a bijection over `[0, window_count)`. A layout that
    /// breaks this broke its contract; the caller rejects the generation
    /// rather than repairing it.
    pub fn validate_remap(&self, window_count: usize) -> Result<(), LayoutError> {
        let Some(remap) = &self.remap else {
            return Ok(());
        };
        let mut seen = vec![false; window_count];
        let valid = remap.len() == window_count
            && remap.iter().all(|&ix| {
                if ix >= window_count || seen[ix] {
                    return false;
                }
                seen[ix] = true;
                true
            });
        if valid {
            Ok(())
        } else {
            Err(LayoutError::InvalidRemap {
                remap: remap.clone(),
                window_count,
            })
        }
    }
}
