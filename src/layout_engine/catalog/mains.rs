//! Main+stack layouts: one or two windows pinned at a large fraction, the
//! rest sharing a stack. Variants whose prominent slot is not first in the
//! container list return a remap so the currently focused window (arrival
//! index 0) still lands in the main slot.

use crate::layout_engine::registry::LayoutDescriptor;
use crate::layout_engine::stack;
use crate::layout_engine::{GeneratedLayout, LayoutNode, Orientation};

pub(super) const MAIN_LEFT: LayoutDescriptor = LayoutDescriptor {
    name: "mainLeft",
    aliases: &["ml", "mv", "MonadTall"],
    description: "One large window to the left at 50%,
all others stacked to the right vertically.

    -------------
    |     |  2  |
    |     |-----|
    |  1  |  3  |
    |     |-----|
    |     |  4  |
    -------------
",
    generate: main_left,
};

pub(super) const MAIN_RIGHT: LayoutDescriptor = LayoutDescriptor {
    name: "mainRight",
    aliases: &["mr", "vm", "MonadTallFlip"],
    description: "One large window to the right at 50%,
all others stacked to the left vertically.

    -------------
    |  2  |     |
    |-----|     |
    |  3  |  1  |
    |-----|     |
    |  4  |     |
    -------------
",
    generate: main_right,
};

pub(super) const MAIN_MAIN_VSTACK: LayoutDescriptor = LayoutDescriptor {
    name: "MainMainVStack",
    aliases: &["mmv"],
    description: "Two large windows to the left, all others stacked to the
right vertically.

    -------------------
    |     |     |  3  |
    |     |     |-----|
    |  1  |  2  |  4  |
    |     |     |-----|
    |     |     |  5  |
    -------------------
",
    generate: main_main_v_stack,
};

pub(super) const MAIN_VSTACK_MAIN: LayoutDescriptor = LayoutDescriptor {
    name: "MainVStackMain",
    aliases: &["mvm"],
    description: "Two large windows at the left and right edges, a vertical
stack in the center.

    -------------------
    |     |  3  |     |
    |     |-----|     |
    |  1  |  4  |  2  |
    |     |-----|     |
    |     |  5  |     |
    -------------------
",
    generate: main_v_stack_main,
};

pub(super) const VERTICAL_TILE_TOP: LayoutDescriptor = LayoutDescriptor {
    name: "VerticalTileTop",
    aliases: &["vtt"],
    description: "Large master area (2/3) on top, stacking below.
",
    generate: vertical_tile_top,
};

pub(super) const VERTICAL_TILE_BOTTOM: LayoutDescriptor = LayoutDescriptor {
    name: "VerticalTileBottom",
    aliases: &["vtb"],
    description: "Large master area (2/3) on bottom, stacking above.
",
    generate: vertical_tile_bottom,
};

/// `[1, 2, .., N-1, 0]`: the identity rotated so the focused window fills
/// the last depth-first slot, everything else keeping its relative order.
fn rotate_active_last(windows: usize) -> Vec<usize> {
    (1..windows).chain([0]).collect()
}

fn main_left(windows: usize) -> Option<GeneratedLayout> {
    if windows < 2 {
        return None;
    }
    Some(GeneratedLayout::tree(LayoutNode::container(
        1.0,
        Orientation::Horizontal,
        vec![
            LayoutNode::placeholder(0.5, Orientation::Vertical),
            stack::uniform(windows - 1, Orientation::Vertical).sized(0.5),
        ],
    )))
}

fn main_right(windows: usize) -> Option<GeneratedLayout> {
    if windows < 2 {
        return None;
    }
    let root = LayoutNode::container(1.0, Orientation::Horizontal, vec![
        stack::uniform(windows - 1, Orientation::Vertical).sized(0.5),
        LayoutNode::placeholder(0.5, Orientation::Vertical),
    ]);
    Some(GeneratedLayout::with_remap(root, rotate_active_last(windows)))
}

fn main_main_v_stack(windows: usize) -> Option<GeneratedLayout> {
    if windows < 3 {
        return None;
    }
    let third = 1.0 / 3.0;
    Some(GeneratedLayout::tree(LayoutNode::container(
        1.0,
        Orientation::Horizontal,
        vec![
            LayoutNode::placeholder(third, Orientation::Vertical),
            LayoutNode::placeholder(third, Orientation::Vertical),
            stack::uniform(windows - 2, Orientation::Vertical).sized(third),
        ],
    )))
}

fn main_v_stack_main(windows: usize) -> Option<GeneratedLayout> {
    if windows < 3 {
        return None;
    }
    let third = 1.0 / 3.0;
    let root = LayoutNode::container(1.0, Orientation::Horizontal, vec![
        LayoutNode::placeholder(third, Orientation::Vertical),
        stack::uniform(windows - 2, Orientation::Vertical).sized(third),
        LayoutNode::placeholder(third, Orientation::Vertical),
    ]);
    // Mains sit first and last in depth-first order; windows 0 and 1 take
    // them, the rest fill the center stack in arrival order.
    let remap = [0].into_iter().chain(2..windows).chain([1]).collect();
    Some(GeneratedLayout::with_remap(root, remap))
}

fn vertical_tile_top(windows: usize) -> Option<GeneratedLayout> {
    if windows < 2 {
        return None;
    }
    Some(GeneratedLayout::tree(LayoutNode::container(
        1.0,
        Orientation::Vertical,
        vec![
            LayoutNode::placeholder(2.0 / 3.0, Orientation::Vertical),
            stack::uniform(windows - 1, Orientation::Vertical).sized(1.0 / 3.0),
        ],
    )))
}

fn vertical_tile_bottom(windows: usize) -> Option<GeneratedLayout> {
    if windows < 2 {
        return None;
    }
    let root = LayoutNode::container(1.0, Orientation::Vertical, vec![
        stack::uniform(windows - 1, Orientation::Vertical).sized(1.0 / 3.0),
        LayoutNode::placeholder(2.0 / 3.0, Orientation::Vertical),
    ]);
    Some(GeneratedLayout::with_remap(root, rotate_active_last(windows)))
}
