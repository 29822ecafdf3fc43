//! The nested-halving layouts. `NestedRight` halves the remaining area for
//! every window with no lower bound; `SmartNestedRight` composes fixed
//! fragments so no window drops below 1/16 of the workspace, and hands
//! anything above 16 windows to the matrix layout.

use super::grid;
use crate::layout_engine::registry::LayoutDescriptor;
use crate::layout_engine::stack;
use crate::layout_engine::{GeneratedLayout, LayoutNode, Orientation};

pub(super) const NESTED_RIGHT: LayoutDescriptor = LayoutDescriptor {
    name: "NestedRight",
    aliases: &["nr"],
    description: "Nested layout, starting with a full left half.

    -------------------------
    |           |           |
    |           |     2     |
    |           |           |
    |     1     |-----------|
    |           |     |  4  |
    |           |  3  |-----|
    |           |     |5 | 6|
    -------------------------
",
    generate: nested_right,
};

pub(super) const SMART_NESTED_RIGHT: LayoutDescriptor = LayoutDescriptor {
    name: "SmartNestedRight",
    aliases: &["snr"],
    description: "Nested layout, starting with a full left half,
but never going below 1/16th of the workspace.

    7 windows                15 windows
    -------------------      -------------------------
    |        |   |    |      |     |  2  |  4  |  6  |
    |        | 2 | 3  |      |  1  |-----|-----|-----|
    |        |   |    |      |     |  3  |  5  |  7  |
    |    1   |--------|      |-----------|-----------|
    |        | 4 | 5  |      |  8  |  A  |  C  |  E  |
    |        |---|----|      |-----|-----|-----|-----|
    |        | 6 | 7  |      |  9  |  B  |  D  |  F  |
    -------------------      -------------------------

Falls back to the matrix layout above 16 windows.
",
    generate: smart_nested_right,
};

fn nest(windows: usize, orientation: Orientation) -> LayoutNode {
    if windows == 1 {
        return LayoutNode::placeholder(1.0, orientation);
    }
    LayoutNode::container(1.0, orientation, vec![
        LayoutNode::placeholder(0.5, orientation),
        nest(windows - 1, orientation.flipped()).sized(0.5),
    ])
}

fn nested_right(windows: usize) -> Option<GeneratedLayout> {
    Some(GeneratedLayout::tree(nest(
        windows,
        Orientation::Horizontal,
    )))
}

/// The four reusable fragments of the smart table, each holding 1..=4
/// windows with every leaf at 1/4 of the fragment or better.
fn fragment(windows: usize) -> LayoutNode {
    match windows {
        1 => LayoutNode::placeholder(1.0, Orientation::Horizontal),
        2 => stack::uniform(2, Orientation::Horizontal),
        // one 50% main beside a vertical pair
        3 => LayoutNode::container(1.0, Orientation::Horizontal, vec![
            LayoutNode::placeholder(0.5, Orientation::Vertical),
            stack::uniform(2, Orientation::Vertical).sized(0.5),
        ]),
        // two vertical pairs side by side
        4 => LayoutNode::container(1.0, Orientation::Horizontal, vec![
            stack::uniform(2, Orientation::Vertical).sized(0.5),
            stack::uniform(2, Orientation::Vertical).sized(0.5),
        ]),
        _ => unreachable!("fragments hold at most 4 windows"),
    }
}

fn halves(orientation: Orientation, first: LayoutNode, second: LayoutNode) -> LayoutNode {
    LayoutNode::container(1.0, orientation, vec![first.sized(0.5), second.sized(0.5)])
}

/// A half of the 16-window grid: 2..=8 windows composed of two fragments
/// stacked vertically, keeping the first window as large as the count
/// allows (singles first, quads last).
fn half_of_sixteen(windows: usize) -> LayoutNode {
    let (top, bottom) = match windows {
        2..=5 => (1, windows - 1),
        6..=8 => (windows - 4, 4),
        _ => unreachable!("a half holds 2..=8 windows"),
    };
    halves(Orientation::Vertical, fragment(top), fragment(bottom))
}

fn smart_nested_right(windows: usize) -> Option<GeneratedLayout> {
    let root = match windows {
        1..=4 => fragment(windows),
        // full left half for window 1, the rest in the right half
        5..=9 => halves(
            Orientation::Horizontal,
            fragment(1),
            half_of_sixteen(windows - 1),
        ),
        10..=16 => halves(
            Orientation::Horizontal,
            half_of_sixteen(windows - 8),
            half_of_sixteen(8),
        ),
        _ => return grid::matrix(windows),
    };
    Some(GeneratedLayout::tree(root))
}
