//! Single-axis stacks and the 2-way / 3-way grid stacks.
//!
//! The 2-way and 3-way variants deliberately use different remainder
//! policies: the 2-way splits `ceil(N/2)` / `N - ceil(N/2)`, while the 3-way
//! gives the whole remainder to the first group. Do not unify them; odd
//! counts would change shape.

use crate::layout_engine::registry::LayoutDescriptor;
use crate::layout_engine::stack;
use crate::layout_engine::{GeneratedLayout, LayoutNode, Orientation};

pub(super) const V_STACK: LayoutDescriptor = LayoutDescriptor {
    name: "vStack",
    aliases: &["1col", "1c"],
    description: "One column / a vertical stack.

    ---------
    |   1   |
    ---------
    |   2   |
    ---------
    |   3   |
    ---------
",
    generate: v_stack,
};

pub(super) const H_STACK: LayoutDescriptor = LayoutDescriptor {
    name: "hStack",
    aliases: &["1row", "1r"],
    description: "One row / a horizontal stack.

    -------------
    |   |   |   |
    | 1 | 2 | 3 |
    |   |   |   |
    -------------
",
    generate: h_stack,
};

pub(super) const V2_STACK: LayoutDescriptor = LayoutDescriptor {
    name: "v2Stack",
    aliases: &["2col", "2c", "2v"],
    description: "Two columns of stacks.

    -------------
    |  1  |  4  |
    -------------
    |  2  |  5  |
    -------------
    |  3  |  6  |
    -------------
",
    generate: v2_stack,
};

pub(super) const H2_STACK: LayoutDescriptor = LayoutDescriptor {
    name: "h2Stack",
    aliases: &["2row", "2r", "2h"],
    description: "Two rows of stacks.

    -------------------
    |  1  |  2  |  3  |
    -------------------
    |  4  |  5  |  6  |
    -------------------
",
    generate: h2_stack,
};

pub(super) const V3_STACK: LayoutDescriptor = LayoutDescriptor {
    name: "v3Stack",
    aliases: &["3col", "3c", "3v"],
    description: "Three columns of stacks.

    -------------------
    |  1  |  3  |  5  |
    -------------------
    |  2  |  4  |  6  |
    -------------------
",
    generate: v3_stack,
};

pub(super) const H3_STACK: LayoutDescriptor = LayoutDescriptor {
    name: "h3Stack",
    aliases: &["3row", "3r", "3h"],
    description: "Three rows of stacks.

    -------------------
    |  1  |  2  |  3  |
    -------------------
    |  4  |  5  |  6  |
    -------------------
    |  7  |  8  |  9  |
    -------------------
",
    generate: h3_stack,
};

pub(super) const MAX: LayoutDescriptor = LayoutDescriptor {
    name: "max",
    aliases: &["maxTabbed"],
    description: "One large container, in tabbed mode.

    ---------------
    |             |
    |   1,2,3,4   |
    |             |
    ---------------
",
    generate: max,
};

fn v_stack(windows: usize) -> Option<GeneratedLayout> {
    Some(GeneratedLayout::tree(stack::uniform(
        windows,
        Orientation::Vertical,
    )))
}

fn h_stack(windows: usize) -> Option<GeneratedLayout> {
    Some(GeneratedLayout::tree(stack::uniform(
        windows,
        Orientation::Horizontal,
    )))
}

fn max(windows: usize) -> Option<GeneratedLayout> {
    Some(GeneratedLayout::tree(stack::uniform(
        windows,
        Orientation::Tabbed,
    )))
}

/// First group `ceil(N/2)`, second the rest; the deficit lands on the second
/// group for odd counts.
fn two_way(windows: usize, primary: Orientation) -> Option<GeneratedLayout> {
    if windows < 2 {
        return None;
    }
    let first = windows.div_ceil(2);
    let second = windows - first;
    let secondary = primary.flipped();
    Some(GeneratedLayout::tree(LayoutNode::container(
        1.0,
        primary,
        vec![
            stack::uniform(first, secondary).sized(0.5),
            stack::uniform(second, secondary).sized(0.5),
        ],
    )))
}

/// `N div 3` per group, with the whole remainder added to the first group.
fn three_way(windows: usize, primary: Orientation) -> Option<GeneratedLayout> {
    if windows < 3 {
        return None;
    }
    let base = windows / 3;
    let secondary = primary.flipped();
    let third = 1.0 / 3.0;
    Some(GeneratedLayout::tree(LayoutNode::container(
        1.0,
        primary,
        vec![
            stack::uniform(base + windows % 3, secondary).sized(third),
            stack::uniform(base, secondary).sized(third),
            stack::uniform(base, secondary).sized(third),
        ],
    )))
}

fn v2_stack(windows: usize) -> Option<GeneratedLayout> {
    two_way(windows, Orientation::Horizontal)
}

fn h2_stack(windows: usize) -> Option<GeneratedLayout> {
    two_way(windows, Orientation::Vertical)
}

fn v3_stack(windows: usize) -> Option<GeneratedLayout> {
    three_way(windows, Orientation::Horizontal)
}

fn h3_stack(windows: usize) -> Option<GeneratedLayout> {
    three_way(windows, Orientation::Vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout_engine::NodeKind;

    fn group_sizes(root: &LayoutNode) -> Vec<usize> {
        root.children().iter().map(LayoutNode::leaf_count).collect()
    }

    #[test]
    fn v_stack_three_windows() {
        let root = v_stack(3).unwrap().root;
        assert_eq!(root.orientation, Orientation::Vertical);
        assert!(matches!(root.kind, NodeKind::Container(_)));
        assert_eq!(root.children().len(), 3);
        for child in root.children() {
            assert!(child.is_placeholder());
            assert!((child.fraction - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn two_columns_of_three_for_six_windows() {
        let root = v2_stack(6).unwrap().root;
        assert_eq!(root.orientation, Orientation::Horizontal);
        assert_eq!(group_sizes(&root), vec![3, 3]);
        for column in root.children() {
            assert_eq!(column.orientation, Orientation::Vertical);
            assert!((column.fraction - 0.5).abs() < 1e-9);
            for leaf in column.children() {
                assert!((leaf.fraction - 1.0 / 3.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn two_way_remainder_shrinks_the_second_group() {
        assert_eq!(group_sizes(&v2_stack(2).unwrap().root), vec![1, 1]);
        assert_eq!(group_sizes(&v2_stack(3).unwrap().root), vec![2, 1]);
        assert_eq!(group_sizes(&v2_stack(5).unwrap().root), vec![3, 2]);
        assert_eq!(group_sizes(&v2_stack(7).unwrap().root), vec![4, 3]);
        assert_eq!(group_sizes(&v2_stack(10).unwrap().root), vec![5, 5]);
        assert!(v2_stack(1).is_none());
        assert!(h2_stack(1).is_none());
    }

    #[test]
    fn three_way_remainder_grows_the_first_group() {
        assert_eq!(group_sizes(&v3_stack(3).unwrap().root), vec![1, 1, 1]);
        assert_eq!(group_sizes(&v3_stack(4).unwrap().root), vec![2, 1, 1]);
        assert_eq!(group_sizes(&v3_stack(5).unwrap().root), vec![3, 1, 1]);
        assert_eq!(group_sizes(&v3_stack(7).unwrap().root), vec![3, 2, 2]);
        assert_eq!(group_sizes(&v3_stack(10).unwrap().root), vec![4, 3, 3]);
        for n in 1..3 {
            assert!(v3_stack(n).is_none());
            assert!(h3_stack(n).is_none());
        }
    }

    #[test]
    fn three_columns_are_equal_width() {
        let root = v3_stack(7).unwrap().root;
        assert_eq!(root.children().len(), 3);
        for column in root.children() {
            assert!((column.fraction - 1.0 / 3.0).abs() < 1e-9);
            assert_eq!(column.orientation, Orientation::Vertical);
        }
    }

    #[test]
    fn row_variants_flip_the_axes() {
        let root = h2_stack(4).unwrap().root;
        assert_eq!(root.orientation, Orientation::Vertical);
        for row in root.children() {
            assert_eq!(row.orientation, Orientation::Horizontal);
        }
    }

    #[test]
    fn max_is_one_tabbed_container() {
        let root = max(5).unwrap().root;
        assert_eq!(root.orientation, Orientation::Tabbed);
        assert_eq!(root.children().len(), 5);
        assert!(root.children().iter().all(LayoutNode::is_placeholder));
    }
}
