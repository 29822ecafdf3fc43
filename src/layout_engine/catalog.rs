//! The built-in layout catalog: every generator the tool ships, in
//! registration order. Each generator is a pure function of the window
//! count; the driver never calls one with zero windows.

mod grid;
mod mains;
mod nested;
mod stacks;

use super::registry::LayoutDescriptor;

pub fn builtin_descriptors() -> Vec<LayoutDescriptor> {
    vec![
        stacks::V_STACK,
        stacks::H_STACK,
        stacks::V2_STACK,
        stacks::H2_STACK,
        stacks::V3_STACK,
        stacks::H3_STACK,
        stacks::MAX,
        mains::MAIN_LEFT,
        mains::MAIN_RIGHT,
        mains::MAIN_MAIN_VSTACK,
        mains::MAIN_VSTACK_MAIN,
        grid::MATRIX,
        mains::VERTICAL_TILE_TOP,
        mains::VERTICAL_TILE_BOTTOM,
        nested::NESTED_RIGHT,
        nested::SMART_NESTED_RIGHT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout_engine::{GeneratedLayout, LayoutNode, NodeKind};

    fn assert_fractions_valid(node: &LayoutNode) {
        assert!(
            node.fraction > 0.0 && node.fraction <= 1.0,
            "fraction {} out of (0, 1]",
            node.fraction
        );
        if let NodeKind::Container(children) = &node.kind {
            assert!(!children.is_empty(), "container without children");
            let sum: f64 = children.iter().map(|c| c.fraction).sum();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "children sum to {sum}, not 1.0 (under a {:?} container)",
                node.orientation
            );
            for child in children {
                assert_fractions_valid(child);
            }
        }
    }

    fn expected_leaf_count(name: &str, windows: usize) -> usize {
        let matrix_leaves = |n: usize| {
            let dim = grid::matrix_dim(n);
            dim * dim
        };
        match name {
            "matrix" => matrix_leaves(windows),
            "SmartNestedRight" if windows > 16 => matrix_leaves(windows),
            _ => windows,
        }
    }

    /// The catalog-wide contract from which everything else follows: exact
    /// leaf counts, per-container fraction sums, bijective remaps, and
    /// deterministic output.
    #[test]
    fn every_layout_upholds_the_structural_invariants() {
        for descriptor in builtin_descriptors() {
            for windows in 1..=20 {
                let Some(generated) = (descriptor.generate)(windows) else {
                    continue;
                };
                let GeneratedLayout { root, .. } = &generated;
                assert_eq!(
                    root.leaf_count(),
                    expected_leaf_count(descriptor.name, windows),
                    "leaf count mismatch for {} at {} windows",
                    descriptor.name,
                    windows
                );
                assert_fractions_valid(root);
                generated.validate_remap(windows).unwrap_or_else(|err| {
                    panic!("{} at {} windows: {err}", descriptor.name, windows)
                });

                let again = (descriptor.generate)(windows)
                    .expect("layout declined a count it previously accepted");
                assert_eq!(generated, again, "{} is not deterministic", descriptor.name);
            }
        }
    }

    #[test]
    fn single_axis_layouts_accept_a_single_window() {
        for descriptor in builtin_descriptors() {
            let accepts_one = (descriptor.generate)(1).is_some();
            let needs_more = matches!(
                descriptor.name,
                "v2Stack"
                    | "h2Stack"
                    | "v3Stack"
                    | "h3Stack"
                    | "mainLeft"
                    | "mainRight"
                    | "MainMainVStack"
                    | "MainVStackMain"
                    | "VerticalTileTop"
                    | "VerticalTileBottom"
            );
            assert_eq!(
                accepts_one, !needs_more,
                "unexpected N=1 behavior for {}",
                descriptor.name
            );
        }
    }
}
