use super::node::{LayoutNode, Orientation};

/// A container of `count` placeholders, each taking `1/count` of the axis.
/// Returned at fraction 1.0; nest with [`LayoutNode::sized`].
pub fn uniform(count: usize, orientation: Orientation) -> LayoutNode {
    debug_assert!(count > 0);
    weighted(&vec![1.0 / count as f64; count], orientation)
}

/// A container with one placeholder per entry, sized by the entries. The
/// caller owns the sum-to-1 invariant.
pub fn weighted(fractions: &[f64], orientation: Orientation) -> LayoutNode {
    debug_assert!(!fractions.is_empty());
    let children = fractions
        .iter()
        .map(|&f| LayoutNode::placeholder(f, orientation))
        .collect();
    LayoutNode::container(1.0, orientation, children)
}
