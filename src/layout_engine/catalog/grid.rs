//! The n-by-n matrix layout. Over-provisioning is intentional: with fewer
//! than n*n windows the spare placeholders simply stay unmatched.

use crate::layout_engine::registry::LayoutDescriptor;
use crate::layout_engine::stack;
use crate::layout_engine::{GeneratedLayout, LayoutNode, Orientation};

pub(super) const MATRIX: LayoutDescriptor = LayoutDescriptor {
    name: "matrix",
    aliases: &[],
    description: "Place windows in an n * n matrix, n = ceil(sqrt(N)).

The matrix keeps its spare swallow markers if you have
fewer than n * n windows.
",
    generate: matrix,
};

/// `ceil(sqrt(windows))`, corrected for float rounding near perfect squares.
pub(crate) fn matrix_dim(windows: usize) -> usize {
    let mut dim = (windows as f64).sqrt().ceil() as usize;
    while dim * dim < windows {
        dim += 1;
    }
    while dim > 1 && (dim - 1) * (dim - 1) >= windows {
        dim -= 1;
    }
    dim
}

pub(crate) fn matrix(windows: usize) -> Option<GeneratedLayout> {
    let dim = matrix_dim(windows);
    let rows = (0..dim)
        .map(|_| stack::uniform(dim, Orientation::Horizontal).sized(1.0 / dim as f64))
        .collect();
    Some(GeneratedLayout::tree(LayoutNode::container(
        1.0,
        Orientation::Vertical,
        rows,
    )))
}
