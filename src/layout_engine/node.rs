use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Tabbed,
}

impl Orientation {
    /// The `layout` value i3's append_layout expects.
    pub fn wire_name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "splith",
            Orientation::Vertical => "splitv",
            Orientation::Tabbed => "tabbed",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Tabbed => Orientation::Tabbed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Container(Vec<LayoutNode>),
    /// An unfilled slot, later swallowed by an arbitrary incoming window.
    Placeholder,
}

/// One node of a generated layout tree. Trees are immutable values built
/// fresh per generation call; nothing is shared or mutated afterwards.
///
/// `fraction` is this node's share of the parent extent, in (0, 1]. The
/// builders do not police sibling sums; that invariant belongs to the layout
/// functions composing them and is checked by the catalog tests. On a
/// placeholder the orientation is only a hint for the emitted `layout` key.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    pub fraction: f64,
    pub orientation: Orientation,
    pub kind: NodeKind,
}

impl LayoutNode {
    pub fn container(fraction: f64, orientation: Orientation, children: Vec<LayoutNode>) -> Self {
        debug_assert!(fraction > 0.0 && fraction <= 1.0);
        Self {
            fraction,
            orientation,
            kind: NodeKind::Container(children),
        }
    }

    pub fn placeholder(fraction: f64, orientation: Orientation) -> Self {
        debug_assert!(fraction > 0.0 && fraction <= 1.0);
        Self {
            fraction,
            orientation,
            kind: NodeKind::Placeholder,
        }
    }

    /// Re-sizes a fraction-1.0 subtree for nesting under a parent.
    pub fn sized(mut self, fraction: f64) -> Self {
        debug_assert!(fraction > 0.0 && fraction <= 1.0);
        self.fraction = fraction;
        self
    }

    pub fn is_placeholder(&self) -> bool { matches!(self.kind, NodeKind::Placeholder) }

    pub fn children(&self) -> &[LayoutNode] {
        match &self.kind {
            NodeKind::Container(children) => children,
            NodeKind::Placeholder => &[],
        }
    }

    /// Placeholder count in depth-first left-to-right order.
    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Placeholder => 1,
            NodeKind::Container(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Smallest absolute share of the root area taken by any leaf, i.e. the
    /// minimum over leaves of the product of fractions along the path.
    pub fn min_leaf_area(&self) -> f64 {
        fn walk(node: &LayoutNode, scale: f64) -> f64 {
            let scale = scale * node.fraction;
            match &node.kind {
                NodeKind::Placeholder => scale,
                NodeKind::Container(children) => children
                    .iter()
                    .map(|c| walk(c, scale))
                    .fold(f64::INFINITY, f64::min),
            }
        }
        walk(self, 1.0 / self.fraction)
    }

    /// Serializes into the i3 append_layout document shape.
    pub fn to_wire(&self) -> Value {
        let mut obj = json!({
            "border": "normal",
            "floating": "auto_off",
            "percent": self.fraction,
            "type": "con",
            "layout": self.orientation.wire_name(),
        });
        match &self.kind {
            NodeKind::Placeholder => {
                obj["swallows"] = json!([{ "class": "." }]);
            }
            NodeKind::Container(children) => {
                obj["nodes"] = Value::Array(children.iter().map(Self::to_wire).collect());
            }
        }
        obj
    }

    /// Human-readable tree rendering, used by `--dry-run --tree` and logs.
    pub fn draw(&self) -> String {
        let mut out = String::new();
        let _ = ascii_tree::write_tree(&mut out, &self.ascii());
        out
    }

    fn ascii(&self) -> ascii_tree::Tree {
        let desc = match &self.kind {
            NodeKind::Placeholder => format!("{:.3} swallow", self.fraction),
            NodeKind::Container(_) => {
                format!("{:.3} {}", self.fraction, self.orientation.wire_name())
            }
        };
        let children: Vec<_> = self.children().iter().map(Self::ascii).collect();
        if children.is_empty() {
            ascii_tree::Tree::Leaf(vec![desc])
        } else {
            ascii_tree::Tree::Node(desc, children)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn leaf_count_walks_depth_first() {
        let tree = LayoutNode::container(1.0, Orientation::Horizontal, vec![
            LayoutNode::placeholder(0.5, Orientation::Vertical),
            LayoutNode::container(0.5, Orientation::Vertical, vec![
                LayoutNode::placeholder(0.5, Orientation::Vertical),
                LayoutNode::placeholder(0.5, Orientation::Vertical),
            ]),
        ]);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn min_leaf_area_multiplies_along_the_path() {
        let tree = LayoutNode::container(1.0, Orientation::Horizontal, vec![
            LayoutNode::placeholder(0.5, Orientation::Vertical),
            LayoutNode::container(0.5, Orientation::Vertical, vec![
                LayoutNode::placeholder(0.25, Orientation::Vertical),
                LayoutNode::placeholder(0.75, Orientation::Vertical),
            ]),
        ]);
        assert!((tree.min_leaf_area() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn placeholder_wire_shape() {
        let wire = LayoutNode::placeholder(0.5, Orientation::Vertical).to_wire();
        assert_eq!(
            wire,
            json!({
                "border": "normal",
                "floating": "auto_off",
                "percent": 0.5,
                "type": "con",
                "layout": "splitv",
                "swallows": [{ "class": "." }],
            })
        );
    }

    #[test]
    fn container_wire_shape_nests_children() {
        let wire = LayoutNode::container(1.0, Orientation::Tabbed, vec![
            LayoutNode::placeholder(0.5, Orientation::Tabbed),
            LayoutNode::placeholder(0.5, Orientation::Tabbed),
        ])
        .to_wire();
        assert_eq!(wire["layout"], json!("tabbed"));
        assert_eq!(wire["nodes"].as_array().unwrap().len(), 2);
        assert!(wire.get("swallows").is_none());
    }

    #[test]
    fn flipped_swaps_split_axes_only() {
        assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
        assert_eq!(Orientation::Tabbed.flipped(), Orientation::Tabbed);
    }
}
