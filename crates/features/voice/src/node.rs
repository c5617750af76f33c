//! An abstract UI node tree.
//!
//! The matcher does not talk to a browser; it walks this tree. Nodes carry
//! the properties that decide eligibility (interactivity, visibility) and the
//! five text sources that the scorer reads.

/// The five text sources a node exposes to the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeText {
    pub inner_text: String,
    pub text_content: String,
    pub aria_label: String,
    pub title: String,
    pub placeholder: String,
}

/// Identifies a node by its document pre-order position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One element in the abstract tree.
#[derive(Debug, Clone)]
pub struct UiNode {
    pub tag: String,
    pub role: Option<String>,
    pub has_click_handler: bool,
    /// The element carries the "clickable" marker class.
    pub clickable_marker: bool,
    pub width: f64,
    pub height: f64,
    pub detached: bool,
    pub text: NodeText,
    pub children: Vec<UiNode>,
}

impl UiNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            role: None,
            has_click_handler: false,
            clickable_marker: false,
            width: 0.0,
            height: 0.0,
            detached: false,
            text: NodeText::default(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub const fn click_handler(mut self) -> Self {
        self.has_click_handler = true;
        self
    }

    #[must_use]
    pub const fn clickable(mut self) -> Self {
        self.clickable_marker = true;
        self
    }

    #[must_use]
    pub const fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    #[must_use]
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.text.inner_text = text.into();
        self
    }

    #[must_use]
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.text.text_content = text.into();
        self
    }

    #[must_use]
    pub fn aria_label(mut self, text: impl Into<String>) -> Self {
        self.text.aria_label = text.into();
        self
    }

    #[must_use]
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.text.title = text.into();
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.text.placeholder = text.into();
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// An element the matcher will consider clicking: an inherently
    /// interactive tag, a button role, a click handler, or the marker class.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.tag.as_str(), "button" | "a" | "input")
            || self.role.as_deref() == Some("button")
            || self.has_click_handler
            || self.clickable_marker
    }

    /// Zero-sized elements are invisible regardless of ancestry.
    #[must_use]
    pub fn has_extent(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A document: the root node plus pre-order addressing.
#[derive(Debug, Clone)]
pub struct UiTree {
    roots: Vec<UiNode>,
}

impl UiTree {
    #[must_use]
    pub fn new(roots: Vec<UiNode>) -> Self {
        Self { roots }
    }

    /// Walks the tree in document pre-order.
    ///
    /// Yields each node with its [`NodeId`] and resolved visibility: a node
    /// is visible when it has positive extent and neither it nor any
    /// ancestor is detached.
    pub fn walk(&self) -> Vec<(NodeId, &UiNode, bool)> {
        let mut out = Vec::new();
        let mut next_id = 0usize;
        for root in &self.roots {
            Self::walk_node(root, false, &mut next_id, &mut out);
        }
        out
    }

    /// Returns the node at `id`, in pre-order numbering.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&UiNode> {
        self.walk().into_iter().find(|(node_id, ..)| *node_id == id).map(|(_, node, _)| node)
    }

    fn walk_node<'a>(
        node: &'a UiNode,
        ancestor_detached: bool,
        next_id: &mut usize,
        out: &mut Vec<(NodeId, &'a UiNode, bool)>,
    ) {
        let id = NodeId(*next_id);
        *next_id += 1;

        let detached = ancestor_detached || node.detached;
        let visible = !detached && node.has_extent();
        out.push((id, node, visible));

        for child in &node.children {
            Self::walk_node(child, detached, next_id, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactivity_rules() {
        assert!(UiNode::new("button").is_interactive());
        assert!(UiNode::new("a").is_interactive());
        assert!(UiNode::new("input").is_interactive());
        assert!(UiNode::new("div").role("button").is_interactive());
        assert!(UiNode::new("div").click_handler().is_interactive());
        assert!(UiNode::new("div").clickable().is_interactive());
        assert!(!UiNode::new("div").is_interactive());
        assert!(!UiNode::new("span").role("navigation").is_interactive());
    }

    #[test]
    fn detachment_propagates_to_descendants() {
        let tree = UiTree::new(vec![
            UiNode::new("div")
                .detached()
                .size(100.0, 100.0)
                .child(UiNode::new("button").size(40.0, 20.0).inner_text("hidden")),
            UiNode::new("button").size(40.0, 20.0).inner_text("shown"),
        ]);

        let visible: Vec<bool> = tree.walk().iter().map(|&(_, _, v)| v).collect();
        assert_eq!(visible, vec![false, false, true]);
    }

    #[test]
    fn zero_extent_is_invisible() {
        let tree = UiTree::new(vec![UiNode::new("button").size(0.0, 24.0)]);
        assert!(!tree.walk()[0].2);
    }

    #[test]
    fn pre_order_ids_are_stable() {
        let tree = UiTree::new(vec![
            UiNode::new("div").child(UiNode::new("button")).child(UiNode::new("a")),
            UiNode::new("span"),
        ]);

        let tags: Vec<(usize, &str)> =
            tree.walk().iter().map(|&(id, node, _)| (id.0, node.tag.as_str())).collect();
        assert_eq!(tags, vec![(0, "div"), (1, "button"), (2, "a"), (3, "span")]);
        assert_eq!(tree.get(NodeId(2)).map(|n| n.tag.as_str()), Some("a"));
    }
}
