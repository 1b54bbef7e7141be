//! Pre-order element index.
//!
//! A flat snapshot of the element nodes under a root, built iteratively so
//! that arbitrarily deep trees never grow the call stack. Every entry knows
//! its parent index; a parent always precedes its children, so walking the
//! index backwards visits every subtree before its root.

use dom_query::NodeRef;

use crate::dom;

/// One element of the index.
#[derive(Clone)]
pub struct IndexedElement<'a> {
    /// Handle into the indexed document.
    pub node: NodeRef<'a>,
    /// Index of the parent element, `None` for the root.
    pub parent: Option<usize>,
    /// Indices of the element children, in document order.
    pub children: Vec<usize>,
    /// Distance from the root.
    pub depth: usize,
    /// Lowercase tag name.
    pub tag: String,
}

/// Pre-order list of the elements of a subtree.
#[derive(Clone, Default)]
pub struct ElementIndex<'a> {
    elements: Vec<IndexedElement<'a>>,
}

impl<'a> ElementIndex<'a> {
    /// Index `root` and every element below it.
    #[must_use]
    pub fn build(root: NodeRef<'a>) -> Self {
        let mut elements: Vec<IndexedElement<'a>> = Vec::new();
        let mut stack: Vec<(NodeRef<'a>, Option<usize>, usize)> = vec![(root, None, 0)];

        while let Some((node, parent, depth)) = stack.pop() {
            let idx = elements.len();
            elements.push(IndexedElement {
                node,
                parent,
                children: Vec::new(),
                depth,
                tag: dom::node_tag(&node),
            });
            if let Some(p) = parent {
                elements[p].children.push(idx);
            }
            for child in dom::element_children(&node).into_iter().rev() {
                stack.push((child, Some(idx), depth + 1));
            }
        }

        Self { elements }
    }

    /// Number of indexed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&IndexedElement<'a>> {
        self.elements.get(idx)
    }

    /// Tag of the element at `idx`, empty when out of range.
    #[must_use]
    pub fn tag(&self, idx: usize) -> &str {
        self.elements.get(idx).map_or("", |e| e.tag.as_str())
    }

    /// Parent index of the element at `idx`.
    #[must_use]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.elements.get(idx).and_then(|e| e.parent)
    }

    /// Element children of the element at `idx`.
    #[must_use]
    pub fn children(&self, idx: usize) -> &[usize] {
        self.elements
            .get(idx)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    /// Iterate over all entries in document order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (usize, &IndexedElement<'a>)> + ExactSizeIterator {
        self.elements.iter().enumerate()
    }

    /// Ancestors of `idx`, nearest first, at most `limit` of them.
    #[must_use]
    pub fn ancestors(&self, idx: usize, limit: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut current = self.parent(idx);
        while let Some(p) = current {
            if out.len() >= limit {
                break;
            }
            out.push(p);
            current = self.parent(p);
        }
        out
    }

    /// Whether `ancestor` is a proper ancestor of `idx`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: usize, idx: usize) -> bool {
        let mut current = self.parent(idx);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            if p < ancestor {
                return false;
            }
            current = self.parent(p);
        }
        false
    }
}
