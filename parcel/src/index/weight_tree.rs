use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::record::Parcel;

/// Index of a node inside a tree's arena.
pub(crate) type NodeId = usize;

// Traversal stacks stay on the stack frame until a tree gets this deep.
type NodeStack<T> = SmallVec<[T; 32]>;

#[derive(Debug, Clone)]
struct Node {
    parcel: Parcel,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn new(parcel: Parcel) -> Self {
        Node {
            parcel,
            left: None,
            right: None,
        }
    }
}

/// Result of offering a parcel to a [`WeightTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node now holds the parcel.
    Inserted,
    /// A parcel with the same weight already lives in this tree; the new one
    /// was discarded and the tree is unchanged.
    DuplicateWeight,
}

/// An unbalanced binary search tree of parcels keyed by weight.
///
/// Nodes live in an arena owned by the tree and refer to their children by
/// arena index, so every node has exactly one owner and no back-references.
/// For any node, all weights in its left subtree are smaller and all weights in
/// its right subtree are larger. Nothing rebalances the tree: insertion order
/// decides its shape, and sorted input degrades it to a list.
///
/// All operations are iterative, so deep trees cannot overflow the call stack.
#[derive(Debug, Clone, Default)]
pub struct WeightTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl WeightTree {
    pub fn new() -> Self {
        WeightTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of parcels held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `parcel`, taking ownership of it.
    ///
    /// Descends left on a lighter weight and right on a heavier one. When a
    /// node with the same weight is met the new parcel is dropped silently,
    /// whatever its destination, and [`InsertOutcome::DuplicateWeight`] is
    /// returned.
    pub fn insert(&mut self, parcel: Parcel) -> InsertOutcome {
        let new_id = self.nodes.len();
        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.nodes.push(Node::new(parcel));
                self.root = Some(new_id);
                return InsertOutcome::Inserted;
            }
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = match parcel.weight().cmp(&node.parcel.weight()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return InsertOutcome::DuplicateWeight,
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(new_id);
                    break;
                }
            }
        }

        self.nodes.push(Node::new(parcel));
        InsertOutcome::Inserted
    }

    /// Looks up the parcel stored under `weight`.
    pub fn find(&self, weight: u32) -> Option<&Parcel> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match weight.cmp(&node.parcel.weight()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.parcel),
            };
        }
        None
    }

    /// Walks the tree left, node, right: parcels come out by ascending weight.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder {
            tree: self,
            stack: NodeStack::new(),
            next: self.root,
        }
    }

    /// Number of nodes on the longest root-to-leaf path; zero when empty.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: NodeStack<(NodeId, usize)> =
            self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|l| (l, level + 1)));
            stack.extend(node.right.map(|r| (r, level + 1)));
        }
        deepest
    }

    /// Tears the tree down, returning how many nodes were released.
    ///
    /// Safe on an empty tree. The tree is empty and reusable afterwards.
    pub fn release(&mut self) -> usize {
        self.release_with(|_| {})
    }

    /// Tears the tree down in post-order (left, right, node), handing each
    /// parcel to `on_release` just before its destination string is freed.
    pub fn release_with(&mut self, mut on_release: impl FnMut(&Parcel)) -> usize {
        let mut released = 0;
        // (node, children already scheduled)
        let mut stack: NodeStack<(NodeId, bool)> =
            self.root.map(|id| (id, false)).into_iter().collect();

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                let parcel = &mut self.nodes[id].parcel;
                on_release(&*parcel);
                parcel.release_destination();
                released += 1;
                continue;
            }
            stack.push((id, true));
            let node = &self.nodes[id];
            stack.extend(node.right.map(|r| (r, false)));
            stack.extend(node.left.map(|l| (l, false)));
        }

        self.nodes.clear();
        self.root = None;
        released
    }
}

/// In-order iterator over a [`WeightTree`].
pub struct InOrder<'a> {
    tree: &'a WeightTree,
    stack: NodeStack<NodeId>,
    next: Option<NodeId>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Parcel;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(id) = self.next {
            self.stack.push(id);
            self.next = tree.nodes[id].left;
        }
        let id = self.stack.pop()?;
        let node = &tree.nodes[id];
        self.next = node.right;
        Some(&node.parcel)
    }
}
