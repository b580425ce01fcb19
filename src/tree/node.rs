//! B-tree node storage and shape mechanics
//!
//! Nodes are plain owned data: an ordered value sequence plus, for
//! internal nodes, a parallel child sequence one longer than the values.
//! The root carries a marker flag so the rebalancer can short-circuit
//! without consulting a parent pointer (there are none).
//!
//! Split shapes: a full leaf in its parent's last child slot splits
//! left-heavy and in the first slot right-heavy, keeping append- and
//! prepend-dominated insertion sequences cheap; every other split is
//! balanced at the midpoint.

/// One B-tree node
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct BTreeNode<T> {
    pub(crate) values: Vec<T>,
    /// Empty for leaves; `values.len() + 1` entries otherwise
    pub(crate) children: Vec<BTreeNode<T>>,
    /// Marker identifying the root node
    pub(crate) root: bool,
}

impl<T> BTreeNode<T> {
    pub(crate) fn new_root() -> Self {
        Self {
            values: Vec::new(),
            children: Vec::new(),
            root: true,
        }
    }

    fn detached(values: Vec<T>, children: Vec<BTreeNode<T>>) -> Self {
        Self {
            values,
            children,
            root: false,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Slot count governed by the min/max occupancy bounds: values for a
    /// leaf, children for an internal node
    #[inline]
    pub(crate) fn occupancy(&self) -> usize {
        if self.is_leaf() {
            self.values.len()
        } else {
            self.children.len()
        }
    }

    #[inline]
    pub(crate) fn is_full(&self, max: usize) -> bool {
        self.occupancy() >= max
    }
}

/// Splits the full child at `idx`, splicing the separator and the new
/// right node into the parent at the same position
pub(crate) fn split_child<T>(parent: &mut BTreeNode<T>, idx: usize) {
    if idx >= parent.children.len() {
        return;
    }
    let last = parent.children.len() - 1;
    let child = &mut parent.children[idx];
    let split = if child.is_leaf() && idx == last {
        split_left_heavy(child)
    } else if child.is_leaf() && idx == 0 {
        split_right_heavy(child)
    } else {
        split_balanced(child)
    };
    let Some((mid, right)) = split else { return };
    parent.values.insert(idx, mid);
    parent.children.insert(idx + 1, right);
}

/// Splits a full root in place: the contents move into two children and
/// the single separator stays behind, preserving the root marker
pub(crate) fn split_root<T>(root: &mut BTreeNode<T>) {
    if root.values.is_empty() {
        return;
    }
    let mid_idx = root.values.len() / 2;
    let right_values = root.values.split_off(mid_idx + 1);
    let Some(mid) = root.values.pop() else { return };
    let left_values = std::mem::take(&mut root.values);
    let (left_children, right_children) = if root.is_leaf() {
        (Vec::new(), Vec::new())
    } else {
        let right_children = root.children.split_off(mid_idx + 1);
        (std::mem::take(&mut root.children), right_children)
    };
    root.values.push(mid);
    root.children.push(BTreeNode::detached(left_values, left_children));
    root.children.push(BTreeNode::detached(right_values, right_children));
}

/// Left-heavy leaf split: all but the last value stay, the last value
/// becomes a one-element right node
fn split_left_heavy<T>(node: &mut BTreeNode<T>) -> Option<(T, BTreeNode<T>)> {
    let right_value = node.values.pop()?;
    let mid = node.values.pop()?;
    Some((mid, BTreeNode::detached(vec![right_value], Vec::new())))
}

/// Right-heavy leaf split: mirror of the left-heavy shape
fn split_right_heavy<T>(node: &mut BTreeNode<T>) -> Option<(T, BTreeNode<T>)> {
    if node.values.len() < 3 {
        return None;
    }
    let right_values = node.values.split_off(2);
    let mid = node.values.pop()?;
    Some((mid, BTreeNode::detached(right_values, Vec::new())))
}

/// Balanced split at the midpoint; children (if any) split at midpoint+1
fn split_balanced<T>(node: &mut BTreeNode<T>) -> Option<(T, BTreeNode<T>)> {
    let mid_idx = node.values.len() / 2;
    let right_values = node.values.split_off(mid_idx + 1);
    let mid = node.values.pop()?;
    let right_children = if node.is_leaf() {
        Vec::new()
    } else {
        node.children.split_off(mid_idx + 1)
    };
    Some((mid, BTreeNode::detached(right_values, right_children)))
}

/// Restores the minimum occupancy of the child at `idx` after a removal,
/// by rotation from a sibling with slack or by merging
pub(crate) fn rebalance_child<T>(parent: &mut BTreeNode<T>, idx: usize, min: usize) {
    if parent.children[idx].occupancy() >= min {
        return;
    }
    if idx + 1 < parent.children.len() && parent.children[idx + 1].occupancy() > min {
        rotate_from_right(parent, idx);
        return;
    }
    if idx > 0 && parent.children[idx - 1].occupancy() > min {
        rotate_from_left(parent, idx);
        return;
    }
    merge_with_sibling(parent, idx);
    if parent.root && parent.values.is_empty() {
        promote_single_child(parent);
    }
}

/// Shifts the right sibling's first value up to the parent separator and
/// the displaced separator down to the current node's right end
fn rotate_from_right<T>(parent: &mut BTreeNode<T>, idx: usize) {
    let (head, tail) = parent.children.split_at_mut(idx + 1);
    let current = &mut head[idx];
    let sibling = &mut tail[0];
    if sibling.values.is_empty() {
        return;
    }
    let replacement = sibling.values.remove(0);
    let separator = std::mem::replace(&mut parent.values[idx], replacement);
    current.values.push(separator);
    if !current.is_leaf() {
        current.children.push(sibling.children.remove(0));
    }
}

/// Mirror of [`rotate_from_right`] on the left end
fn rotate_from_left<T>(parent: &mut BTreeNode<T>, idx: usize) {
    let (head, tail) = parent.children.split_at_mut(idx);
    let sibling = &mut head[idx - 1];
    let current = &mut tail[0];
    let Some(replacement) = sibling.values.pop() else {
        return;
    };
    let separator = std::mem::replace(&mut parent.values[idx - 1], replacement);
    current.values.insert(0, separator);
    if !current.is_leaf() {
        let Some(moved) = sibling.children.pop() else {
            return;
        };
        current.children.insert(0, moved);
    }
}

/// Merges the child at `idx` with a sibling (left preferred), splicing
/// the separator between them out of the parent
fn merge_with_sibling<T>(parent: &mut BTreeNode<T>, idx: usize) {
    if parent.values.is_empty() {
        return;
    }
    if idx > 0 {
        let separator = parent.values.remove(idx - 1);
        let mut current = parent.children.remove(idx);
        let target = &mut parent.children[idx - 1];
        target.values.push(separator);
        target.values.append(&mut current.values);
        target.children.append(&mut current.children);
    } else {
        let separator = parent.values.remove(0);
        let mut sibling = parent.children.remove(1);
        let target = &mut parent.children[0];
        target.values.push(separator);
        target.values.append(&mut sibling.values);
        target.children.append(&mut sibling.children);
    }
}

/// Copies the surviving single child's contents into the root, keeping
/// the root marker
fn promote_single_child<T>(root: &mut BTreeNode<T>) {
    if root.children.len() != 1 {
        return;
    }
    let Some(only) = root.children.pop() else {
        return;
    };
    root.values = only.values;
    root.children = only.children;
}

/// Extracts the in-order last value of the subtree, rebalancing interior
/// nodes on the way back up
pub(crate) fn take_rightmost<T>(node: &mut BTreeNode<T>, min: usize) -> Option<T> {
    if node.is_leaf() {
        return node.values.pop();
    }
    let last = node.children.len() - 1;
    let taken = take_rightmost(&mut node.children[last], min)?;
    rebalance_child(node, last, min);
    Some(taken)
}

/// Mirror of [`take_rightmost`]: extracts the in-order first value
pub(crate) fn take_leftmost<T>(node: &mut BTreeNode<T>, min: usize) -> Option<T> {
    if node.is_leaf() {
        if node.values.is_empty() {
            return None;
        }
        return Some(node.values.remove(0));
    }
    let taken = take_leftmost(&mut node.children[0], min)?;
    rebalance_child(node, 0, min);
    Some(taken)
}
