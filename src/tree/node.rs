//! Defines the inner representation
//! of the decision tree.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// The label a tree answers when it has nothing better to say:
/// a leaf grown from an empty training subset, or an unseen
/// feature value at a node whose children are all branches.
pub const UNKNOWN_LABEL: &str = "unknown";


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on a feature,
    /// with one child per observed value.
    Branch(BranchNode),


    /// A node that has no child and predicts a label.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a decision tree.
/// Each `BranchNode` keeps one child per feature value observed
/// in its training subset; values never seen there have no branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(crate) feature_index: usize,
    pub(crate) feature_name: String,
    pub(crate) children: BTreeMap<String, Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(crate) fn from_raw(
        feature_index: usize,
        feature_name: String,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Self { feature_index, feature_name, children, }
    }


    /// Majority vote over the labels of the immediate leaf children.
    /// Branch children are ignored on purpose; the fallback stays
    /// shallow. If every child is a branch, the vote answers
    /// [`UNKNOWN_LABEL`]. Ties resolve to the lexicographically
    /// smallest label.
    fn leaf_majority(&self) -> &str {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for child in self.children.values() {
            if let Node::Leaf(leaf) = child {
                *counts.entry(&leaf.label).or_insert(0_usize) += 1;
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (label, count) in counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((label, count));
            }
        }

        best.map(|(label, _)| label).unwrap_or(UNKNOWN_LABEL)
    }
}


/// Represents the leaf nodes of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(crate) label: String,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(crate) fn from_raw<S: ToString>(label: S) -> Self {
        Self { label: label.to_string(), }
    }
}


impl Node {
    /// Follows the decision path for `row` and returns the label.
    /// A missing branch for the row's value at the split column
    /// falls back to a majority vote over the immediate leaf children.
    ///
    /// # Panics
    /// Panics when `row` is shorter than a split column index,
    /// i.e., when the row does not match the training columns.
    pub(crate) fn descend<S: AsRef<str>>(&self, row: &[S]) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.label,
            Node::Branch(branch) => {
                let value = row[branch.feature_index].as_ref();
                match branch.children.get(value) {
                    Some(child) => child.descend(row),
                    None => branch.leaf_majority(),
                }
            },
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(branch) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat} ?\" ];\n",
                    feat = branch.feature_name,
                )];

                let mut next_id = id + 1;
                for (value, child) in branch.children.iter() {
                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                        child_id = next_id,
                    );
                    info.push(edge);

                    let (child_info, ret_id) = child.to_dot_info(next_id);
                    info.extend(child_info);
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{label}\", \
                     shape = box, \
                     ];\n",
                    label = leaf.label,
                );

                (vec![info], id + 1)
            },
        }
    }
}
