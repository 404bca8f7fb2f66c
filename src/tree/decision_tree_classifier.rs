//! Defines the fitted decision-tree classifier.
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::classifier::Classifier;
use crate::error::MiniTreesError;
use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict<S: AsRef<str>>(&self, row: &[S]) -> &str {
        self.root.descend(row)
    }
}


impl DecisionTreeClassifier {
    /// Render the current decision tree in Graphviz dot format.
    /// Branch edges are labeled with the feature value they follow
    /// and appear in lexicographic value order.
    #[inline]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph DecisionTree {");

        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .for_each(|row| {
                out.push_str(&row);
            });

        out.push('}');
        out
    }


    /// Write the current decision tree to a dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;

        Ok(())
    }


    /// Save the current decision tree as a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<(), MiniTreesError>
        where P: AsRef<Path>
    {
        let json = serde_json::to_string(self)
            .map_err(|e| MiniTreesError::Json(e.to_string()))?;
        std::fs::write(path, json)?;

        Ok(())
    }


    /// Restore a decision tree saved by
    /// [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self, MiniTreesError>
        where P: AsRef<Path>
    {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| MiniTreesError::Json(e.to_string()))
    }
}
