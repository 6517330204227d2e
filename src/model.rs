//! Parameter tree model
//!
//! Raw parameter definitions are mirrored into a uniform labelled tree: a
//! synthetic `Parameters` root, one child per category, sub-categories as
//! internal nodes and plain values as leaves. The model is immutable once
//! built.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, ParamResult};
use crate::text_tree::{render_lines, TreeGlyphs};

/// Label of the synthetic model root.
pub const MODEL_ROOT: &str = "Parameters";

/// Label of the synthetic root of the selection summary tree.
pub const DISPLAY_ROOT: &str = "Selected Parameters";

/// Names a top-level category may not use.
const RESERVED_NAMES: &[&str] = &[MODEL_ROOT, DISPLAY_ROOT];

/// A raw parameter definition as supplied by a definition file.
///
/// A bare string is a selectable value; a table with a `name` is a category
/// whose `children` (or `values`) are further definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterDefinition {
    Value(String),
    Category {
        name: String,
        #[serde(default, alias = "values")]
        children: Vec<ParameterDefinition>,
    },
}

impl ParameterDefinition {
    pub fn value(name: impl Into<String>) -> Self {
        Self::Value(name.into())
    }

    pub fn category(
        name: impl Into<String>,
        children: impl IntoIterator<Item = ParameterDefinition>,
    ) -> Self {
        Self::Category {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Category whose children are all plain values
    pub fn with_values<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::category(name, values.into_iter().map(Self::value))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Value(name) => name,
            Self::Category { name, .. } => name,
        }
    }
}

/// A node of the parameter tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterNode {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParameterNode>,
}

impl ParameterNode {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[ParameterNode] {
        &self.children
    }

    /// True iff the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All leaves below (or at) this node, in pre-order
    pub fn leaves(&self) -> Vec<&ParameterNode> {
        if self.is_leaf() {
            return vec![self];
        }
        self.children.iter().flat_map(|c| c.leaves()).collect()
    }
}

/// The full parameter tree, rooted at [`MODEL_ROOT`].
#[derive(Debug, Clone)]
pub struct ParameterTreeModel {
    root: ParameterNode,
    leaf_names: HashSet<String>,
}

impl ParameterTreeModel {
    /// Build the model from top-level category definitions.
    ///
    /// Fails with [`ParamError::NameConflict`] when siblings share a name or a
    /// category uses a reserved name, and with
    /// [`ParamError::InvalidDefinition`] on blank names.
    pub fn build(definitions: impl IntoIterator<Item = ParameterDefinition>) -> ParamResult<Self> {
        let mut root = ParameterNode::new(MODEL_ROOT);
        let mut seen = HashSet::new();

        for definition in definitions {
            let name = checked_name(definition.name())?;
            if RESERVED_NAMES.contains(&name) || !seen.insert(name.to_string()) {
                return Err(ParamError::NameConflict {
                    name: name.to_string(),
                    parent: MODEL_ROOT.to_string(),
                });
            }

            let category = match definition {
                // A bare value at the top is a category without values.
                ParameterDefinition::Value(name) => ParameterNode::new(name),
                ParameterDefinition::Category { name, children } => mirror(name, children)?,
            };
            root.children.push(category);
        }

        let leaf_names: HashSet<String> = root
            .children
            .iter()
            .flat_map(|c| c.children.iter().flat_map(|n| n.leaves()))
            .map(|n| n.name.clone())
            .collect();

        tracing::debug!(
            categories = root.children.len(),
            leaf_names = leaf_names.len(),
            "built parameter tree model"
        );

        Ok(Self { root, leaf_names })
    }

    pub fn root(&self) -> &ParameterNode {
        &self.root
    }

    /// Top-level category names in definition order.
    ///
    /// Every call starts a fresh iteration.
    pub fn category_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.root.children.iter().map(|c| c.name.as_str())
    }

    pub fn categories(&self) -> &[ParameterNode] {
        &self.root.children
    }

    pub fn category(&self, name: &str) -> Option<&ParameterNode> {
        self.root.children.iter().find(|c| c.name == name)
    }

    /// Names of every selectable value in the model
    pub fn leaf_names(&self) -> &HashSet<String> {
        &self.leaf_names
    }

    pub fn is_leaf_name(&self, name: &str) -> bool {
        self.leaf_names.contains(name)
    }

    /// Render the whole model as an indented tree
    pub fn render(&self, glyphs: &TreeGlyphs) -> String {
        render_lines(
            &self.root,
            |n| n.name(),
            |n| n.children().iter().collect(),
            glyphs,
        )
        .join("\n")
    }
}

impl<'a> IntoIterator for &'a ParameterTreeModel {
    type Item = &'a str;
    type IntoIter =
        std::iter::Map<std::slice::Iter<'a, ParameterNode>, fn(&'a ParameterNode) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.root
            .children
            .iter()
            .map(ParameterNode::name as fn(&'a ParameterNode) -> &'a str)
    }
}

fn mirror(name: String, children: Vec<ParameterDefinition>) -> ParamResult<ParameterNode> {
    let mut node = ParameterNode::new(name);
    let mut seen = HashSet::new();

    for child in children {
        let child_name = checked_name(child.name())?;
        if !seen.insert(child_name.to_string()) {
            return Err(ParamError::NameConflict {
                name: child_name.to_string(),
                parent: node.name.clone(),
            });
        }

        let child_node = match child {
            ParameterDefinition::Value(value) => ParameterNode::new(value),
            ParameterDefinition::Category { name, children } => mirror(name, children)?,
        };
        node.children.push(child_node);
    }

    Ok(node)
}

fn checked_name(name: &str) -> ParamResult<&str> {
    if name.trim().is_empty() {
        return Err(ParamError::InvalidDefinition {
            message: "parameter names must not be empty".to_string(),
        });
    }
    Ok(name)
}
