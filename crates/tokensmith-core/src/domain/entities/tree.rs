//! The nested namespace tree tokens are inserted into.
//!
//! A key maps either to a [`TreeNode::Leaf`] holding a token or to a
//! [`TreeNode::Namespace`] holding more keys, never both. A namespace is
//! either a token group (only leaves, written by one insertion) or a
//! structural namespace (only namespaces, created along insertion paths).
//!
//! The only mutating entry point is [`TokenTree::insert`], which checks the
//! whole path before touching anything so a failed insertion leaves the tree
//! as it was.

use std::collections::{BTreeMap, HashSet};

use crate::domain::entities::token::{NamedToken, Token};
use crate::domain::error::{DomainError, DomainResult};

pub type Namespace = BTreeMap<String, TreeNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf(Token),
    Namespace(Namespace),
}

impl TreeNode {
    pub fn namespace() -> Self {
        Self::Namespace(Namespace::new())
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Leaf(token) => Some(token),
            Self::Namespace(_) => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Self::Namespace(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// A namespace holding tokens rather than further namespaces.
    fn is_token_group(&self) -> bool {
        match self {
            Self::Namespace(children) => {
                !children.is_empty() && children.values().all(Self::is_leaf)
            }
            Self::Leaf(_) => false,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Namespace(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTree {
    root: Namespace,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Namespace {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of tokens anywhere in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.values().map(TreeNode::leaf_count).sum()
    }

    /// Look up the node at `path`. An empty path has no node.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&TreeNode> {
        let (last, parents) = path.split_last()?;
        let mut current = &self.root;
        for segment in parents {
            current = current.get(segment.as_ref())?.as_namespace()?;
        }
        current.get(last.as_ref())
    }

    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.get(path).is_some()
    }

    /// Resolve a dotted `a.b.c` path to a token, if one is stored there.
    ///
    /// Keys may contain dots themselves (`inner.card.md`), so each level
    /// tries every split of the remaining path.
    pub fn token_at(&self, dotted: &str) -> Option<&Token> {
        find_token(&self.root, dotted)
    }

    /// The leaf tokens directly under the namespace at `path`.
    pub fn stops<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<(&str, &Token)>> {
        let children = self.get(path)?.as_namespace()?;
        Some(
            children
                .iter()
                .filter_map(|(name, node)| node.as_token().map(|t| (name.as_str(), t)))
                .collect(),
        )
    }

    /// Store `stops` as a namespace named `leaf_name` under `path`.
    ///
    /// Missing namespaces along `path` are created. An existing token group
    /// at `leaf_name` is replaced wholesale.
    ///
    /// # Errors
    ///
    /// - `MalformedTreeInsertion` when a segment is empty, a segment is bound
    ///   to a token or a token group, or `leaf_name` is bound to a token or a
    ///   namespace holding other groups.
    /// - `NameCollision` when two stops share a name.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        path: &[S],
        leaf_name: &str,
        stops: Vec<NamedToken>,
    ) -> DomainResult<()> {
        let mut walked: Vec<&str> = Vec::with_capacity(path.len() + 1);

        // Read-only pass: fail before mutating anything.
        let mut current = Some(&self.root);
        for segment in path.iter().map(AsRef::as_ref) {
            walked.push(segment);
            if segment.trim().is_empty() {
                return Err(malformed(&walked, "empty segment name"));
            }
            current = match current.and_then(|ns| ns.get(segment)) {
                Some(TreeNode::Leaf(_)) => {
                    return Err(malformed(&walked, "already bound to a token"));
                }
                Some(node @ TreeNode::Namespace(_)) if node.is_token_group() => {
                    return Err(malformed(&walked, "already holds a token group"));
                }
                Some(TreeNode::Namespace(children)) => Some(children),
                None => None,
            };
        }

        walked.push(leaf_name);
        if leaf_name.trim().is_empty() {
            return Err(malformed(&walked, "empty segment name"));
        }
        match current.and_then(|ns| ns.get(leaf_name)) {
            Some(TreeNode::Leaf(_)) => {
                return Err(malformed(&walked, "already bound to a token"));
            }
            Some(node @ TreeNode::Namespace(children))
                if !children.is_empty() && !node.is_token_group() =>
            {
                return Err(malformed(&walked, "already a namespace holding other groups"));
            }
            _ => {}
        }

        let node = walked.join(".");
        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if stop.name.trim().is_empty() {
                return Err(DomainError::MalformedTreeInsertion {
                    path: node,
                    reason: "empty stop name".into(),
                });
            }
            if !seen.insert(stop.name.as_str()) {
                return Err(DomainError::NameCollision {
                    name: stop.name.clone(),
                    node,
                });
            }
        }

        let mut current = &mut self.root;
        for segment in path {
            let entry = current
                .entry(segment.as_ref().to_string())
                .or_insert_with(TreeNode::namespace);
            current = match entry {
                TreeNode::Namespace(children) => children,
                TreeNode::Leaf(_) => return Err(malformed(&walked, "already bound to a token")),
            };
        }

        let children = stops
            .into_iter()
            .map(|stop| (stop.name, TreeNode::Leaf(stop.token)))
            .collect();
        current.insert(leaf_name.to_string(), TreeNode::Namespace(children));
        Ok(())
    }
}

fn find_token<'a>(namespace: &'a Namespace, dotted: &str) -> Option<&'a Token> {
    if let Some(TreeNode::Leaf(token)) = namespace.get(dotted) {
        return Some(token);
    }
    dotted.match_indices('.').find_map(|(at, _)| {
        match namespace.get(&dotted[..at])? {
            TreeNode::Namespace(children) => find_token(children, &dotted[at + 1..]),
            TreeNode::Leaf(_) => None,
        }
    })
}

fn malformed(walked: &[&str], reason: &str) -> DomainError {
    DomainError::MalformedTreeInsertion {
        path: walked.join("."),
        reason: reason.to_string(),
    }
}
