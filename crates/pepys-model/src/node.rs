//! Node module - entities and the relations connecting them
//!
//! Entities and relations share one record shape: an identifier, a kind,
//! and attributes whose values are observed through the node's activity
//! period. The kind is a closed tagged sum; relation endpoints are plain
//! identifiers, never back-references.

use std::fmt;

use pepys_domain::TimePeriod;

use crate::active::ActiveTimedValues;

/// Stable integer identifier for a node
///
/// Identifiers are assigned by whoever owns the node collection, arena
/// style; the model layer only carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create an identifier from its raw value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is: a thing, or a verb connecting two things
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A real-world object
    Entity,

    /// A directed connection between two nodes
    Relation {
        /// The node the relation starts from
        source: NodeId,

        /// The node the relation points to
        target: NodeId,
    },
}

/// A temporally-qualified knowledge record
///
/// Attributes are read through the node's activity period: a fact about a
/// node is only observable while the node itself is active.
///
/// # Examples
///
/// ```
/// use pepys_model::{Node, NodeId};
///
/// let mut node = Node::entity(NodeId::new(1));
/// node.values_mut().set("name", "Samuel");
/// assert_eq!(node.values().values("name"), vec!["Samuel"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,

    /// Entity or relation
    pub kind: NodeKind,

    values: ActiveTimedValues,
}

impl Node {
    /// Create an entity node, active over the whole timeline
    pub fn entity(id: NodeId) -> Self {
        Self {
            id,
            kind: NodeKind::Entity,
            values: ActiveTimedValues::new(),
        }
    }

    /// Create a relation node between `source` and `target`
    pub fn relation(id: NodeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            kind: NodeKind::Relation { source, target },
            values: ActiveTimedValues::new(),
        }
    }

    /// Whether this node is a relation
    pub fn is_relation(&self) -> bool {
        matches!(self.kind, NodeKind::Relation { .. })
    }

    /// The relation endpoints, if this node is a relation
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Entity => None,
            NodeKind::Relation { source, target } => Some((source, target)),
        }
    }

    /// The attribute map, observed through the activity period
    pub fn values(&self) -> &ActiveTimedValues {
        &self.values
    }

    /// Mutable access to the attribute map
    pub fn values_mut(&mut self) -> &mut ActiveTimedValues {
        &mut self.values
    }

    /// The period over which this node is active
    pub fn active_period(&self) -> &TimePeriod {
        self.values.activity()
    }

    /// Replace the period over which this node is active
    pub fn set_active_period(&mut self, period: TimePeriod) {
        tracing::debug!(node = %self.id, "active period replaced");
        self.values.set_activity(period);
    }

    /// Extend the period over which this node is active
    pub fn add_active_period(&mut self, period: &TimePeriod) {
        self.values.add_activity(period);
    }

    /// Withdraw moments from the period over which this node is active
    pub fn remove_active_period(&mut self, period: &TimePeriod) {
        self.values.remove_activity(period);
    }
}
