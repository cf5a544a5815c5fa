//! Shared offer model for the scheduler introspection endpoint.
//!
//! [`Offer`] and friends are the decoded, invariant-holding view of what
//! the scheduler currently holds: every [`TypedValue`] carries exactly one
//! payload, so downstream code never re-checks which optional field of a
//! record happens to be populated. Offers arrive from the cluster manager
//! in a presence-style shape instead; see [`wire`] for that form and for
//! the single decode boundary that produces this model.

pub mod wire;

use serde::{Deserialize, Serialize};

/// An inclusive numeric range; both `begin` and `end` are part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    /// First value in the range.
    pub begin: u64,
    /// Last value in the range.
    pub end: u64,
}

impl ValueRange {
    /// Creates the inclusive range `begin..=end`.
    pub fn new(begin: u64, end: u64) -> Self {
        Self { begin, end }
    }
}

/// The typed payload shared by resources and attributes.
///
/// Exactly one variant is populated by construction. Only the wire form in
/// [`wire`] can carry a discriminant that disagrees with its payload;
/// decoding collapses that shape into this one.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// A floating-point magnitude (e.g. CPU count).
    Scalar(f64),
    /// Inclusive numeric ranges (e.g. port ranges), in source order.
    Ranges(Vec<ValueRange>),
    /// Member strings of a discrete set, in source order.
    Set(Vec<String>),
    /// A free-form text label.
    Text(String),
}

impl TypedValue {
    /// The wire discriminant corresponding to this value.
    pub fn kind(&self) -> wire::ValueKind {
        match self {
            TypedValue::Scalar(_) => wire::ValueKind::Scalar,
            TypedValue::Ranges(_) => wire::ValueKind::Ranges,
            TypedValue::Set(_) => wire::ValueKind::Set,
            TypedValue::Text(_) => wire::ValueKind::Text,
        }
    }
}

/// A named, typed descriptive property of a machine (e.g. rack, host class).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name, unique per offer in practice but not enforced here.
    pub name: String,
    /// The attribute's typed payload.
    pub value: TypedValue,
}

impl Attribute {
    /// Creates an attribute with the given name and payload.
    pub fn new(name: impl Into<String>, value: TypedValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named, typed quantity a machine makes available (e.g. cpus, ports).
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Resource name as advertised by the machine.
    pub name: String,
    /// The resource's typed payload.
    pub value: TypedValue,
}

impl Resource {
    /// Creates a resource with the given name and payload.
    pub fn new(name: impl Into<String>, value: TypedValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One advertisement of available capacity on a single machine.
///
/// Offers are immutable snapshots owned by the offer pool; this type only
/// describes their decoded shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    /// Unique identifier of the offer itself.
    pub id: String,
    /// Identifier of the framework the offer was extended to.
    pub framework_id: String,
    /// Identifier of the machine whose capacity is being offered.
    pub slave_id: String,
    /// Hostname of the offering machine.
    pub hostname: String,
    /// Offered resource quantities, in the order the pool holds them.
    pub resources: Vec<Resource>,
    /// Descriptive attributes of the machine, in the order the pool holds them.
    pub attributes: Vec<Attribute>,
    /// Identifiers of executors already running on the machine.
    pub executor_ids: Vec<String>,
}
