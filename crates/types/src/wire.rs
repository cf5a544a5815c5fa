//! Wire-shaped offer records and the decode boundary.
//!
//! The cluster manager describes resource and attribute values with a
//! `kind` discriminant sitting next to otherwise-optional payload fields.
//! That shape is accepted exactly once, here: decoding reads the single
//! payload the discriminant selects and produces the crate's [`TypedValue`]
//! sum type. A discriminant whose payload is missing is a decode error,
//! never a silently empty value; populated payloads the discriminant does
//! not select are ignored without being read.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{TypedValue, ValueRange};

/// Discriminant carried by wire values, in the cluster manager's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    Scalar,
    Ranges,
    Set,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Scalar => "SCALAR",
            ValueKind::Ranges => "RANGES",
            ValueKind::Set => "SET",
            ValueKind::Text => "TEXT",
        };
        f.write_str(name)
    }
}

/// A wire value whose discriminant selects no populated payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value tagged {kind} carries no {kind} payload")]
pub struct InvalidVariant {
    /// The discriminant that failed to select a payload.
    pub kind: ValueKind,
}

/// Rejection of a whole offer because one nested record failed to decode.
///
/// Decoding is all-or-nothing per offer: the first malformed record aborts
/// the conversion, and the error names where that record sat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfferDecodeError {
    #[error("resource {index} ({name}): {source}")]
    Resource {
        index: usize,
        name: String,
        source: InvalidVariant,
    },
    #[error("attribute {index} ({name}): {source}")]
    Attribute {
        index: usize,
        name: String,
        source: InvalidVariant,
    },
}

/// A resource as the cluster manager hands it over.
///
/// Resources never carry a text payload on the wire, so a `TEXT`
/// discriminant here always fails decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub kind: ValueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<ValueRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<Vec<String>>,
}

/// An attribute as the cluster manager hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: ValueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<ValueRange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An offer as held by the pool, nested records still in wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub framework_id: String,
    pub slave_id: String,
    pub hostname: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub executor_ids: Vec<String>,
}

impl TryFrom<Resource> for crate::Resource {
    type Error = InvalidVariant;

    fn try_from(resource: Resource) -> Result<Self, Self::Error> {
        let kind = resource.kind;
        let value = match kind {
            ValueKind::Scalar => resource.scalar.map(TypedValue::Scalar),
            ValueKind::Ranges => resource.ranges.map(TypedValue::Ranges),
            ValueKind::Set => resource.set.map(TypedValue::Set),
            ValueKind::Text => None,
        }
        .ok_or(InvalidVariant { kind })?;
        Ok(Self {
            name: resource.name,
            value,
        })
    }
}

impl TryFrom<Attribute> for crate::Attribute {
    type Error = InvalidVariant;

    fn try_from(attribute: Attribute) -> Result<Self, Self::Error> {
        let kind = attribute.kind;
        let value = match kind {
            ValueKind::Scalar => attribute.scalar.map(TypedValue::Scalar),
            ValueKind::Ranges => attribute.ranges.map(TypedValue::Ranges),
            ValueKind::Set => attribute.set.map(TypedValue::Set),
            ValueKind::Text => attribute.text.map(TypedValue::Text),
        }
        .ok_or(InvalidVariant { kind })?;
        Ok(Self {
            name: attribute.name,
            value,
        })
    }
}

impl TryFrom<Offer> for crate::Offer {
    type Error = OfferDecodeError;

    fn try_from(offer: Offer) -> Result<Self, Self::Error> {
        let mut resources = Vec::with_capacity(offer.resources.len());
        for (index, resource) in offer.resources.into_iter().enumerate() {
            let name = resource.name.clone();
            let decoded = crate::Resource::try_from(resource)
                .map_err(|source| OfferDecodeError::Resource { index, name, source })?;
            resources.push(decoded);
        }

        let mut attributes = Vec::with_capacity(offer.attributes.len());
        for (index, attribute) in offer.attributes.into_iter().enumerate() {
            let name = attribute.name.clone();
            let decoded = crate::Attribute::try_from(attribute)
                .map_err(|source| OfferDecodeError::Attribute { index, name, source })?;
            attributes.push(decoded);
        }

        Ok(Self {
            id: offer.id,
            framework_id: offer.framework_id,
            slave_id: offer.slave_id,
            hostname: offer.hostname,
            resources,
            attributes,
            executor_ids: offer.executor_ids,
        })
    }
}
