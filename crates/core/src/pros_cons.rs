//! Pros/cons contracts. Entries are immutable once written.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validation;

/// Whether an entry speaks for or against a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProsConsKind {
    Pro,
    Con,
}

impl ProsConsKind {
    /// Wire and storage names, in declaration order.
    pub const NAMES: [&'static str; 2] = ["pro", "con"];

    pub fn as_str(self) -> &'static str {
        match self {
            ProsConsKind::Pro => "pro",
            ProsConsKind::Con => "con",
        }
    }
}

impl fmt::Display for ProsConsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProsConsKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pro" => Ok(ProsConsKind::Pro),
            "con" => Ok(ProsConsKind::Con),
            other => Err(CoreError::Validation(format!(
                "Invalid pros/cons type '{other}'. Must be one of: pro, con"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProsCons {
    pub id: DbId,
    pub product_id: DbId,
    #[serde(rename = "type")]
    pub kind: ProsConsKind,
    pub content: String,
    pub created_at: Timestamp,
}

/// Input for `createProsCons`.
///
/// `type` arrives as free text so an unknown value is reported as a field
/// error on `type` rather than a body decoding failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProsConsInput {
    pub product_id: DbId,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl Validate for CreateProsConsInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::one_of(&mut errors, "type", &self.kind, &ProsConsKind::NAMES);
        validation::non_empty(&mut errors, "content", &self.content);
        validation::finish(errors)
    }
}
