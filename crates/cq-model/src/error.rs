use thiserror::Error;

use crate::record::SignatureField;
use crate::role::Role;

/// Field-level extraction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A person entry was partially filled without rank or last name.
    #[error("Missing Rank/Last Name for entry: {context}")]
    MissingRequiredField { context: String },

    /// A room number does not match the canonical `[A-D][1-3]NN` shape.
    #[error("Invalid room format: '{raw}'. Must be like 'A101', 'B205', etc.")]
    InvalidRoomFormat { raw: String },
}

/// A single problem found by strict extraction. Display is the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("Please select a Manor ({}).", .options.join(" or "))]
    ManorMissing { options: Vec<String> },

    #[error("Missing Rank/Last Name for entry: {context}")]
    IncompletePerson { context: String },

    #[error("Required: Please fill out **{role}**.")]
    RoleRequired { role: Role },

    #[error("Required: Please fill out at least one **{role}**.")]
    AtLeastOneRequired { role: Role },

    #[error("{context}: Missing required field(s): {}", .fields.join(", "))]
    LateFieldsMissing {
        context: String,
        fields: Vec<&'static str>,
    },

    #[error("{context}: Invalid room format: '{raw}'. Must be like 'A101', 'B205', etc.")]
    InvalidRoom { context: String, raw: String },

    #[error("Signature section requires all inputs. Missing: {}.", join_labels(.missing))]
    SignatureIncomplete { missing: Vec<SignatureField> },
}

impl Issue {
    /// Attach a row context to a field-level error.
    pub fn from_extract(error: ExtractError, context: &str) -> Self {
        match error {
            ExtractError::MissingRequiredField { context } => Issue::IncompletePerson { context },
            ExtractError::InvalidRoomFormat { raw } => Issue::InvalidRoom {
                context: context.to_string(),
                raw,
            },
        }
    }
}

fn join_labels(fields: &[SignatureField]) -> String {
    fields
        .iter()
        .map(SignatureField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Leading line of the blocking message shown when strict extraction fails.
pub const DIALOG_PREAMBLE: &str =
    "Please correct the following errors before generating the email:";

/// Every problem found in one strict extraction, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed with {} errors.", .issues.len())]
pub struct ValidationFailed {
    pub issues: Vec<Issue>,
}

impl ValidationFailed {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Human-readable messages in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// The full blocking message: preamble, then messages separated by
    /// blank lines.
    pub fn dialog_text(&self) -> String {
        format!("{DIALOG_PREAMBLE}\n\n{}", self.messages().join("\n\n"))
    }
}
