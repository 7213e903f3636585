//! Clinical tag types shared by the classifier, the localization tables
//! and the transport layer.

pub mod enums;

pub use enums::{Avpu, Bleeding, ChiefComplaint, InjuryMechanism, Severity};

/// A string that is not one of the tags a form field accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} tag: {value:?}")]
pub struct UnknownTag {
    pub field: &'static str,
    pub value: String,
}
