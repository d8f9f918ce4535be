//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types
//! that form the vocabulary of the Assessly domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{OrganizationId, QuestionId, TakerId, TeamId, TestId};
pub use timestamp::Timestamp;
