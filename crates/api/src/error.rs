// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stagehand::CoreError;
use stagehand_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A command in a replayed session could not be applied.
    #[error("Command {index} ({action}) rejected: {reason}")]
    CommandRejected {
        /// Zero-based position of the command in the session.
        index: usize,
        /// The command's action name.
        action: String,
        /// The underlying failure.
        #[source]
        reason: Box<ApiError>,
    },
    /// A JSON document could not be read.
    #[error("Malformed document: {message}")]
    MalformedDocument {
        /// The parser's description of the problem.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownRole(role) => ApiError::InvalidInput {
            field: String::from("roleName"),
            message: format!("Unknown role: '{role}'"),
        },
        DomainError::StaffNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Staff member"),
            message: format!("Staff member '{}' is not in the roster", id.value()),
        },
        DomainError::PackageNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Package"),
            message: format!("Package '{}' does not exist", id.value()),
        },
        DomainError::DuplicateStaffId(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_staff_id"),
            message: format!("Staff id '{}' appears more than once", id.value()),
        },
        DomainError::DuplicateEquipmentId(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_equipment_id"),
            message: format!("Equipment id '{}' appears more than once", id.value()),
        },
        DomainError::DuplicatePackageId(id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_package_id"),
            message: format!("Package id '{}' appears more than once", id.value()),
        },
        DomainError::InvalidStaffProfile { staff_id, reason } => ApiError::InvalidInput {
            field: String::from("staff"),
            message: format!("Staff profile '{}': {reason}", staff_id.value()),
        },
        err @ (DomainError::EmptyPackageItem { .. }
        | DomainError::ZeroQuantityPackageItem { .. }
        | DomainError::DuplicatePackageItem { .. }
        | DomainError::UnknownEquipment { .. }) => ApiError::InvalidInput {
            field: String::from("items"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedDocument {
            message: err.to_string(),
        }
    }
}
