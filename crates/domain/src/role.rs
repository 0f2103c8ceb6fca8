// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role vocabulary.
//!
//! Roles arrive from forms and imported rosters as free-form strings.
//! Every string is resolved through a single alias table so that a role is
//! either a known vocabulary entry or a rejected input, never a silent
//! mismatch between two spellings of the same role.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A staffing role that a requirement can demand and a staff member can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Front-of-house host.
    Host,
    /// Master of ceremonies.
    Emcee,
    /// Audio mixing and PA.
    SoundEngineer,
    /// Lighting rig operation.
    LightingTechnician,
    /// Runs the stage and cues.
    StageManager,
    Photographer,
    Videographer,
    Security,
    Usher,
    /// Event coordinator on site.
    Coordinator,
}

/// Alias table mapping normalized (lowercase, single-spaced) spellings to roles.
///
/// Canonical labels must appear here too.
const ROLE_ALIASES: &[(&str, Role)] = &[
    ("host", Role::Host),
    ("hostess", Role::Host),
    ("emcee", Role::Emcee),
    ("mc", Role::Emcee),
    ("master of ceremonies", Role::Emcee),
    ("sound engineer", Role::SoundEngineer),
    ("audio engineer", Role::SoundEngineer),
    ("sound", Role::SoundEngineer),
    ("lighting technician", Role::LightingTechnician),
    ("lighting tech", Role::LightingTechnician),
    ("lighting", Role::LightingTechnician),
    ("stage manager", Role::StageManager),
    ("photographer", Role::Photographer),
    ("photo", Role::Photographer),
    ("videographer", Role::Videographer),
    ("video", Role::Videographer),
    ("camera operator", Role::Videographer),
    ("security", Role::Security),
    ("guard", Role::Security),
    ("usher", Role::Usher),
    ("coordinator", Role::Coordinator),
    ("event coordinator", Role::Coordinator),
];

impl Role {
    /// Every role in the vocabulary, in display order.
    pub const ALL: [Self; 10] = [
        Self::Host,
        Self::Emcee,
        Self::SoundEngineer,
        Self::LightingTechnician,
        Self::StageManager,
        Self::Photographer,
        Self::Videographer,
        Self::Security,
        Self::Usher,
        Self::Coordinator,
    ];

    /// Returns the display label for this role.
    ///
    /// The label is also the persisted `roleName`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Host => "Host",
            Self::Emcee => "Emcee",
            Self::SoundEngineer => "Sound Engineer",
            Self::LightingTechnician => "Lighting Technician",
            Self::StageManager => "Stage Manager",
            Self::Photographer => "Photographer",
            Self::Videographer => "Videographer",
            Self::Security => "Security",
            Self::Usher => "Usher",
            Self::Coordinator => "Coordinator",
        }
    }

    /// Resolves a free-form role string through the alias table.
    ///
    /// Matching ignores case, surrounding whitespace, and repeated inner whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRole` if no alias matches.
    pub fn parse_str(s: &str) -> Result<Self, DomainError> {
        let normalized: String = s
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();

        ROLE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, role)| *role)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }

    /// Case-insensitive substring match of `needle` against the role label.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn label_contains(self, needle: &str) -> bool {
        self.label().to_lowercase().contains(needle)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_str(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.label().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
