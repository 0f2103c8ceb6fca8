// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Boundary between the allocation engine and whatever stores events.
//!
//! Drafts are flattened into an [`EventSavePayload`] on save and rebuilt
//! from one on load. A recorded [`Session`] can be replayed offline.

mod error;
mod persisted;
mod session;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use persisted::{
    EventSavePayload, PersistedEquipmentLine, PersistedRoleRequirement, assigned_staff,
    build_save_payload, restore_draft,
};
pub use session::{ReplayOutcome, Session, replay};
