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
    clippy::all
)]

//! Audit records for event-draft transitions.
//!
//! Every applied command yields exactly one `AuditEvent`. Events carry
//! short before/after summaries rather than full drafts; the draft itself
//! is the snapshot the caller keeps.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The person or process that issued a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The kind of actor (e.g. "planner", "import").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The kind of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Why a command was issued (a UI action, an import row, a replay step).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// Identifier of the triggering request.
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// The command that was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Command name (e.g. "`AddRole`", "`AdjustExtra`").
    pub name: String,
    /// Human-readable detail of what changed.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual summary of an event draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Summary in `key=value,key=value` form.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable record of one transition of one event draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The event draft this transition belongs to.
    pub event_id: String,
    /// Who issued the command.
    pub actor: Actor,
    /// Why it was issued.
    pub cause: Cause,
    /// What was applied.
    pub action: Action,
    /// Summary before the transition.
    pub before: StateSnapshot,
    /// Summary after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `event_id` - The event draft scope
    /// * `actor` - Who issued the command
    /// * `cause` - Why it was issued
    /// * `action` - What was applied
    /// * `before` - Summary before the transition
    /// * `after` - Summary after the transition
    #[must_use]
    pub const fn new(
        event_id: String,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            event_id,
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns whether the transition left the summary unchanged.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.before == self.after
    }
}

/// Append-only, ordered list of audit events.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn record(&mut self, event: AuditEvent) {
        self.events.push(event);
    }

    /// Returns all events in the order they were recorded.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Returns the events whose action has the given name.
    #[must_use]
    pub fn by_action<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AuditEvent> + 'a {
        self.events.iter().filter(move |e| e.action.name == name)
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
