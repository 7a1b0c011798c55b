//! Partial-update payload with explicit field presence.

use super::TaskStatus;
use serde::{Deserialize, Deserializer};

/// Presence wrapper for a partial-update field.
///
/// Distinguishes a field that was not supplied from one supplied as an
/// explicit null, which matters for columns where null is itself invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// The field was not supplied; the stored value is preserved.
    #[default]
    Absent,
    /// The field was supplied as an explicit null.
    Null,
    /// The field was supplied with a value.
    Set(T),
}

impl<T> Field<T> {
    /// Returns `true` when the field was not supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` when the field was supplied as an explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the supplied value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

// A present key always deserialises through `Option<T>`: JSON null becomes
// `Null`, a value becomes `Set`. `Absent` only arises through the struct
// field default when the key is missing entirely.
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Set))
    }
}

/// Partial-update payload for a task record.
///
/// Only supplied fields are applied; everything else keeps its stored
/// value. An explicit null clears `description` (a nullable column) but is
/// rejected by the store layer for `title` and `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    title: Field<String>,
    #[serde(default)]
    description: Field<String>,
    #[serde(default)]
    status: Field<TaskStatus>,
}

impl TaskPatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Field::Set(title.into());
        self
    }

    /// Supplies the title as an explicit null.
    ///
    /// The title column is non-nullable, so the store layer rejects the
    /// resulting write as a constraint violation.
    #[must_use]
    pub fn with_null_title(mut self) -> Self {
        self.title = Field::Null;
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Field::Set(description.into());
        self
    }

    /// Clears the description with an explicit null.
    #[must_use]
    pub fn with_cleared_description(mut self) -> Self {
        self.description = Field::Null;
        self
    }

    /// Sets a new status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Field::Set(status);
        self
    }

    /// Supplies the status as an explicit null.
    ///
    /// The status column is non-nullable, so the store layer rejects the
    /// resulting write as a constraint violation.
    #[must_use]
    pub const fn with_null_status(mut self) -> Self {
        self.status = Field::Null;
        self
    }

    /// Returns the title field.
    #[must_use]
    pub const fn title(&self) -> &Field<String> {
        &self.title
    }

    /// Returns the description field.
    #[must_use]
    pub const fn description(&self) -> &Field<String> {
        &self.description
    }

    /// Returns the status field.
    #[must_use]
    pub const fn status(&self) -> &Field<TaskStatus> {
        &self.status
    }

    /// Returns `true` when no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_absent() && self.description.is_absent() && self.status.is_absent()
    }
}
