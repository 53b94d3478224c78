//! Traits tying dashboard records to their REST collection.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// A record managed through id-keyed CRUD calls.
///
/// # Examples
///
/// ```
/// use botcommand_core::{Command, Resource};
///
/// assert_eq!(Command::PATH, "commands");
/// assert_eq!(Command::not_found_message(), "Command not found");
/// ```
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Collection path segment, e.g. `reaction-roles`.
    const PATH: &'static str;

    /// Human label used in messages, e.g. `Reaction role`.
    const LABEL: &'static str;

    /// Record identifier.
    fn id(&self) -> &str;

    /// Replace the record identifier.
    fn set_id(&mut self, id: String);

    /// Path of the whole collection.
    fn collection_path() -> String {
        format!("/{}", Self::PATH)
    }

    /// Path of a single record.
    fn item_path(id: &str) -> String {
        format!("/{}/{}", Self::PATH, id)
    }

    /// Fixed message reported when an id is absent.
    fn not_found_message() -> String {
        format!("{} not found", Self::LABEL)
    }

    /// Body of the acknowledgement returned by a delete.
    fn deleted_message() -> String {
        format!("{} deleted successfully", Self::LABEL)
    }
}

/// A record carrying an `enabled` switch.
pub trait Switchable: Resource {
    /// Whether the record is active.
    fn enabled(&self) -> bool;

    /// Turn the record on or off.
    fn set_enabled(&mut self, enabled: bool);
}

macro_rules! impl_resource {
    ($ty:ty, $path:literal, $label:literal) => {
        impl $crate::Resource for $ty {
            const PATH: &'static str = $path;
            const LABEL: &'static str = $label;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

macro_rules! impl_switchable {
    ($ty:ty) => {
        impl $crate::Switchable for $ty {
            fn enabled(&self) -> bool {
                self.enabled
            }

            fn set_enabled(&mut self, enabled: bool) {
                self.enabled = enabled;
            }
        }
    };
}

pub(crate) use impl_resource;
pub(crate) use impl_switchable;
