use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait implemented by the typed id newtypes of every domain record.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string (for view models and logs).
    fn as_string(&self) -> String;

    /// Parse an id back from its string form.
    fn from_string(s: &str) -> Result<Self, String>;
}
