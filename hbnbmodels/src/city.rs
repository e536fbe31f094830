use serde::{Deserialize, Serialize};

/// A city belonging to exactly one `State`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct City {
    /// Unique identifier.
    pub id: String,
    /// Display name; never empty for stored records, used for ordering.
    pub name: String,
    /// Id of the owning `State`.
    pub state_id: String,
}
