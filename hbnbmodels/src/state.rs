use serde::{Deserialize, Serialize};

/// A geographic state, the top of the display hierarchy.
///
/// States are loaded from storage and never created or mutated by this
/// system. The cities belonging to a state are separate `City` records
/// carrying this state's id in their `state_id` field.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct State {
    /// Unique identifier (a UUID string in the original data files).
    pub id: String,
    /// Display name; never empty for stored records, used for ordering.
    pub name: String,
}
