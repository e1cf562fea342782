use serde::{Deserialize, Serialize};

/// A single accepted reservation, keyed by parent_email (partition key) and
/// reservation_timestamp (sort key) so repeat submissions never overwrite
/// each other.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Reservation {
    pub parent_email: String,
    pub reservation_timestamp: String,
    pub date: String,
    pub child_name: String,
    pub parent_name: String,
}
