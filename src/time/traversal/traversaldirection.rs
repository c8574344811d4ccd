use serde::{
    Serialize,
    Deserialize
};


#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TraversalDirection {
    #[default]
    Forward = 1,
    Backward = -1
}

impl TraversalDirection {
    /// Signed size of one calendar-day step.
    pub fn step(&self) -> i64 {
        *self as i64
    }
}
