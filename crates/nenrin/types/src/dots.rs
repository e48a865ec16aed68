use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::input::DomainId;

/// An event located on the ring geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dot {
    pub step_index: u64,
    pub domain_id: DomainId,
    /// Input-order position among events sharing this domain and step.
    pub event_index: usize,
    pub position: Position,
}

/// A dot whose event was flagged as notable. Same placement, separate output.
pub type Knot = Dot;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DotsOutput {
    pub dots: Vec<Dot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knots: Option<Vec<Knot>>,
}
