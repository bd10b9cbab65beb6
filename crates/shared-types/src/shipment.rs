//! # Shipment Status
//!
//! State machine for shipment records. Lives here because the event stream
//! (`ShipmentUpdated`) carries the status across subsystem boundaries.

use serde::{Deserialize, Serialize};

/// Shipment lifecycle: `Created → InTransit → {Delivered, Exception}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    /// Recorded, not yet dispatched.
    #[default]
    Created,
    /// Dispatched, en route to the buyer.
    InTransit,
    /// Received by the buyer.
    Delivered,
    /// Lost, damaged, or otherwise failed in transit.
    Exception,
}

impl ShipmentStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: ShipmentStatus) -> bool {
        match (self, next) {
            (Self::Created, Self::InTransit) => true,
            (Self::InTransit, Self::Delivered) => true,
            (Self::InTransit, Self::Exception) => true,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Exception)
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShipmentStatus::Created => "Created",
            ShipmentStatus::InTransit => "InTransit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Exception => "Exception",
        };
        write!(f, "{name}")
    }
}
