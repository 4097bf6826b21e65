//! Host AR session boundary
//!
//! Types describing what the host tracking system reports: detected plane
//! measurements and the quality of world tracking. The toolkit never talks
//! to the AR session itself; the embedder forwards these values in.

mod anchor;

pub use anchor::{AnchorId, PlaneAnchor};

/// Reason why world tracking is degraded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingLimitation {
    /// The session has just started and is still collecting features
    Initializing,
    /// The device is moving too fast for reliable tracking
    ExcessiveMotion,
    /// The camera image lacks trackable detail
    InsufficientFeatures,
    /// The session is recovering from an interruption
    Relocalizing,
}

/// World-tracking quality reported by the host session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// Tracking is working normally
    Normal,
    /// Tracking works but quality is degraded
    Limited(TrackingLimitation),
    /// Tracking is not available
    NotAvailable,
}

impl TrackingState {
    /// Whether plane measurements received in this state are trustworthy
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Normal | Self::Limited(_))
    }

    /// Whether this state is severe enough to warrant resetting the session
    pub fn warrants_reset(&self) -> bool {
        matches!(self, Self::NotAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited_tracking_is_usable() {
        assert!(TrackingState::Normal.is_usable());
        assert!(TrackingState::Limited(TrackingLimitation::ExcessiveMotion).is_usable());
        assert!(!TrackingState::NotAvailable.is_usable());
    }

    #[test]
    fn test_only_unavailable_warrants_reset() {
        assert!(!TrackingState::Normal.warrants_reset());
        assert!(!TrackingState::Limited(TrackingLimitation::Relocalizing).warrants_reset());
        assert!(TrackingState::NotAvailable.warrants_reset());
    }
}
