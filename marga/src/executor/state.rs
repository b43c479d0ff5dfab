//! Waypoint executor states.

/// Per-waypoint motion phase.
///
/// Each waypoint runs `Idle → Rotating → Translating → Idle`; `Stopped` is
/// entered after the final stop command of a path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ExecutorState {
    /// Waiting for the next goal
    #[default]
    Idle,

    /// Turning in place toward the goal
    Rotating {
        /// Absolute heading being turned to (radians)
        target_heading: f32,
        /// Signed rotation to perform (radians)
        rotation: f32,
    },

    /// Driving straight toward the goal
    Translating {
        /// Distance to cover (meters)
        distance: f32,
    },

    /// Path finished and stop published
    Stopped,
}

impl ExecutorState {
    /// Is a motion phase running?
    pub fn is_moving(&self) -> bool {
        matches!(
            self,
            ExecutorState::Rotating { .. } | ExecutorState::Translating { .. }
        )
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ExecutorState::Idle => "Idle",
            ExecutorState::Rotating { .. } => "Rotating",
            ExecutorState::Translating { .. } => "Translating",
            ExecutorState::Stopped => "Stopped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_helpers() {
        assert_eq!(ExecutorState::default(), ExecutorState::Idle);
        assert!(ExecutorState::Translating { distance: 1.0 }.is_moving());
        assert!(!ExecutorState::Stopped.is_moving());
        assert_eq!(
            ExecutorState::Rotating {
                target_heading: 0.0,
                rotation: 0.0
            }
            .name(),
            "Rotating"
        );
    }
}
