//! Lifecycle types shared between the engine and the owners of generations.

/// Where a generation is in its pass sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// Computing the pass at this sampling stride.
    Running { level: u32 },
    /// The stride-1 pass was delivered.
    Completed,
    /// Stopped before the final pass was delivered.
    Cancelled,
}

impl GenerationState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running { .. })
    }
}

/// How a generation ended, as reported by its coordinating thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Completed { frames_delivered: usize },
    Cancelled { frames_delivered: usize },
    Failed { frames_delivered: usize, message: String },
}

impl GenerationOutcome {
    #[must_use]
    pub fn frames_delivered(&self) -> usize {
        match self {
            Self::Completed { frames_delivered }
            | Self::Cancelled { frames_delivered }
            | Self::Failed {
                frames_delivered, ..
            } => *frames_delivered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_running_is_not_terminal() {
        assert!(!GenerationState::Running { level: 4 }.is_terminal());
        assert!(GenerationState::Completed.is_terminal());
        assert!(GenerationState::Cancelled.is_terminal());
    }

    #[test]
    fn frames_delivered_for_every_outcome() {
        assert_eq!(GenerationOutcome::Completed { frames_delivered: 5 }.frames_delivered(), 5);
        assert_eq!(GenerationOutcome::Cancelled { frames_delivered: 2 }.frames_delivered(), 2);
        let failed = GenerationOutcome::Failed {
            frames_delivered: 1,
            message: "boom".into(),
        };
        assert_eq!(failed.frames_delivered(), 1);
    }
}
