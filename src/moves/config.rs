//! Neighborhood configuration.

/// Configuration shared by every neighborhood.
///
/// # Examples
///
/// ```
/// use u_upmsp::moves::MoveConfig;
///
/// let config = MoveConfig::default()
///     .with_priority(3)
///     .with_makespan_machine(true);
/// assert_eq!(config.priority, 3);
/// assert!(config.use_makespan_machine);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveConfig {
    /// Relative selection weight. Not interpreted by the move itself; the
    /// driver uses it to pick among neighborhoods.
    pub priority: u32,

    /// Always involve the current makespan machine in a proposal when it
    /// holds enough jobs.
    pub use_makespan_machine: bool,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            priority: 1,
            use_makespan_machine: false,
        }
    }
}

impl MoveConfig {
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_makespan_machine(mut self, enabled: bool) -> Self {
        self.use_makespan_machine = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.priority == 0 {
            return Err("priority must be positive".into());
        }
        Ok(())
    }

    /// Display name of a neighborhood under this configuration.
    pub(crate) fn decorate(&self, base: &str) -> String {
        if self.use_makespan_machine {
            format!("{base}(mk)")
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MoveConfig::default();
        assert_eq!(config.priority, 1);
        assert!(!config.use_makespan_machine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_priority() {
        let config = MoveConfig::default().with_priority(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_decorate() {
        assert_eq!(MoveConfig::default().decorate("Swap"), "Swap");
        assert_eq!(
            MoveConfig::default()
                .with_makespan_machine(true)
                .decorate("Swap"),
            "Swap(mk)"
        );
    }
}
