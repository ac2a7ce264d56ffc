//! Safety check result value object

/// Outcome of one safety check. Produced by the gate, never persisted
/// beyond a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    pub check_name: String,
    pub passed: bool,
    pub message: String,
}

impl ValidationCheck {
    pub fn passed(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn failed(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            passed: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_pass_flag() {
        let ok = ValidationCheck::passed("branch_pattern", "matched");
        assert!(ok.passed);
        let bad = ValidationCheck::failed("labels_presence", "no labels");
        assert!(!bad.passed);
        assert_eq!(bad.check_name, "labels_presence");
    }
}
