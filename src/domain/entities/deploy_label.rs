//! Deploy label entity
//!
//! A deploy label is a PR tag of the form `deploy:<service>:<environment>`
//! declaring one deployment intent. The `deploy:` namespace prefix is
//! optional on parse; both tokens must be non-empty for the label to be
//! valid. Parsing never fails, validity is reported.

const LABEL_NAMESPACE: &str = "deploy:";

/// One (service, environment) deployment intent parsed from a raw label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeployLabel {
    raw: String,
    service: String,
    environment: String,
}

impl DeployLabel {
    /// Parse a raw label string.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let body = raw.strip_prefix(LABEL_NAMESPACE).unwrap_or(&raw);

        let mut parts = body.split(':');
        let service = parts.next().unwrap_or_default().to_string();
        let environment = parts.next().unwrap_or_default().to_string();

        // A third token makes the label malformed, not truncated
        let trailing = parts.next().is_some();

        Self {
            raw,
            service: if trailing { String::new() } else { service },
            environment: if trailing { String::new() } else { environment },
        }
    }

    /// Build a label directly from its parts.
    pub fn new(service: impl Into<String>, environment: impl Into<String>) -> Self {
        let service = service.into();
        let environment = environment.into();
        Self {
            raw: format!("{LABEL_NAMESPACE}{service}:{environment}"),
            service,
            environment,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Valid iff both service and environment tokens are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.service.is_empty() && !self.environment.is_empty()
    }
}

impl std::fmt::Display for DeployLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
