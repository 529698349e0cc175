//! Usage-access permission checks.

/// Whether the usage statistics source may be read.
pub trait UsageAccess {
    fn has_usage_access(&self) -> bool;

    /// What the user has to do to grant access.
    fn grant_instructions(&self) -> &'static str;
}

#[cfg(not(target_os = "linux"))]
struct ProcessListAccess;

#[cfg(not(target_os = "linux"))]
impl UsageAccess for ProcessListAccess {
    fn has_usage_access(&self) -> bool {
        true
    }

    fn grant_instructions(&self) -> &'static str {
        "Usage access is required to get stats."
    }
}

#[cfg(target_os = "linux")]
pub fn default_usage_access() -> Box<dyn UsageAccess> {
    Box::new(crate::linux::ProcAccess::default())
}

#[cfg(not(target_os = "linux"))]
pub fn default_usage_access() -> Box<dyn UsageAccess> {
    Box::new(ProcessListAccess)
}
