pub mod db;
pub mod telemetry;

/// Read an optional environment variable, treating blank values as unset.
pub(crate) fn optional_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
