//! Client-side shaping of fetched records for the read views.

pub mod dashboard;
pub mod incidents;
pub mod inspections;
pub mod readings;

/// Case-insensitive substring test; an empty needle matches everything.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
