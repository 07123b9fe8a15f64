//! Data hall status as reported by the technician.
//!
//! The stored `status` is free text; the read views bucket it into the four
//! categories offered by the form, case-insensitively.

use std::fmt;

/// Status labels offered by the inspection form.
pub const HALL_STATUSES: [&str; 4] = ["Operational", "Maintenance", "Alert", "Offline"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Operational,
    Maintenance,
    Alert,
    Offline,
    Unknown,
}

impl StatusCategory {
    pub const KNOWN: [StatusCategory; 4] = [
        StatusCategory::Operational,
        StatusCategory::Maintenance,
        StatusCategory::Alert,
        StatusCategory::Offline,
    ];

    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "operational" => StatusCategory::Operational,
            "maintenance" => StatusCategory::Maintenance,
            "alert" => StatusCategory::Alert,
            "offline" => StatusCategory::Offline,
            _ => StatusCategory::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Operational => "Operational",
            StatusCategory::Maintenance => "Maintenance",
            StatusCategory::Alert => "Alert",
            StatusCategory::Offline => "Offline",
            StatusCategory::Unknown => "Unknown",
        }
    }

    /// CSS modifier used by the frontend status badges.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusCategory::Operational => "status-ok",
            StatusCategory::Maintenance => "status-warning",
            StatusCategory::Alert => "status-critical",
            StatusCategory::Offline => "status-disabled",
            StatusCategory::Unknown => "status-unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_case_insensitive() {
        assert_eq!(StatusCategory::from_status("OPERATIONAL"), StatusCategory::Operational);
        assert_eq!(StatusCategory::from_status(" alert "), StatusCategory::Alert);
        assert_eq!(StatusCategory::from_status("Healthy"), StatusCategory::Unknown);
        for label in HALL_STATUSES {
            assert_eq!(StatusCategory::from_status(label).label(), label);
        }
    }
}
