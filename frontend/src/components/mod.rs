pub mod dashboard;
pub mod flow;
pub mod incidents;
pub mod inspections;
pub mod report;
