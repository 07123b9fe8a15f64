pub mod device;
pub mod incident;
pub mod inspection;
pub mod site;
pub mod status;
