
pub mod integrations;
pub mod services;
pub mod workflows;
