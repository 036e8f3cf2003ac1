/// Entitlement Module
pub mod entitlement;

/// Session structures
pub mod session;
