//! Platform-facing building blocks shared by the i18n service, the particle
//! backdrop and the views.

pub mod config;
pub mod platform;
pub mod storage;
pub mod timing;
