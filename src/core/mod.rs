//! Service layer exposing the command/query surface consumed by screens.

pub mod services;
