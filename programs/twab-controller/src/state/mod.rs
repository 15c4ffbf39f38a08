pub mod account;
pub mod delegation;
pub mod observation;
pub mod vault_config;

pub use account::*;
pub use delegation::*;
pub use observation::*;
pub use vault_config::*;

#[cfg(test)]
pub mod state_tests;
