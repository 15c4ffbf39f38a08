pub mod burn;
pub mod delegate;
pub mod initialize_account;
pub mod initialize_vault;
pub mod mint;
pub mod queries;
pub mod sponsor;
pub mod transfer;

pub use burn::*;
pub use delegate::*;
pub use initialize_account::*;
pub use initialize_vault::*;
pub use mint::*;
pub use queries::*;
pub use sponsor::*;
pub use transfer::*;
