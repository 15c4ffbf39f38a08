pub mod big_num;
pub mod binary_search;
pub mod ring;

pub use big_num::{U192, U256};
