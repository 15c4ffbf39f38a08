pub mod delegation_dispatch_tests;
pub mod helpers;
