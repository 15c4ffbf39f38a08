pub mod account_tests;
