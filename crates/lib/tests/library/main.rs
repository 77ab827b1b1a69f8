//! Integration tests for repository and module declaration and option lookup.

mod common;
mod declaration_tests;
mod logging_tests;
mod property_tests;
