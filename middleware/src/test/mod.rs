//! Unit test module
//!
//! Middleware unit tests live here, separate from source files.

mod logging_auth_middleware_test;
