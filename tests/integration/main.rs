//! Integration tests for the importer
//!
//! These tests use wiremock to serve fake listing pages and run both
//! scheduling modes end-to-end over HTTP.

mod helpers;
mod import_tests;
