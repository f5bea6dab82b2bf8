//! Mock infrastructure for testing external services
//!
//! This module provides mock servers and canned payloads for the Gemini API.
//! Mocks are reusable across test files and cover success, upstream errors
//! and malformed upstream bodies.

#![allow(dead_code)]


pub use gemini::*;
