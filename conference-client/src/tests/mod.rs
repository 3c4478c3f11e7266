//! Test doubles and unit tests for the session controller
