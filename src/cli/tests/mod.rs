//! Unit tests for the command-line front end.

mod output_tests;
