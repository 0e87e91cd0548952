//! Unit tests for the task board.

mod drag_tests;
mod service_tests;
