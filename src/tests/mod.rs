//! Internal test modules.

mod cache_tests;
mod io_tests;
