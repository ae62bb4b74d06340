//! Integration tests for lottie-scrub

mod helpers;

mod cli_test;
mod controller_test;
mod loader_test;
