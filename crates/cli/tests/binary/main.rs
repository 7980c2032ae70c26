// Binary tests run the real `berth` executable; unwrap/panic are fine here.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod commands;
mod harness;
mod usage;
