//! Domain ports for the runtime services the store depends on.

mod expiry_sleeper;

pub use expiry_sleeper::{ExpirySleeper, TokioSleeper};
