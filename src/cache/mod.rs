mod configuration;
mod coordinator;
mod descriptor;
mod hooks;
mod key;
mod storage;
mod tiered;
mod weight;

/// Storage implementations.
pub mod implementation;

#[allow(unused_imports)]
pub use {
    configuration::*, coordinator::*, descriptor::*, hooks::*, key::*, storage::*, tiered::*,
    weight::*,
};
