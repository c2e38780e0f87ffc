/// Moka storage implementation.
#[cfg(feature = "moka")]
pub mod moka;
