mod canonical;
mod deriver;
mod digest;
#[allow(clippy::module_inception)]
mod key;

#[allow(unused_imports)]
pub use {canonical::*, deriver::*, digest::*, key::*};
