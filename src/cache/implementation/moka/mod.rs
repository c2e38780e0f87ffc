mod builder;
mod storage;
mod weigher;

#[allow(unused_imports)]
pub use {builder::*, storage::*, weigher::*};
