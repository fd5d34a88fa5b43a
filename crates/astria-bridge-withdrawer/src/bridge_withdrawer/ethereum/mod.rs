pub(crate) mod convert;
pub(crate) mod watcher;

#[rustfmt::skip]
mod generated;
pub use generated::*;

#[cfg(test)]
mod test_utils;
