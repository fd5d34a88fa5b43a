#[allow(warnings)]
pub(crate) mod astria_withdrawer_interface;
mod convert;
mod watcher;

pub(crate) use watcher::Watcher;

#[cfg(test)]
#[allow(warnings)]
mod astria_mintable_erc20;
#[cfg(test)]
#[allow(warnings)]
mod astria_withdrawer;
#[cfg(test)]
mod test_utils;
