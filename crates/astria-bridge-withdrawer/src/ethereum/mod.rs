pub(crate) mod astria_withdrawer;
mod state;
mod watcher;

pub(crate) use state::StateSnapshot;
pub(crate) use watcher::Watcher;

#[cfg(test)]
mod test_utils;
