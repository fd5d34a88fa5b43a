#![allow(
    unreachable_pub,
    clippy::module_inception,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::useless_conversion,
    clippy::pedantic
)]

pub(crate) mod astria_withdrawer_interface;

#[cfg(test)]
pub(crate) mod astria_bridgeable_erc20;
#[cfg(test)]
pub(crate) mod astria_withdrawer;
