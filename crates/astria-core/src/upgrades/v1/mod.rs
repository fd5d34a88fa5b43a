#[cfg(feature = "serde")]
pub use aspen::Aspen;
#[cfg(feature = "serde")]
pub use change::Change;
pub use change_hash::{
    ChangeHash,
    ChangeHashError,
};
#[cfg(feature = "serde")]
pub use change_info::ChangeInfo;
#[cfg(feature = "serde")]
pub use change_name::ChangeName;
#[cfg(feature = "serde")]
pub use upgrade::Upgrade;
#[cfg(feature = "serde")]
pub use upgrade_name::UpgradeName;
#[cfg(feature = "serde")]
pub use upgrades::Upgrades;

#[cfg(feature = "serde")]
pub mod aspen;
#[cfg(feature = "serde")]
mod change;
mod change_hash;
#[cfg(feature = "serde")]
mod change_info;
#[cfg(feature = "serde")]
mod change_name;
#[cfg(feature = "serde")]
mod upgrade;
#[cfg(feature = "serde")]
mod upgrade_name;
#[cfg(feature = "serde")]
mod upgrades;
