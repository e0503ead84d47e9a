/// Identifier of a wearable disguise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisguiseId(pub u32);

/// What the player is currently wearing.
pub trait DisguiseOracle {
    fn is_disguised(&self) -> bool;

    fn equipped(&self) -> Option<DisguiseId>;
}
