use pursuit_core::{DisguiseId, DisguiseOracle};

/// Tracks which disguise, if any, the player has on.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisguiseOracleImpl {
    equipped: Option<DisguiseId>,
}

impl DisguiseOracleImpl {
    pub fn equip(&mut self, disguise: DisguiseId) {
        self.equipped = Some(disguise);
    }

    pub fn remove(&mut self) {
        self.equipped = None;
    }
}

impl DisguiseOracle for DisguiseOracleImpl {
    fn is_disguised(&self) -> bool {
        self.equipped.is_some()
    }

    fn equipped(&self) -> Option<DisguiseId> {
        self.equipped
    }
}
