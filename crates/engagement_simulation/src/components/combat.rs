//! Combat mode компонент

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Готовность к бою (engaged / disengaged)
///
/// Default: false. Единственный писатель для NPC — engagement systems.
#[derive(
    Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, Serialize, Deserialize,
)]
#[reflect(Component)]
pub struct CombatMode(pub bool);

impl CombatMode {
    pub fn is_engaged(&self) -> bool {
        self.0
    }
}
