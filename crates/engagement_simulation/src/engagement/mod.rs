//! Engagement module — combat mode management для NPC
//!
//! # Architecture
//!
//! **Controller (pure rules):**
//! - `EngagementController` — intent → combat mode, combat mode → weapon
//! - `EngagementActor` — capability trait, который реализует хост
//!
//! **ECS flow (FixedUpdate, `.chain()`):**
//! 1. `update_npc_engagement` — per-tick sweep по всем Actor
//! 2. `process_enter_combat` / `process_exit_combat` — scripted requests
//! 3. `EngagementChanged` events на каждый переход
//!
//! Scripted requests идут после sweep'а: их эффект виден в конце тика,
//! а следующий sweep снова приводит NPC к его intent'у.
//!
//! **Не отвечает за:**
//! - Combat mechanics (damage, targeting)
//! - AI decisions (кто производит Intent)
//! - Player combat toggle (input handling хоста)

use bevy::prelude::*;

pub mod controller;
pub mod events;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod controller_tests;

// Re-exports
pub use controller::*;
pub use events::*;
pub use systems::*;

/// Настройки engagement систем
#[derive(Resource, Debug, Clone)]
pub struct EngagementConfig {
    /// Логировать каждый переход combat mode (debug level)
    pub log_transitions: bool,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            log_transitions: true,
        }
    }
}

/// Engagement plugin
pub struct EngagementPlugin;

impl Plugin for EngagementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EngagementConfig>()
            // Events
            .add_event::<EnterCombatRequest>()
            .add_event::<ExitCombatRequest>()
            .add_event::<EngagementChanged>()
            // Systems (FixedUpdate — один sweep на simulation tick)
            .add_systems(
                FixedUpdate,
                (
                    update_npc_engagement,
                    process_enter_combat,
                    process_exit_combat,
                )
                    .chain(),
            );
    }
}
