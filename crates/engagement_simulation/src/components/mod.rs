//! ECS Components для engagement simulation
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Actor, Health)
//! - player: player control marker (Player)
//! - combat: combat mode flag (CombatMode)
//! - intent: решение decision logic на тик (Intent, IntentAction)
//! - equipment: оружие (EquippedWeapon, Arsenal, WeaponRef)

pub mod actor;
pub mod combat;
pub mod equipment;
pub mod intent;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use combat::*;
pub use equipment::*;
pub use intent::*;
pub use player::*;
