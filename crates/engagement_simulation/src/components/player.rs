//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input (в отличие от AI).

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Engagement systems никогда не пишут CombatMode / EquippedWeapon такого актора
/// в per-tick sweep: combat mode игрока переключает input handling хоста.
///
/// # Архитектурная заметка
/// - Engagement query читает маркер через `Has<Player>` (а не `Without<Player>`),
///   потому что scripted `EnterCombatRequest` для игрока всё равно валиден
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;
