//! Engagement system implementations
//!
//! # Systems
//!
//! - `update_npc_engagement` — per-tick sweep (intent → combat mode)
//! - `process_enter_combat` — scripted `EnterCombatRequest`
//! - `process_exit_combat` — scripted `ExitCombatRequest`
//!
//! Все три работают через `ActorView` — адаптер ECS компонентов
//! к `EngagementActor`, так что правила живут только в controller.

use bevy::prelude::*;

use crate::components::{
    equip_strongest, Actor, Arsenal, CombatMode, EquippedWeapon, Health, Intent, IntentAction,
    Player,
};
use crate::engagement::controller::{EngagementActor, EngagementController, EngagementTransition};
use crate::engagement::events::*;
use crate::engagement::EngagementConfig;
use crate::logger::{log, log_error};

/// Query data, общий для всех engagement систем
///
/// CombatMode / EquippedWeapon / Arsenal опциональны: `#[require]` добавляет их
/// только при spawn, хост может удалить их позже.
pub type EngagementQueryData = (
    Entity,
    &'static Actor,
    Option<&'static mut CombatMode>,
    Option<&'static mut EquippedWeapon>,
    Option<&'static Arsenal>,
    Option<&'static Health>,
    Option<&'static Intent>,
    Has<Player>,
);

/// Query item для `EngagementQueryData`
pub type EngagementItem<'a> = (
    Entity,
    &'a Actor,
    Option<Mut<'a, CombatMode>>,
    Option<Mut<'a, EquippedWeapon>>,
    Option<&'a Arsenal>,
    Option<&'a Health>,
    Option<&'a Intent>,
    bool,
);

// ============================================================================
// ActorView
// ============================================================================

/// Borrowed view одного актора для controller'а
///
/// Пишет в CombatMode / EquippedWeapon только при реальном изменении,
/// так что `Changed<CombatMode>` срабатывает только на переходах.
/// Отсутствующие компоненты копятся в `missing_*` и вставляются в `flush`.
pub struct ActorView<'a> {
    pub entity: Entity,
    actor: &'a Actor,
    combat_mode: Option<Mut<'a, CombatMode>>,
    equipped: Option<Mut<'a, EquippedWeapon>>,
    arsenal: Option<&'a Arsenal>,
    health: Option<&'a Health>,
    intent: Option<&'a Intent>,
    is_player: bool,
    missing_mode: Option<CombatMode>,
    missing_slot: Option<EquippedWeapon>,
}

impl<'a> ActorView<'a> {
    pub fn new(item: EngagementItem<'a>) -> Self {
        let (entity, actor, combat_mode, equipped, arsenal, health, intent, is_player) = item;
        Self {
            entity,
            actor,
            combat_mode,
            equipped,
            arsenal,
            health,
            intent,
            is_player,
            missing_mode: None,
            missing_slot: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.actor.name
    }

    /// Label текущего intent'а для логов/событий
    fn intent_label(&self) -> String {
        self.intent
            .map(|intent| intent.action.label().to_string())
            .unwrap_or_else(|| "no intent".to_string())
    }

    /// Вставляет компоненты, которых не было на entity
    pub fn flush(self, commands: &mut Commands) {
        if let Some(mode) = self.missing_mode {
            commands.entity(self.entity).insert(mode);
        }
        if let Some(slot) = self.missing_slot {
            commands.entity(self.entity).insert(slot);
        }
    }
}

impl EngagementActor for ActorView<'_> {
    fn is_player_controlled(&self) -> bool {
        self.is_player
    }

    fn health(&self) -> Option<u32> {
        self.health.map(|health| health.current)
    }

    fn combat_mode(&self) -> Option<bool> {
        match &self.combat_mode {
            Some(mode) => Some(mode.is_engaged()),
            None => self.missing_mode.map(|mode| mode.is_engaged()),
        }
    }

    fn set_combat_mode(&mut self, engaged: bool) {
        match self.combat_mode.as_mut() {
            Some(mode) => {
                if mode.0 != engaged {
                    mode.0 = engaged;
                }
            }
            None => self.missing_mode = Some(CombatMode(engaged)),
        }
    }

    fn intent_action(&self) -> Option<&IntentAction> {
        self.intent.map(|intent| &intent.action)
    }

    fn equip_strongest_weapon(&mut self) {
        let no_weapons = Arsenal::empty();
        let arsenal = self.arsenal.unwrap_or(&no_weapons);

        let slot: &mut EquippedWeapon = match self.equipped.as_mut() {
            Some(slot) => &mut **slot,
            None => self.missing_slot.get_or_insert_with(EquippedWeapon::empty),
        };
        let before = slot.weapon().cloned();
        equip_strongest(arsenal, slot);

        if arsenal.is_empty() {
            log(&format!("{} ({:?}) has no weapons to equip", self.actor.name, self.entity));
        } else if before.as_ref() != slot.weapon() {
            log(&format!(
                "{} ({:?}) equipped {:?}",
                self.actor.name,
                self.entity,
                slot.weapon()
            ));
        }
    }

    fn clear_equipped_weapon(&mut self) {
        match self.equipped.as_mut() {
            Some(slot) => {
                if !slot.is_empty() {
                    slot.clear();
                }
            }
            // Слота нет → держать нечего
            None => {
                if let Some(slot) = self.missing_slot.as_mut() {
                    slot.clear();
                }
            }
        }
    }
}

// ============================================================================
// Reporting
// ============================================================================

fn report(
    changed: &mut EventWriter<EngagementChanged>,
    config: &EngagementConfig,
    view: &ActorView,
    transition: EngagementTransition,
    reason: String,
) {
    let engaged = match transition {
        EngagementTransition::Entered => true,
        EngagementTransition::Exited => false,
        EngagementTransition::Unchanged | EngagementTransition::Skipped(_) => return,
    };

    if config.log_transitions {
        let verb = if engaged { "entered" } else { "left" };
        log(&format!(
            "⚔️ {} ({:?}) {} combat mode ({})",
            view.name(),
            view.entity,
            verb,
            reason
        ));
    }

    changed.write(EngagementChanged {
        entity: view.entity,
        engaged,
        reason,
    });
}

// ============================================================================
// Per-tick sweep
// ============================================================================

/// Per-tick sweep: combat mode ← intent для всех живых NPC
///
/// Игроки и мёртвые пропускаются controller'ом (компоненты не трогаются).
pub fn update_npc_engagement(
    mut commands: Commands,
    mut actors: Query<EngagementQueryData, With<Actor>>,
    mut changed: EventWriter<EngagementChanged>,
    config: Res<EngagementConfig>,
) {
    let controller = EngagementController::new();

    for item in actors.iter_mut() {
        let mut view = ActorView::new(item);
        let transition = controller.update_actor(&mut view);

        if transition.is_change() {
            let reason = view.intent_label();
            report(&mut changed, &config, &view, transition, reason);
        }
        view.flush(&mut commands);
    }
}

// ============================================================================
// Scripted requests
// ============================================================================

/// Process `EnterCombatRequest` events
pub fn process_enter_combat(
    mut commands: Commands,
    mut requests: EventReader<EnterCombatRequest>,
    mut actors: Query<EngagementQueryData, With<Actor>>,
    mut changed: EventWriter<EngagementChanged>,
    config: Res<EngagementConfig>,
) {
    let controller = EngagementController::new();

    for request in requests.read() {
        let Ok(item) = actors.get_mut(request.entity) else {
            log_error(&format!(
                "EnterCombatRequest: {:?} is not an actor ({})",
                request.entity, request.reason
            ));
            continue;
        };

        let mut view = ActorView::new(item);
        let transition = controller.enter_combat(&mut view, &request.reason);
        report(&mut changed, &config, &view, transition, request.reason.clone());
        view.flush(&mut commands);
    }
}

/// Process `ExitCombatRequest` events
pub fn process_exit_combat(
    mut commands: Commands,
    mut requests: EventReader<ExitCombatRequest>,
    mut actors: Query<EngagementQueryData, With<Actor>>,
    mut changed: EventWriter<EngagementChanged>,
    config: Res<EngagementConfig>,
) {
    let controller = EngagementController::new();

    for request in requests.read() {
        let Ok(item) = actors.get_mut(request.entity) else {
            log_error(&format!("ExitCombatRequest: {:?} is not an actor", request.entity));
            continue;
        };

        let mut view = ActorView::new(item);
        let transition = controller.exit_combat(&mut view);
        report(&mut changed, &config, &view, transition, "scripted exit".to_string());
        view.flush(&mut commands);
    }
}

// ============================================================================
// Queries
// ============================================================================

/// `is_in_combat` для ECS хоста (нет CombatMode → false)
pub fn is_entity_in_combat(world: &World, entity: Entity) -> bool {
    world
        .get::<CombatMode>(entity)
        .is_some_and(CombatMode::is_engaged)
}
