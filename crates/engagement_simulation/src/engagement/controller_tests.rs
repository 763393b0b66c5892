//! Tests for engagement controller rules.

#[cfg(test)]
mod tests {
    use super::super::controller::*;
    use crate::components::{IntentAction, WeaponRef};

    /// Stub actor: плоские поля + счётчик вызовов equip
    #[derive(Debug, Clone, Default)]
    struct StubActor {
        is_player: bool,
        health: Option<u32>,
        combat_mode: Option<bool>,
        equipped: Option<WeaponRef>,
        intent: Option<IntentAction>,
        strongest: Option<WeaponRef>,
        equip_calls: u32,
    }

    impl StubActor {
        fn npc() -> Self {
            Self {
                health: Some(100),
                combat_mode: Some(false),
                strongest: Some("sword_iron".into()),
                ..Default::default()
            }
        }

        fn player() -> Self {
            Self {
                is_player: true,
                ..Self::npc()
            }
        }

        fn intent(mut self, label: &str) -> Self {
            self.intent = Some(IntentAction::from_label(label));
            self
        }

        fn engaged_with(mut self, weapon: &str) -> Self {
            self.combat_mode = Some(true);
            self.equipped = Some(weapon.into());
            self
        }

        fn with_health(mut self, health: u32) -> Self {
            self.health = Some(health);
            self
        }

        fn engaged(&self) -> bool {
            self.combat_mode.unwrap_or(false)
        }
    }

    impl EngagementActor for StubActor {
        fn is_player_controlled(&self) -> bool {
            self.is_player
        }

        fn health(&self) -> Option<u32> {
            self.health
        }

        fn combat_mode(&self) -> Option<bool> {
            self.combat_mode
        }

        fn set_combat_mode(&mut self, engaged: bool) {
            self.combat_mode = Some(engaged);
        }

        fn intent_action(&self) -> Option<&IntentAction> {
            self.intent.as_ref()
        }

        fn equip_strongest_weapon(&mut self) {
            self.equip_calls += 1;
            self.equipped = self.strongest.clone();
        }

        fn clear_equipped_weapon(&mut self) {
            self.equipped = None;
        }
    }

    fn sweep(actors: &mut [StubActor]) {
        EngagementController::new().update_engagement(actors.iter_mut());
    }

    #[test]
    fn test_attack_intent_enters_combat_and_equips_once() {
        let mut actors = [StubActor::npc().intent("attack")];
        sweep(&mut actors);

        assert!(actors[0].engaged());
        assert_eq!(actors[0].equip_calls, 1);
        assert_eq!(actors[0].equipped, Some("sword_iron".into()));
    }

    #[test]
    fn test_flee_intent_is_combat() {
        let mut actors = [StubActor::npc().intent("flee")];
        sweep(&mut actors);

        assert!(actors[0].engaged());
        assert_eq!(actors[0].equip_calls, 1);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let mut actors = vec![
            StubActor::npc().intent("attack"),
            StubActor::npc().intent("goto"),
            StubActor::npc().engaged_with("axe"),
        ];

        sweep(&mut actors);
        let after_first: Vec<_> = actors
            .iter()
            .map(|a| (a.combat_mode, a.equipped.clone(), a.equip_calls))
            .collect();

        sweep(&mut actors);
        let after_second: Vec<_> = actors
            .iter()
            .map(|a| (a.combat_mode, a.equipped.clone(), a.equip_calls))
            .collect();

        assert_eq!(after_first, after_second);
        // Никакого повторного equip на втором тике
        assert_eq!(actors[0].equip_calls, 1);
    }

    #[test]
    fn test_player_never_touched_by_sweep() {
        let controller = EngagementController::new();

        let mut attacking = StubActor::player().intent("attack");
        assert_eq!(
            controller.update_actor(&mut attacking),
            EngagementTransition::Skipped(SkipReason::PlayerControlled)
        );
        assert!(!attacking.engaged());
        assert_eq!(attacking.equip_calls, 0);

        // Игрок в бою без intent'а тоже остаётся как есть
        let mut idle_engaged = StubActor::player().engaged_with("pistol");
        controller.update_actor(&mut idle_engaged);
        assert!(idle_engaged.engaged());
        assert_eq!(idle_engaged.equipped, Some("pistol".into()));

        // ...даже мёртвый
        let mut dead = StubActor::player().with_health(0).intent("attack");
        controller.update_actor(&mut dead);
        assert!(!dead.engaged());
    }

    #[test]
    fn test_dead_npc_never_touched_by_sweep() {
        let controller = EngagementController::new();

        let mut dead_attacker = StubActor::npc().with_health(0).intent("attack");
        assert_eq!(
            controller.update_actor(&mut dead_attacker),
            EngagementTransition::Skipped(SkipReason::Dead)
        );
        assert!(!dead_attacker.engaged());
        assert_eq!(dead_attacker.equip_calls, 0);

        let mut dead_engaged = StubActor::npc().with_health(0).engaged_with("spear");
        controller.update_actor(&mut dead_engaged);
        assert!(dead_engaged.engaged());
        assert_eq!(dead_engaged.equipped, Some("spear".into()));
    }

    #[test]
    fn test_losing_combat_intent_clears_weapon() {
        let mut no_intent = StubActor::npc().engaged_with("sword_iron");
        let mut idle = StubActor::npc().engaged_with("sword_iron").intent("idle");

        let controller = EngagementController::new();
        assert_eq!(controller.update_actor(&mut no_intent), EngagementTransition::Exited);
        assert_eq!(controller.update_actor(&mut idle), EngagementTransition::Exited);

        for actor in [&no_intent, &idle] {
            assert!(!actor.engaged());
            assert_eq!(actor.equipped, None);
        }
    }

    #[test]
    fn test_no_intent_no_combat_is_noop() {
        let mut actor = StubActor::npc();
        assert_eq!(
            EngagementController::new().update_actor(&mut actor),
            EngagementTransition::Unchanged
        );

        assert!(!actor.engaged());
        assert_eq!(actor.equipped, None);
        assert_eq!(actor.equip_calls, 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // Нет health (→ 100), нет combat mode (→ false)
        let mut actor = StubActor {
            health: None,
            combat_mode: None,
            strongest: Some("club".into()),
            ..Default::default()
        }
        .intent("attack");

        let controller = EngagementController::new();
        assert!(!controller.is_in_combat(&actor));
        assert_eq!(controller.update_actor(&mut actor), EngagementTransition::Entered);
        assert!(controller.is_in_combat(&actor));
        assert_eq!(actor.equipped, Some("club".into()));
    }

    #[test]
    fn test_already_engaged_keeps_current_weapon() {
        // Actor сам выбрал другое оружие — controller его не перевыбирает
        let mut actor = StubActor::npc().engaged_with("bow_hunting").intent("attack");
        EngagementController::new().update_actor(&mut actor);

        assert_eq!(actor.equipped, Some("bow_hunting".into()));
        assert_eq!(actor.equip_calls, 0);
    }

    #[test]
    fn test_enter_combat_npc_equips() {
        let controller = EngagementController::new();
        let mut actor = StubActor::npc();

        assert_eq!(controller.enter_combat(&mut actor, "ambush"), EngagementTransition::Entered);
        assert!(actor.engaged());
        assert_eq!(actor.equip_calls, 1);

        // Повторный вход — no-op
        assert_eq!(controller.enter_combat(&mut actor, "ambush"), EngagementTransition::Unchanged);
        assert_eq!(actor.equip_calls, 1);
    }

    #[test]
    fn test_enter_combat_player_keeps_manual_equipment() {
        let controller = EngagementController::new();
        let mut player = StubActor::player();
        player.equipped = Some("torch".into());

        controller.enter_combat(&mut player, "scripted duel");

        assert!(player.engaged());
        assert_eq!(player.equip_calls, 0);
        assert_eq!(player.equipped, Some("torch".into()));
    }

    #[test]
    fn test_exit_combat_keeps_weapon() {
        let controller = EngagementController::new();
        let mut actor = StubActor::npc().engaged_with("sword_iron");

        assert_eq!(controller.exit_combat(&mut actor), EngagementTransition::Exited);
        assert!(!actor.engaged());
        assert_eq!(actor.equipped, Some("sword_iron".into()));

        // Уже не в бою — no-op
        assert_eq!(controller.exit_combat(&mut actor), EngagementTransition::Unchanged);
    }

    #[test]
    fn test_mixed_population_scenario() {
        let mut actors = vec![
            StubActor::npc().with_health(50).intent("attack"),
            StubActor::player().intent("attack"),
            StubActor::npc().with_health(0).engaged_with("spear"),
        ];

        sweep(&mut actors);

        assert!(actors[0].engaged());
        assert_eq!(actors[0].equip_calls, 1);

        assert!(!actors[1].engaged());
        assert_eq!(actors[1].equip_calls, 0);

        assert!(actors[2].engaged());
        assert_eq!(actors[2].equipped, Some("spear".into()));
    }

    #[test]
    fn test_processing_order_not_observable() {
        let population = vec![
            StubActor::npc().intent("attack"),
            StubActor::npc().engaged_with("axe").intent("follow"),
            StubActor::npc().intent("flee"),
            StubActor::player().intent("flee"),
        ];

        let mut forward = population.clone();
        sweep(&mut forward);

        let mut reversed: Vec<_> = population.into_iter().rev().collect();
        sweep(&mut reversed);
        reversed.reverse();

        for (a, b) in forward.iter().zip(&reversed) {
            assert_eq!(a.combat_mode, b.combat_mode);
            assert_eq!(a.equipped, b.equipped);
            assert_eq!(a.equip_calls, b.equip_calls);
        }
    }

    #[test]
    fn test_transition_is_change() {
        assert!(EngagementTransition::Entered.is_change());
        assert!(EngagementTransition::Exited.is_change());
        assert!(!EngagementTransition::Unchanged.is_change());
        assert!(!EngagementTransition::Skipped(SkipReason::Dead).is_change());
    }
}
