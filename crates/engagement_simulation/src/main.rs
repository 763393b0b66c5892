//! Headless engagement симуляция
//!
//! Спавнит смешанную популяцию (игрок + NPC), случайно меняет intent'ы
//! через seeded RNG и печатает сколько акторов в combat mode.

use bevy::prelude::*;
use rand::Rng;
use engagement_simulation::*;

const NPC_COUNT: usize = 12;
const TICKS: usize = 1000;

/// Labels, которые "decision logic" демо раздаёт NPC
const DEMO_ACTIONS: [&str; 6] = ["attack", "flee", "follow", "goto", "stay_near", "idle"];

/// Stand-in для внешнего AI: иногда меняет intent NPC, иногда ранит
fn drive_demo_intents(
    mut commands: Commands,
    mut rng: ResMut<DeterministicRng>,
    mut npcs: Query<(Entity, &mut Health), (With<Actor>, Without<Player>)>,
) {
    for (entity, mut health) in npcs.iter_mut() {
        if rng.rng.gen_bool(0.05) {
            let label = DEMO_ACTIONS[rng.rng.gen_range(0..DEMO_ACTIONS.len())];
            commands
                .entity(entity)
                .insert(Intent::new(IntentAction::from_label(label)));
        } else if rng.rng.gen_bool(0.02) {
            commands.entity(entity).remove::<Intent>();
        }

        if rng.rng.gen_bool(0.002) {
            health.take_damage(40);
        }
    }
}

fn spawn_population(world: &mut World) -> Entity {
    let player = world
        .spawn((
            Actor::named("player"),
            Player,
            Arsenal::empty().with("sword_iron", 25),
            EquippedWeapon::holding("sword_iron"),
        ))
        .id();

    for i in 0..NPC_COUNT {
        let arsenal = Arsenal::empty()
            .with("dagger_rusty", 5 + i as u32)
            .with("club", 10)
            .with("bow_hunting", 8 + 2 * i as u32);
        world.spawn((Actor::named(format!("villager_{}", i)), arsenal));
    }

    player
}

fn main() {
    let seed = 42;
    println!("Starting headless engagement simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(EngagementConfig {
            log_transitions: false,
        })
        .add_systems(FixedUpdate, drive_demo_intents.before(engagement::update_npc_engagement));

    let player = spawn_population(app.world_mut());

    for tick in 0..TICKS {
        if tick == TICKS / 2 {
            app.world_mut()
                .send_event(EnterCombatRequest::new(player, "ambush"));
        }

        app.update();

        if tick % 100 == 0 {
            let world = app.world_mut();
            let engaged = world
                .query::<&CombatMode>()
                .iter(world)
                .filter(|mode| mode.is_engaged())
                .count();
            let armed = world
                .query::<&EquippedWeapon>()
                .iter(world)
                .filter(|slot| !slot.is_empty())
                .count();
            println!("Tick {}: {} engaged, {} armed", tick, engaged, armed);
        }
    }

    println!(
        "Simulation complete! Player in combat: {}",
        is_entity_in_combat(app.world(), player)
    );
}
