//! Starting a game, descending, and closing out a turn.

use super::actions::on_stairs;
use super::types::PlayerAction;
use crate::ai::take_monster_turns;
use crate::character::{new_player, Race, Title};
use crate::combat::heal;
use crate::core::color::Color;
use crate::core::messages::MessageLog;
use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::{GameState, World};
use crate::definitions::DefinitionTables;
use crate::dungeon::{make_map, GenerationParams};
use crate::progression::{check_level_up, DerivedAttributes, DerivedStats};
use log::info;
use rand::Rng;

/// Creates the player and the first level, and greets them.
pub fn new_game(
    name: &str,
    race: Race,
    title: Title,
    defs: &DefinitionTables,
    params: &GenerationParams,
    rng: &mut impl Rng,
) -> World {
    let mut world = new_player(name, race, title);
    world.dungeon_level = 1;
    make_map(&mut world, defs, params, rng);
    world.state = GameState::Playing;
    world.log = MessageLog::new();

    world
        .log
        .message(&format!("Welcome {}!", name), Color::GREEN, true);
    let has_air_supply = DerivedAttributes::calculate(&world, world.player)
        .is_some_and(|attrs| attrs.max_oxygen != 0);
    if has_air_supply {
        world.log.message(
            "You enable your internal air supply and descend into the hollowed asteroid...",
            Color::YELLOW,
            true,
        );
    } else {
        world
            .log
            .message("You descend into the hollowed asteroid...", Color::YELLOW, true);
    }
    info!(
        "new game: {} the {} {}",
        name,
        race.name(),
        title.name()
    );
    world
}

/// Rests, then generates the next level. Inventory comes along; everything
/// else on the map is left behind.
pub fn next_level(
    world: &mut World,
    defs: &DefinitionTables,
    params: &GenerationParams,
    rng: &mut impl Rng,
) {
    world.log.message(
        "You take a moment to rest, and recover your strength.",
        Color::LIGHT_VIOLET,
        true,
    );
    let player = world.player;
    if let Some(stats) = DerivedStats::calculate(world, player) {
        heal(world, player, stats.max_hp / 2);
    }

    world.dungeon_level += 1;
    world.log.message(
        "After a rare moment of peace, you descend deeper into the heart of the dungeon...",
        Color::RED,
        true,
    );
    make_map(world, defs, params, rng);
    info!("descended to dungeon level {}", world.dungeon_level);
}

/// Takes the stairs if the player is standing on them. Never costs a turn.
pub fn descend(
    world: &mut World,
    defs: &DefinitionTables,
    params: &GenerationParams,
    rng: &mut impl Rng,
) -> PlayerAction {
    if on_stairs(world) {
        next_level(world, defs, params, rng);
    }
    PlayerAction::DidntTakeTurn
}

/// Lets monsters act after a turn-taking player action, then checks for a
/// level-up.
pub fn end_turn(
    world: &mut World,
    action: PlayerAction,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) {
    if world.is_playing() && action == PlayerAction::TookTurn {
        take_monster_turns(world, visibility, rng);
    }
    if world.is_playing() {
        check_level_up(world, input);
    }
}
