//! Drives a whole game with the bot and collects counters.

use super::bot::{Bot, BotMove};
use super::config::SimConfig;
use super::fov::TorchFov;
use super::report::SimReport;
use crate::core::constants::TORCH_RADIUS;
use crate::core::error::ConfigError;
use crate::core::world::World;
use crate::definitions::DefinitionTables;
use crate::dungeon::GenerationParams;
use crate::entity::EntityId;
use crate::game::{end_turn, new_game, PlayerAction};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A finished run: the counters and the world as it was left.
#[derive(Debug, Clone)]
pub struct SimRun {
    pub report: SimReport,
    pub world: World,
}

/// Runs one seeded game with the built-in definition tables.
pub fn run_simulation(config: &SimConfig) -> Result<SimRun, ConfigError> {
    let defs = DefinitionTables::builtin()?;
    Ok(run_with(config, &defs, &GenerationParams::default()))
}

/// Runs one seeded game. Identical inputs give identical runs.
pub fn run_with(config: &SimConfig, defs: &DefinitionTables, params: &GenerationParams) -> SimRun {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut world = new_game(&config.name, config.race, config.title, defs, params, &mut rng);
    let mut fov = TorchFov::new(TORCH_RADIUS);
    let mut bot = Bot::new();
    let mut stats = SimStats::default();

    info!(
        "simulating seed {} for {} turns as {} {}",
        config.seed,
        config.turns,
        config.race.name(),
        config.title.name()
    );

    fov.compute(&mut world);
    while world.is_playing() && stats.turns < config.turns && stats.steps < config.max_steps() {
        stats.steps += 1;

        let log_before: Vec<String> = if config.verbose {
            world.log.lines().map(|line| line.text.clone()).collect()
        } else {
            Vec::new()
        };
        let alive_before = living_monsters(&world);
        let level_before = world.dungeon_level;
        let (action, bot_move) = bot.act(&mut world, &fov, defs, params, &mut rng);
        fov.compute(&mut world);
        end_turn(&mut world, action, &fov, &mut bot, &mut rng);

        stats.record(bot_move, action);
        if world.dungeon_level == level_before {
            stats.kills += alive_before
                .iter()
                .filter(|&&id| world.entities.exists(id) && world.entities.fighter(id).is_none())
                .count() as u32;
        }

        if config.verbose {
            let log_after: Vec<String> = world.log.lines().map(|line| line.text.clone()).collect();
            for line in new_lines(&log_before, &log_after) {
                println!("{}", line);
            }
        }
    }

    debug!("run finished after {} steps", stats.steps);
    let report = stats.into_report(config, &world, bot.level_ups());
    SimRun { report, world }
}

/// Lines of `after` not already shown in `before`. The log is bounded, so
/// the overlap is the longest suffix of `before` that prefixes `after`.
fn new_lines<'a>(before: &[String], after: &'a [String]) -> &'a [String] {
    let longest = before.len().min(after.len());
    let overlap = (0..=longest)
        .rev()
        .find(|&k| before[before.len() - k..] == after[..k])
        .unwrap_or(0);
    &after[overlap..]
}

fn living_monsters(world: &World) -> Vec<EntityId> {
    world
        .entities
        .on_map()
        .iter()
        .copied()
        .filter(|&id| !world.is_player(id) && world.entities.fighter(id).is_some())
        .collect()
}

#[derive(Debug, Default)]
struct SimStats {
    turns: u32,
    steps: u64,
    kills: u32,
    attacks: u32,
    items_picked_up: u32,
    items_used: u32,
    descents: u32,
}

impl SimStats {
    fn record(&mut self, bot_move: BotMove, action: PlayerAction) {
        if action == PlayerAction::TookTurn {
            self.turns += 1;
        }
        match bot_move {
            BotMove::Attacked => self.attacks += 1,
            BotMove::PickedUp => self.items_picked_up += 1,
            BotMove::UsedItem(_) => self.items_used += 1,
            BotMove::Descended => self.descents += 1,
            BotMove::Stepped | BotMove::Rested | BotMove::Waited => {}
        }
    }

    fn into_report(self, config: &SimConfig, world: &World, level_ups: usize) -> SimReport {
        let player_level = world
            .entities
            .player_stats(world.player)
            .map_or(1, |stats| stats.level);
        let (final_hp, xp) = world.player_fighter().map_or((0, 0), |f| (f.hp, f.xp));
        let tiles_explored = (0..world.map.height())
            .flat_map(|y| (0..world.map.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| world.map.is_explored(x, y))
            .count();

        SimReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            seed: config.seed,
            race: config.race.name().to_string(),
            title: config.title.name().to_string(),
            turns_requested: config.turns,
            turns_taken: self.turns,
            steps: self.steps,
            survived: world.is_playing(),
            player_level,
            dungeon_level: world.dungeon_level,
            final_hp,
            xp,
            kills: self.kills,
            attacks: self.attacks,
            items_picked_up: self.items_picked_up,
            items_used: self.items_used,
            descents: self.descents,
            level_ups,
            tiles_explored,
            last_message: world.log.last().map(|line| line.text.clone()),
        }
    }
}
