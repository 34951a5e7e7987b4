// Map
pub const MAP_WIDTH: i32 = 160;
pub const MAP_HEIGHT: i32 = 80;

// Dungeon generator
pub const ROOM_MIN_SIZE: i32 = 6;
pub const ROOM_MAX_SIZE: i32 = 10;
pub const MAX_ROOMS: usize = 50;

// Level-scaled per-room content budgets: (value, first dungeon level)
pub const MONSTERS_PER_ROOM: &[(i32, u32)] = &[(1, 1), (2, 4), (3, 6)];
pub const ITEMS_PER_ROOM: &[(i32, u32)] = &[(1, 1), (2, 4)];

// Message log
pub const SCREEN_HEIGHT: usize = 60;
pub const LOG_WIDTH: usize = 160;
pub const LOG_HEIGHT: usize = 50;
pub const LOG_Y: usize = SCREEN_HEIGHT - LOG_HEIGHT;
pub const MSG_WIDTH: usize = LOG_WIDTH - 1;
pub const MSG_HEIGHT: usize = LOG_Y - 2;

// Abilities
pub const HEAL_AMOUNT: i32 = 40;
pub const OXYGEN_REFILL_AMOUNT: i32 = 300;
pub const LIGHTNING_DAMAGE: i32 = 40;
pub const LIGHTNING_RANGE: f64 = 5.0;
pub const CONFUSE_RANGE: f64 = 8.0;
pub const CONFUSE_NUM_TURNS: u32 = 10;
pub const FIREBALL_RADIUS: f64 = 3.0;
pub const FIREBALL_DAMAGE: i32 = 25;

// Experience and level-ups
pub const LEVEL_UP_BASE: i32 = 200;
pub const LEVEL_UP_FACTOR: i32 = 150;

// Ticks
pub const AUTOHEAL_INTERVAL_TICKS: u64 = 20;
pub const SUFFOCATION_DAMAGE: i32 = 5;
pub const BREATH_PER_MOVE: i32 = 1;
pub const BREATH_PER_ATTACK: i32 = 2;

// Player
pub const INVENTORY_CAPACITY: usize = 26;
pub const PLAYER_BASE_HP: i32 = 15;
pub const PLAYER_BASE_DEFENSE: i32 = 0;
pub const PLAYER_BASE_POWER: i32 = 2;
pub const PLAYER_BASE_ATTRIBUTE: i32 = 8;
pub const PLAYER_BASE_OXYGEN: i32 = 1000;

// Monster definition defaults
pub const DEFAULT_SPECIES: &str = "Humanoid";
pub const DEFAULT_EVADE: i32 = 10;
pub const DEFAULT_BLOCK: i32 = 0;
pub const DEFAULT_ACCURACY: i32 = 12;

// Field of view stand-in used by the simulator
pub const TORCH_RADIUS: i32 = 8;

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x484F_4C4C_4F57_0001;
