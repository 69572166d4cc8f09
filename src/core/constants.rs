// Board generation
pub const DEFAULT_BOARD_SIZE: usize = 20;
pub const PROPERTY_PRICE_MIN: f64 = 100.0;
pub const PROPERTY_PRICE_MAX: f64 = 150.0;
pub const PROPERTY_RENT_MIN: f64 = 10.0;
pub const PROPERTY_RENT_MAX: f64 = 60.0;

// Dice
pub const DIE_MIN: usize = 1;
pub const DIE_MAX: usize = 6;

// Player economy
pub const DEFAULT_BALANCE: f64 = 300.0;
pub const LAP_BONUS: f64 = 100.0;

// Purchase policy thresholds
pub const PICKY_MIN_RENT: f64 = 50.0;
pub const WARY_MIN_RESERVE: f64 = 80.0;
pub const RANDOM_BUY_PROBABILITY: f64 = 0.5;

// Match and simulation limits
pub const DEFAULT_MAX_ROUNDS: u32 = 1000;
pub const DEFAULT_NUM_RUNS: u32 = 300;
pub const DEFAULT_LOG_LEVEL: &str = "ERROR";
