pub struct Config;

impl Config {
    /// Character marking a live cell in a configuration file.
    pub const LIVE_MARKER: char = '1';
    /// Character written for a dead cell; any non-live character reads as dead.
    pub const DEAD_MARKER: char = '0';

    pub const DEFAULT_FILL_RATE: f64 = 0.5;
    pub const DEFAULT_SIDE: usize = 1000;
    pub const DEFAULT_STEPS: u64 = 100;
    pub const DEFAULT_WORKERS: usize = 4;
}
