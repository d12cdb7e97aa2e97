// main.rs - Windowed driver for the life grid core

use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;
use life::{CellularAutomaton, Config, Grid};

mod ui; // rendering and input

/// Keyboard speed adjustment step.
const TICK_STEP: Duration = Duration::from_millis(100);
/// Fastest allowed tick.
const MIN_TICK: Duration = Duration::from_millis(10);
/// Slowest allowed tick.
const MAX_TICK: Duration = Duration::from_millis(2000);

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).is_some_and(|arg| arg == "--example") {
        print_example_config();
        return Ok(());
    }

    let config = match args.get(1) {
        Some(path) => Config::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config {path}: {e}");
            std::process::exit(1);
        }),
        None => Config::default(),
    };
    log::info!(
        "starting {n}x{n} grid (p={p}, random={random}, lifetime={lifetime}, tick={tick} ms)",
        n = config.dimension,
        p = config.probability,
        random = config.use_random,
        lifetime = config.lifetime,
        tick = config.tick_ms,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([830.0, 980.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(config))),
    )
}

fn print_example_config() {
    println!(
        "{}",
        serde_json::to_string_pretty(&Config::default()).unwrap()
    );
}

/// Driver state: owns the grid, the remaining-lifetime counter and the
/// pacing clock. The grid itself never sees any of this.
pub struct LifeApp {
    config: Config,
    grid: Grid,
    lifetime: u32,
    paused: bool,
    generation: u32,
    last_update: Instant,
    update_interval: Duration,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
    show_debug: bool,
}

impl LifeApp {
    pub fn new(config: Config) -> Self {
        let mut grid = Grid::seed(config.dimension, config.probability, config.use_random);
        grid.count_neighbors();
        Self {
            lifetime: config.lifetime,
            paused: config.start_paused,
            generation: 0,
            last_update: Instant::now(),
            update_interval: config.tick_interval(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            show_debug: config.debug,
            grid,
            config,
        }
    }

    /// Reseed per the configuration, restoring the configured pause state,
    /// tick interval and lifetime counter.
    fn reseed(&mut self) {
        self.grid = Grid::seed(
            self.config.dimension,
            self.config.probability,
            self.config.use_random,
        );
        self.grid.count_neighbors();
        self.lifetime = self.config.lifetime;
        self.generation = 0;
        self.paused = self.config.start_paused;
        self.update_interval = self.config.tick_interval();
        log::info!("reseeded: {} live cells", self.grid.live_count());
    }

    /// Kill the whole board and restart the lifetime counter.
    fn clear_board(&mut self) {
        self.grid.clear();
        self.lifetime = self.config.lifetime;
        self.generation = 0;
    }

    /// One generation: transition on the cached counts, recount, then burn
    /// one unit of lifetime.
    fn step_generation(&mut self) {
        self.grid.advance();
        self.grid.count_neighbors();
        self.generation += 1;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    /// Auto-reseed once the lifetime counter reaches zero, paused or not.
    fn check_lifetime(&mut self) {
        if self.lifetime == 0 {
            log::info!("lifetime exhausted after {} generations", self.generation);
            self.reseed();
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            self.last_update = Instant::now();
        }
        log::debug!("paused: {}", self.paused);
    }

    /// Flip the cell under a click. The grid rejects out-of-range
    /// coordinates, so a click on the canvas fringe is a no-op.
    fn toggle_at(&mut self, row: usize, col: usize) {
        if self.grid.toggle_cell(row, col) {
            self.grid.count_neighbors();
            log::debug!("toggled cell ({row}, {col})");
        }
    }

    fn slow_down(&mut self) {
        self.update_interval = (self.update_interval + TICK_STEP).min(MAX_TICK);
    }

    fn speed_up(&mut self) {
        self.update_interval = self
            .update_interval
            .saturating_sub(TICK_STEP)
            .max(MIN_TICK);
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = life::patterns::PATTERNS.get(self.selected_pattern) {
            life::patterns::apply_pattern(&mut self.grid, pattern);
            self.grid.count_neighbors();
            self.lifetime = self.config.lifetime;
            self.generation = 0;
            self.paused = true;
        }
    }
}
