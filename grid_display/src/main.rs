// main.rs - Conway's Game of Life drawn onto an egui canvas

use clap::Parser;
use eframe::egui;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

mod canvas;
mod config;
mod ui;

use canvas::CanvasView;
use config::Config;
use life::{GameOfLife, LifeLike};

/// Height reserved above the canvas for the heading and statistics.
const HEADER_HEIGHT: f32 = 80.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::parse();
    let app = LifeApp::new(&config).inspect_err(|err| log::error!("{err}"))?;

    let (width, height) = app.life.view().layout().surface_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32 + 20.0, height as f32 + HEADER_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Window state: the automaton (which owns the canvas) and its texture.
pub struct LifeApp {
    pub life: GameOfLife<CanvasView, LifeLike>,
    pub texture: Option<egui::TextureHandle>,
    pub last_update: Instant,
    pub update_interval: Duration,
}

impl LifeApp {
    pub fn new(config: &Config) -> life::Result<Self> {
        let layout = config.layout()?;
        let view = CanvasView::new(layout, config.alive_color, config.dead_color);
        let mut life = GameOfLife::new(view, config.rule)?;

        info!(
            "{}x{} grid, {}x{} px cells, rule {}",
            layout.columns(),
            layout.rows(),
            layout.cell_size().0,
            layout.cell_size().1,
            config.rule
        );

        match config.pattern {
            Some(pattern) => {
                info!("seeding pattern {}", pattern.name);
                life.seed_pattern(pattern);
            }
            None => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                info!("seeding randomly at density {}", config.density);
                life.randomize(&mut rng, config.density);
            }
        }

        Ok(Self {
            life,
            texture: None,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(config.interval_ms),
        })
    }
}
