// config.rs - Command-line configuration

use clap::Parser;
use egui::Color32;
use life::{LifeLike, Pattern, patterns};

use crate::canvas::GridLayout;

#[derive(Parser, Debug, Clone)]
#[command(name = "grid_display")]
#[command(version = "0.1.0")]
#[command(about = "Conway's Game of Life on a wrap-around grid", long_about = None)]
pub struct Config {
    /// Number of grid columns
    #[arg(long, default_value = "50")]
    pub columns: usize,

    /// Number of grid rows
    #[arg(long, default_value = "50")]
    pub rows: usize,

    /// Cell edge length in pixels
    #[arg(long, default_value = "15")]
    pub cell_size: usize,

    /// Drawing surface width in pixels (overrides --columns)
    #[arg(long)]
    pub width: Option<usize>,

    /// Drawing surface height in pixels (overrides --rows)
    #[arg(long)]
    pub height: Option<usize>,

    /// Horizontal offset of the grid on the surface
    #[arg(long, default_value = "0")]
    pub x_offset: usize,

    /// Vertical offset of the grid on the surface
    #[arg(long, default_value = "0")]
    pub y_offset: usize,

    /// Transition rule in B/S notation
    #[arg(long, default_value = "B3/S23")]
    pub rule: LifeLike,

    /// Named starting pattern; random cells when omitted
    #[arg(short, long, value_parser = parse_pattern)]
    pub pattern: Option<&'static Pattern>,

    /// Probability of a cell starting alive when seeding randomly
    #[arg(short, long, default_value = "0.33", value_parser = parse_density)]
    pub density: f64,

    /// Milliseconds between generations
    #[arg(short, long, default_value = "200")]
    pub interval_ms: u64,

    /// Live cell color
    #[arg(long, default_value = "#000000", value_parser = parse_color)]
    pub alive_color: Color32,

    /// Dead cell color
    #[arg(long, default_value = "#ffffff", value_parser = parse_color)]
    pub dead_color: Color32,

    /// Random seed for reproducible starts
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn layout(&self) -> life::Result<GridLayout> {
        let width = self.width.unwrap_or(self.columns * self.cell_size);
        let height = self.height.unwrap_or(self.rows * self.cell_size);
        GridLayout::new(
            width,
            height,
            self.cell_size,
            self.cell_size,
            self.x_offset,
            self.y_offset,
        )
    }
}

fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
    patterns::find(name).ok_or_else(|| {
        let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
        format!("unknown pattern {name:?} (known: {})", known.join(", "))
    })
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{s:?}: {e}"))?;
    if !(0.0..=1.0).contains(&density) {
        return Err(format!("density must be between 0 and 1, got {s}"));
    }
    Ok(density)
}

/// Parses `#rrggbb` (the `#` is optional).
fn parse_color(s: &str) -> Result<Color32, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("expected #rrggbb, got {s:?}"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("{s:?}: {e}"))
    };
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
