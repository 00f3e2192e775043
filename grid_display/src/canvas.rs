// canvas.rs - Pixel surface that draws grid cells as filled rectangles

use egui::{Color32, ColorImage};
use life::{CellColor, LifeError, View};

/// Maps grid cells onto a pixel surface.
///
/// The grid holds as many whole cells as fit in `width × height`; the
/// leftover pixels are split as padding, with the odd pixel going to the
/// left (top) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    width: usize,
    height: usize,
    cell_width: usize,
    cell_height: usize,
    x_offset: usize,
    y_offset: usize,
    left_padding: usize,
    top_padding: usize,
    columns: usize,
    rows: usize,
}

impl GridLayout {
    pub fn new(
        width: usize,
        height: usize,
        cell_width: usize,
        cell_height: usize,
        x_offset: usize,
        y_offset: usize,
    ) -> life::Result<Self> {
        if cell_width == 0 || cell_height == 0 {
            return Err(LifeError::InvalidDimensions {
                cols: cell_width,
                rows: cell_height,
            });
        }

        let horizontal = width % cell_width;
        let vertical = height % cell_height;

        Ok(Self {
            width,
            height,
            cell_width,
            cell_height,
            x_offset,
            y_offset,
            left_padding: horizontal.div_ceil(2),
            top_padding: vertical.div_ceil(2),
            columns: width / cell_width,
            rows: height / cell_height,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> (usize, usize) {
        (self.cell_width, self.cell_height)
    }

    /// Pixel size of the whole surface, offsets included.
    pub fn surface_size(&self) -> (usize, usize) {
        (self.x_offset + self.width, self.y_offset + self.height)
    }

    /// Top-left pixel of the cell at `(col, row)`.
    pub fn cell_origin(&self, col: usize, row: usize) -> life::Result<(usize, usize)> {
        if col >= self.columns || row >= self.rows {
            return Err(LifeError::OutOfRange {
                x: col,
                y: row,
                cols: self.columns,
                rows: self.rows,
            });
        }
        Ok((
            col * self.cell_width + self.x_offset + self.left_padding,
            row * self.cell_height + self.y_offset + self.top_padding,
        ))
    }
}

/// A [`View`] backed by an RGBA image the size of the layout's surface.
pub struct CanvasView {
    layout: GridLayout,
    image: ColorImage,
    alive_color: Color32,
    dead_color: Color32,
    dirty: bool,
}

impl CanvasView {
    pub fn new(layout: GridLayout, alive_color: Color32, dead_color: Color32) -> Self {
        let (width, height) = layout.surface_size();
        Self {
            layout,
            image: ColorImage::new([width, height], dead_color),
            alive_color,
            dead_color,
            dirty: true,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    pub fn color(&self, color: CellColor) -> Color32 {
        match color {
            CellColor::Alive => self.alive_color,
            CellColor::Dead => self.dead_color,
        }
    }

    /// Whether anything was drawn since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl View for CanvasView {
    fn columns(&self) -> usize {
        self.layout.columns()
    }

    fn rows(&self) -> usize {
        self.layout.rows()
    }

    fn fill_cell(&mut self, col: usize, row: usize, color: CellColor) {
        let (x0, y0) = match self.layout.cell_origin(col, row) {
            Ok(origin) => origin,
            Err(err) => {
                log::warn!("fill_cell: {err}");
                return;
            }
        };
        let fill = self.color(color);
        let (cell_width, cell_height) = self.layout.cell_size();
        let stride = self.image.size[0];

        for y in y0..y0 + cell_height {
            let start = y * stride + x0;
            self.image.pixels[start..start + cell_width].fill(fill);
        }
        self.dirty = true;
    }
}
