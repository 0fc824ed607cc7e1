use pixelgrid_common::{Controller, PixelGrid, grid::BASE_CELL_SIZE};
use std::fmt::Write;

const UNSET_GLYPH: char = '·';
const PAINTED_GLYPH: char = '#';

/// Terminal columns per cell, two per unit of zoom so cells look square
fn cell_width(grid: &PixelGrid) -> usize {
    let zoom = grid.layout().cell_size / BASE_CELL_SIZE;
    ((zoom * 2.0).round() as usize).max(1)
}

pub fn render(controller: &Controller, plain: bool) -> String {
    let grid = controller.grid();
    let layout = grid.layout();
    let width = cell_width(grid);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}x{} zoom {:.1} ({}) color {}{}",
        layout.columns,
        layout.rows,
        grid.zoom().ratio(),
        layout.template_columns(),
        controller.active_color(),
        if controller.is_picking() { " [pick]" } else { "" },
    );

    for y_lane in grid.rows() {
        for cell in y_lane {
            match cell {
                Some(color) if !plain => {
                    let (r, g, b) = (color.r, color.g, color.b);
                    let _ = write!(out, "\x1b[48;2;{r};{g};{b}m{:width$}\x1b[0m", "");
                }
                Some(_) => out.extend(std::iter::repeat_n(PAINTED_GLYPH, width)),
                None => out.extend(std::iter::repeat_n(UNSET_GLYPH, width)),
            }
        }
        out.push('\n');
    }

    out
}
