//! The cell matrix and the layout it is displayed with

use crate::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_SIDE,
    color::{Cell, Color},
    error::{FormatError, ValidationError},
    project::ProjectRecord,
    zoom::Zoom,
};

/// Side of a cell at zoom 1.0, in `CELL_SIZE_UNIT`
pub const BASE_CELL_SIZE: f32 = 5.0;
pub const CELL_SIZE_UNIT: &str = "vw";

/// Row-major grid of cells. `cells.len() == width * height` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    zoom: Zoom,
    // layout: Y(X(cell)), flattened
    cells: Vec<Cell>,
}

/// How the grid is laid out on screen. Only depends on the shape and the zoom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
}

impl GridLayout {
    /// Column template for a CSS grid container, e.g. `repeat(10, 5vw)`
    pub fn template_columns(&self) -> String {
        format!("repeat({}, {}{CELL_SIZE_UNIT})", self.columns, self.cell_size)
    }
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> Result<usize, ValidationError> {
    if width == 0 || height == 0 {
        return Err(ValidationError::ZeroDimension { width, height });
    }
    if width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
        return Err(ValidationError::TooLarge {
            width,
            height,
            max: MAX_GRID_SIDE,
        });
    }

    Ok(width as usize * height as usize)
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, zoom: Zoom) -> Result<Self, ValidationError> {
        let len = validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            zoom,
            cells: vec![None; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Throw away every cell and start over with a blank grid of the new shape.
    ///
    /// The zoom is only replaced when one is given. Nothing changes if the
    /// dimensions are rejected.
    pub fn apply_dimensions(
        &mut self,
        width: u32,
        height: u32,
        zoom: Option<Zoom>,
    ) -> Result<(), ValidationError> {
        let len = validate_dimensions(width, height)?;

        self.width = width;
        self.height = height;
        if let Some(zoom) = zoom {
            self.zoom = zoom;
        }

        self.cells.clear();
        self.cells.resize(len, None);

        debug!(width, height, zoom = self.zoom.ratio(), "applied grid dimensions");

        Ok(())
    }

    pub fn index_of(&self, x: u32, y: u32) -> Result<usize, ValidationError> {
        if x >= self.width || y >= self.height {
            return Err(ValidationError::OutOfGrid {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y as usize * self.width as usize + x as usize)
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell, ValidationError> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(ValidationError::OutOfBounds { index, len })
    }

    pub fn paint(&mut self, index: usize, color: Color) -> Result<(), ValidationError> {
        *self.cell_mut(index)? = Some(color);
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<(), ValidationError> {
        *self.cell_mut(index)? = None;
        Ok(())
    }

    /// Color of the cell at `index`. Out of range reads as unset.
    pub fn color_at(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Returns whether the zoom changed
    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(Zoom::step_in)
    }

    /// Returns whether the zoom changed
    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(Zoom::step_out)
    }

    fn step_zoom(&mut self, step: impl FnOnce(Zoom) -> Option<Zoom>) -> bool {
        match step(self.zoom) {
            Some(zoom) => {
                self.zoom = zoom;
                true
            }
            None => false,
        }
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout {
            columns: self.width,
            rows: self.height,
            cell_size: BASE_CELL_SIZE * self.zoom.ratio(),
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width as usize)
    }

    pub fn to_project_record(&self) -> ProjectRecord {
        ProjectRecord {
            grid_width: self.width,
            grid_height: self.height,
            pixel_color_list: self.cells.clone(),
        }
    }

    /// Replace shape and content with the record's.
    ///
    /// The record is checked in full before anything is touched, so a
    /// rejected record leaves the grid as it was. The zoom is kept.
    pub fn load_project_record(&mut self, record: &ProjectRecord) -> Result<(), FormatError> {
        let expected = validate_dimensions(record.grid_width, record.grid_height)?;
        let found = record.pixel_color_list.len();
        if found != expected {
            return Err(FormatError::CellCount { expected, found });
        }

        self.apply_dimensions(record.grid_width, record.grid_height, None)?;
        self.cells.copy_from_slice(&record.pixel_color_list);

        Ok(())
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            zoom: Zoom::BASE,
            cells: vec![None; DEFAULT_WIDTH as usize * DEFAULT_HEIGHT as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::new(width, height, Zoom::BASE).unwrap()
    }

    #[test]
    fn new_grid_is_blank() {
        let grid = grid(3, 4);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.cells().iter().all(Option::is_none));
    }

    #[test]
    fn rejects_zero_dimensions_without_mutating() {
        let mut grid = grid(2, 2);
        grid.paint(1, RED).unwrap();

        let err = grid.apply_dimensions(0, 5, None).unwrap_err();
        assert_eq!(err, ValidationError::ZeroDimension { width: 0, height: 5 });
        assert!(grid.apply_dimensions(MAX_GRID_SIDE + 1, 1, None).is_err());

        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.color_at(1), Some(RED));
    }

    #[test]
    fn resize_is_destructive_and_keeps_zoom() {
        let mut grid = grid(2, 2);
        grid.zoom_in();
        grid.paint(0, RED).unwrap();

        grid.apply_dimensions(3, 1, None).unwrap();
        assert_eq!(grid.cells(), &[None, None, None]);
        assert_eq!(grid.zoom().ratio(), 1.1);

        grid.apply_dimensions(3, 1, Some(Zoom::MIN)).unwrap();
        assert_eq!(grid.zoom(), Zoom::MIN);
    }

    #[test]
    fn paint_and_clear_check_bounds() {
        let mut grid = grid(2, 2);
        assert_eq!(
            grid.paint(4, RED),
            Err(ValidationError::OutOfBounds { index: 4, len: 4 })
        );
        assert!(grid.clear(10).is_err());
        assert_eq!(grid.color_at(10), None);
    }

    #[test]
    fn index_is_row_major() {
        let grid = grid(4, 3);
        assert_eq!(grid.index_of(0, 0), Ok(0));
        assert_eq!(grid.index_of(3, 0), Ok(3));
        assert_eq!(grid.index_of(1, 2), Ok(9));
        assert!(grid.index_of(4, 0).is_err());
        assert!(grid.index_of(0, 3).is_err());
    }

    #[test]
    fn layout_follows_zoom() {
        let mut grid = grid(10, 4);
        assert_eq!(grid.layout().template_columns(), "repeat(10, 5vw)");

        grid.zoom_out();
        grid.zoom_out();
        let layout = grid.layout();
        assert_eq!((layout.columns, layout.rows), (10, 4));
        assert!((layout.cell_size - 4.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_reports_bounds() {
        let mut grid = PixelGrid::new(1, 1, Zoom::MAX).unwrap();
        assert!(!grid.zoom_in());
        assert!(grid.zoom_out());
        assert!(grid.zoom_in());
        assert_eq!(grid.zoom(), Zoom::MAX);
    }

    #[test]
    fn record_snapshot() {
        let mut grid = grid(2, 2);
        grid.paint(0, RED).unwrap();

        let record = grid.to_project_record();
        assert_eq!(record.grid_width, 2);
        assert_eq!(record.grid_height, 2);
        assert_eq!(record.pixel_color_list, vec![Some(RED), None, None, None]);
    }

    #[test]
    fn short_record_leaves_grid_untouched() {
        let mut grid = grid(2, 2);
        grid.paint(3, RED).unwrap();
        let before = grid.clone();

        let record = ProjectRecord {
            grid_width: 2,
            grid_height: 2,
            pixel_color_list: vec![None; 3],
        };
        let err = grid.load_project_record(&record).unwrap_err();
        assert!(matches!(err, FormatError::CellCount { expected: 4, found: 3 }));
        assert_eq!(grid, before);
    }

    #[test]
    fn record_with_zero_width_is_a_format_error() {
        let mut grid = grid(2, 2);
        let record = ProjectRecord {
            grid_width: 0,
            grid_height: 2,
            pixel_color_list: Vec::new(),
        };
        assert!(matches!(
            grid.load_project_record(&record),
            Err(FormatError::Dimensions(ValidationError::ZeroDimension { .. }))
        ));
    }

    #[test]
    fn load_replaces_shape_and_content() {
        let mut source = grid(3, 2);
        source.paint(4, RED).unwrap();

        let mut target = grid(5, 5);
        target.load_project_record(&source.to_project_record()).unwrap();
        assert_eq!((target.width(), target.height()), (3, 2));
        assert_eq!(target.cells(), source.cells());
    }
}
