//! UI state and input routing
//!
//! The controller is the single owner of everything the user can change:
//! the grid itself, the active color, the width/height fields, the pick mode
//! and whether the canvas holds unsaved paint. Each input of the front end
//! maps onto one method here.

use crate::{
    color::Color,
    error::{FormatError, ValidationError},
    grid::{self, PixelGrid},
    notice::Notice,
    project::{Download, ProjectRecord},
};
use std::{fs, path::Path};

const RESIZE_TITLE: &str = "Resize drawing";
const RESIZE_MESSAGE: &str = "Resizing the drawing starts a new blank canvas. \
    Unsaved work will be lost. Do you want to continue?";

/// Asks the user to accept or decline a destructive action
pub trait Confirm {
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}

/// What the host should do with its own context menu after a secondary click
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Suppress,
}

#[derive(Debug)]
pub struct Controller {
    grid: PixelGrid,
    color: Color,
    width: u32,
    height: u32,
    picking: bool,
    fresh: bool,
    notices: Vec<Notice>,
}

impl Controller {
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            grid,
            color: Color::BLACK,
            picking: false,
            fresh: true,
            notices: Vec::new(),
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn active_color(&self) -> Color {
        self.color
    }

    /// Values currently shown in the width and height fields
    pub fn pending_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_picking(&self) -> bool {
        self.picking
    }

    /// Whether nothing was painted since the last resize or load
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Hand out the notices raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        warn!(%notice, "showing notice");
        self.notices.push(notice);
    }

    pub fn set_active_color(&mut self, color: Color) {
        debug!(%color, "active color changed");
        self.color = color;
    }

    pub fn set_pending_width(
        &mut self,
        width: u32,
        prompt: &mut impl Confirm,
    ) -> Result<bool, ValidationError> {
        self.width = width;
        self.resize_grid(prompt)
    }

    pub fn set_pending_height(
        &mut self,
        height: u32,
        prompt: &mut impl Confirm,
    ) -> Result<bool, ValidationError> {
        self.height = height;
        self.resize_grid(prompt)
    }

    fn rollback_dimensions(&mut self) {
        self.width = self.grid.width();
        self.height = self.grid.height();
    }

    /// Apply the pending dimensions to the grid.
    ///
    /// Unsaved paint is only thrown away once the prompt accepts. Returns
    /// whether the grid was resized; the pending fields always end up in sync
    /// with the grid.
    pub fn resize_grid(&mut self, prompt: &mut impl Confirm) -> Result<bool, ValidationError> {
        if let Err(err) = grid::validate_dimensions(self.width, self.height) {
            self.rollback_dimensions();
            return Err(err);
        }

        if (self.width, self.height) == (self.grid.width(), self.grid.height()) {
            return Ok(false);
        }

        if !self.fresh && !prompt.confirm(RESIZE_TITLE, RESIZE_MESSAGE) {
            debug!("resize cancelled");
            self.rollback_dimensions();
            return Ok(false);
        }

        self.grid.apply_dimensions(self.width, self.height, None)?;
        self.fresh = true;

        Ok(true)
    }

    pub fn toggle_color_pick(&mut self) {
        if self.picking {
            self.end_color_pick();
        } else {
            self.start_color_pick();
        }
    }

    pub fn start_color_pick(&mut self) {
        self.picking = true;
    }

    pub fn end_color_pick(&mut self) {
        self.picking = false;
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        let len = self.grid.cells().len();
        if index >= len {
            return Err(ValidationError::OutOfBounds { index, len });
        }

        Ok(())
    }

    /// Primary click on a cell: paints it, or samples it while picking
    pub fn click(&mut self, index: usize) -> Result<(), ValidationError> {
        self.check_index(index)?;

        if self.picking {
            self.end_color_pick();
            match self.grid.color_at(index) {
                Some(color) => self.set_active_color(color),
                None => self.notify(Notice::long(
                    "This cell has not been colored yet: action cancelled",
                )),
            }
        } else {
            self.grid.paint(index, self.color)?;
            self.fresh = false;
        }

        Ok(())
    }

    /// Secondary click on a cell: clears it whatever the mode
    pub fn context_menu(&mut self, index: usize) -> Result<MenuAction, ValidationError> {
        self.grid.clear(index)?;
        Ok(MenuAction::Suppress)
    }

    /// Scroll wheel: away from the user zooms out, towards zooms in
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.zoom_out();
        } else if delta_y < 0.0 {
            self.zoom_in();
        }
    }

    pub fn zoom_in(&mut self) {
        if !self.grid.zoom_in() {
            self.notify(Notice::short("Maximum zoom level already reached"));
        }
    }

    pub fn zoom_out(&mut self) {
        if !self.grid.zoom_out() {
            self.notify(Notice::short("Minimum zoom level already reached"));
        }
    }

    pub fn save(&self) -> Result<Download, FormatError> {
        Download::project(&self.grid.to_project_record())
    }

    pub fn export_svg(&self) -> Download {
        Download::svg(self.grid.to_svg())
    }

    /// Replace the drawing with a project record
    pub fn load_record(&mut self, record: &ProjectRecord) -> Result<(), FormatError> {
        self.grid.load_project_record(record)?;
        self.rollback_dimensions();
        self.fresh = true;

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            "project loaded"
        );

        Ok(())
    }

    /// Replace the drawing with the contents of a project file.
    ///
    /// An unreadable file raises a notice and changes nothing. Contents that
    /// don't describe a grid are a `FormatError`.
    pub fn load_file(&mut self, path: &Path) -> Result<(), FormatError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                debug!(?error, path = %path.display(), "failed to read project file");
                self.notify(Notice::short("Could not read the file"));
                return Ok(());
            }
        };

        let record = ProjectRecord::from_json(&text)?;
        self.load_record(&record)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(PixelGrid::default())
    }
}
