//! Project files: the JSON record of a grid, and the files handed to the user

use crate::{color::Cell, error::FormatError};
use serde::{Deserialize, Serialize};

pub const PROJECT_FILENAME: &str = "new_pixelart_project.json";
pub const PROJECT_MIME_TYPE: &str = "application/json";

pub const SVG_FILENAME: &str = "pixelart_image.svg";
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Everything needed to restore a drawing. Cells are row-major.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectRecord {
    pub grid_width: u32,
    pub grid_height: u32,
    #[serde(with = "cell_list")]
    pub pixel_color_list: Vec<Cell>,
}

impl ProjectRecord {
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A file produced for the user, saved under a fixed name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

impl Download {
    pub fn project(record: &ProjectRecord) -> Result<Self, FormatError> {
        Ok(Self {
            filename: PROJECT_FILENAME,
            mime_type: PROJECT_MIME_TYPE,
            contents: record.to_json()?,
        })
    }

    pub fn svg(contents: String) -> Self {
        Self {
            filename: SVG_FILENAME,
            mime_type: SVG_MIME_TYPE,
            contents,
        }
    }
}

mod cell_list {
    use crate::color::{self, Cell};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::SerializeSeq};

    pub fn serialize<S>(cells: &[Cell], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(cells.len()))?;
        for cell in cells {
            seq.serialize_element(&color::cell_repr(cell))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Cell>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<String>::deserialize(deserializer)?;
        values
            .iter()
            .map(|value| color::parse_cell(value).map_err(D::Error::custom))
            .collect()
    }
}
