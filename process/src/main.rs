#[macro_use]
extern crate tracing;

use anyhow::Context;
use itertools::Itertools;
use pixelgrid_common::{PixelGrid, ProjectRecord, Zoom, project::SVG_FILENAME};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// convert a directory of pixel art projects into SVG images
struct Args {
    #[argh(positional)]
    /// path to the directory with project files
    path: PathBuf,

    #[argh(option)]
    /// path to the output directory
    output: PathBuf,
}

fn is_project_file(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "json")
}

fn output_path(output: &Path, entry_path: &Path) -> PathBuf {
    match entry_path.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(".svg");
            output.join(name)
        }
        None => output.join(SVG_FILENAME),
    }
}

fn read_project(entry_path: &Path) -> anyhow::Result<PixelGrid> {
    let text = fs::read_to_string(entry_path)?;
    let record = ProjectRecord::from_json(&text)?;

    let mut grid = PixelGrid::new(1, 1, Zoom::BASE)?;
    grid.load_project_record(&record)?;

    Ok(grid)
}

fn convert(entry_path: &Path, output: &Path) -> anyhow::Result<PathBuf> {
    let grid = read_project(entry_path)
        .with_context(|| format!("failed to read {}", entry_path.display()))?;

    let svg_path = output_path(output, entry_path);
    let mut file = BufWriter::new(File::create(&svg_path)?);
    file.write_all(grid.to_svg().as_bytes())?;
    file.flush()?;

    Ok(svg_path)
}

/// Counts of a directory conversion
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    total: usize,
    failed: usize,
}

/// Convert every project in `path`, carrying on past the ones that fail
fn convert_dir(path: &Path, output: &Path) -> anyhow::Result<Summary> {
    let files: Vec<PathBuf> = fs::read_dir(path)?
        .map_ok(|entry| entry.path())
        .filter_ok(|path| is_project_file(path))
        .try_collect()?;

    fs::create_dir_all(output)?;

    let mut failed = 0;
    for entry_path in files.iter().sorted() {
        match convert(entry_path, output) {
            Ok(svg_path) => {
                info!(from = %entry_path.display(), to = %svg_path.display(), "converted")
            }
            Err(error) => {
                error!(?error, "conversion failed");
                failed += 1;
            }
        }
    }

    Ok(Summary {
        total: files.len(),
        failed,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let Summary { total, failed } = convert_dir(&args.path, &args.output)?;

    info!(total, failed, "done");
    if failed > 0 {
        anyhow::bail!("{failed} of {total} projects could not be converted");
    }

    Ok(())
}
