#[macro_use]
extern crate tracing;

mod command;
mod render;

use self::command::Command;
use anyhow::Context;
use pixelgrid_common::{
    Confirm, Controller, DEFAULT_HEIGHT, DEFAULT_WIDTH, Download, MenuAction, PixelGrid, Zoom,
};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// Draw pixel art from the terminal
struct Args {
    #[argh(option, default = "DEFAULT_WIDTH")]
    /// number of columns of the initial grid
    width: u32,

    #[argh(option, default = "DEFAULT_HEIGHT")]
    /// number of rows of the initial grid
    height: u32,

    #[argh(option, default = "1.0")]
    /// initial zoom ratio, between 0.3 and 3
    zoom: f32,

    #[argh(option, default = "PathBuf::from(\".\")")]
    /// directory saved projects and exported images are written to
    out_dir: PathBuf,

    #[argh(option)]
    /// project file to open on start
    load: Option<PathBuf>,

    #[argh(switch)]
    /// draw the grid without terminal colors
    plain: bool,
}

/// Yes/no question on the terminal, reading the answer from the command input
struct TerminalPrompt<'a, R> {
    input: &'a mut R,
}

impl<R: BufRead> Confirm for TerminalPrompt<'_, R> {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        print!("{title}\n{message} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(error) => {
                error!(?error, "failed to read answer");
                false
            }
        }
    }
}

fn write_download(out_dir: &Path, download: &Download) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let path = out_dir.join(download.filename);
    fs::write(&path, &download.contents)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        mime_type = download.mime_type,
        bytes = download.contents.len(),
        "wrote file"
    );
    println!("saved {}", path.display());

    Ok(())
}

fn run_command(
    controller: &mut Controller,
    command: Command,
    prompt: &mut impl Confirm,
    args: &Args,
) -> anyhow::Result<()> {
    match command {
        Command::Click { x, y } => {
            let index = controller.grid().index_of(x, y)?;
            controller.click(index)?;
        }
        Command::RightClick { x, y } => {
            let index = controller.grid().index_of(x, y)?;
            match controller.context_menu(index)? {
                MenuAction::Suppress => debug!("context menu suppressed"),
            }
        }
        Command::Color(color) => controller.set_active_color(color),
        Command::Width(width) => {
            controller.set_pending_width(width, prompt)?;
        }
        Command::Height(height) => {
            controller.set_pending_height(height, prompt)?;
        }
        Command::Pick => controller.toggle_color_pick(),
        Command::Wheel(delta) => controller.wheel(delta),
        Command::Save => write_download(&args.out_dir, &controller.save()?)?,
        Command::Export => write_download(&args.out_dir, &controller.export_svg())?,
        Command::Load(path) => controller.load_file(&path)?,
        Command::Show => print!("{}", render::render(controller, args.plain)),
        Command::Help => println!("{}", command::HELP),
        Command::Quit => {}
    }

    Ok(())
}

/// Run one command, reporting failures and notices without leaving the shell
fn execute(
    controller: &mut Controller,
    command: Command,
    prompt: &mut impl Confirm,
    args: &Args,
) {
    if let Err(error) = run_command(controller, command, prompt, args) {
        warn!(?error, "command failed");
        println!("error: {error:#}");
    }

    for notice in controller.take_notices() {
        println!("! {notice}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let zoom = Zoom::from_ratio(args.zoom)?;
    let grid = PixelGrid::new(args.width, args.height, zoom)?;
    let mut controller = Controller::new(grid);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    if let Some(path) = args.load.clone() {
        info!(path = %path.display(), "loading project..");
        let mut prompt = TerminalPrompt { input: &mut input };
        execute(&mut controller, Command::Load(path), &mut prompt, &args);
    }
    print!("{}", render::render(&controller, args.plain));

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(error) => {
                println!("{error:#}");
                continue;
            }
        };

        let mut prompt = TerminalPrompt { input: &mut input };
        execute(&mut controller, command, &mut prompt, &args);
    }

    Ok(())
}
