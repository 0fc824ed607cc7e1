use anyhow::{Context, bail};
use pixelgrid_common::Color;
use std::{path::PathBuf, str::FromStr};

pub const HELP: &str = "\
commands:
  click X Y     paint the cell (or sample it in pick mode)
  rclick X Y    clear the cell
  color VALUE   set the brush color (#rrggbb or rgb(r, g, b))
  width N       resize the grid to N columns
  height N      resize the grid to N rows
  pick          toggle color pick mode
  wheel DELTA   zoom out on positive, zoom in on negative delta
  save          write the project file
  export        write the SVG image
  load PATH     open a project file
  show          draw the grid
  help          show this text
  quit          leave";

/// One line of user input, standing in for the pointer and form events of a GUI
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click { x: u32, y: u32 },
    RightClick { x: u32, y: u32 },
    Color(Color),
    Width(u32),
    Height(u32),
    Pick,
    Wheel(f32),
    Save,
    Export,
    Load(PathBuf),
    Show,
    Help,
    Quit,
}

fn parse_arg<T>(arg: Option<&str>, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.with_context(|| format!("missing argument `{name}`"))?;
    arg.parse()
        .with_context(|| format!("invalid value {arg:?} for `{name}`"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let mut args = rest.split_whitespace();
        let command = match verb {
            "click" | "rclick" => {
                let x = parse_arg(args.next(), "x")?;
                let y = parse_arg(args.next(), "y")?;
                if verb == "click" {
                    Self::Click { x, y }
                } else {
                    Self::RightClick { x, y }
                }
            }
            // `rgb(r, g, b)` contains spaces, take the remainder whole
            "color" => Self::Color(rest.parse()?),
            "width" => Self::Width(parse_arg(args.next(), "width")?),
            "height" => Self::Height(parse_arg(args.next(), "height")?),
            "pick" => Self::Pick,
            "wheel" => Self::Wheel(parse_arg(args.next(), "delta")?),
            "save" => Self::Save,
            "export" => Self::Export,
            "load" if !rest.is_empty() => Self::Load(PathBuf::from(rest)),
            "load" => bail!("missing argument `path`"),
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command {other:?}, try `help`"),
        };

        Ok(command)
    }
}
