//! Headless gallery driver.
//!
//! Loads a JSON array of rows, builds a gallery and plays a list of
//! commands through a synthetic 60 Hz frame pump, logging each step.
//!
//! ```text
//! tilescape <rows.json> [--options <file.toml>] [command ...]
//! ```
//!
//! Commands are the gallery's text commands (`table`, `sphere 500`,
//! `resize 800x600`, `skip`, ...). Without any, every formation is visited
//! in menu order.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use tilescape::animation::FramePump;
use tilescape::error::TilescapeError;
use tilescape::gallery::{Gallery, GalleryCommand};
use tilescape::layout::FormationKind;
use tilescape::options::Options;

const FRAME: Duration = Duration::from_micros(16_667);

struct Args {
    rows: PathBuf,
    options: Option<PathBuf>,
    commands: Vec<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let mut rows = None;
    let mut options = None;
    let mut commands = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--options" {
            let path = args
                .next()
                .ok_or_else(|| "--options needs a path".to_owned())?;
            options = Some(PathBuf::from(path));
        } else if rows.is_none() {
            rows = Some(PathBuf::from(arg));
        } else {
            commands.push(arg);
        }
    }

    let rows = rows.ok_or_else(|| {
        "Usage: tilescape <rows.json> [--options <file.toml>] [command ...]"
            .to_owned()
    })?;
    Ok(Args {
        rows,
        options,
        commands,
    })
}

fn run(args: &Args) -> Result<(), TilescapeError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut gallery = Gallery::new(options);
    let json = std::fs::read_to_string(&args.rows)?;
    for issue in gallery.load_json(&json)? {
        log::warn!("{issue}");
    }

    let commands: Vec<GalleryCommand> = if args.commands.is_empty() {
        FormationKind::ALL
            .into_iter()
            .map(GalleryCommand::select)
            .collect()
    } else {
        args.commands
            .iter()
            .map(|text| text.parse::<GalleryCommand>())
            .collect::<Result<_, _>>()?
    };

    let mut pump = FramePump::default();
    for command in commands {
        gallery.execute(command)?;

        let mut repaints = 0u64;
        let mut render = || repaints += 1;
        while pump.pump(gallery.animation_mut(), FRAME, &mut render) {}

        let first = gallery.animation().position(0);
        log::info!(
            "{command:?}: {repaints} repaints, {:.1} fps, tile 0 at {first:?}",
            pump.fps()
        );
    }

    log::info!(
        "done: {} tiles, {} frames",
        gallery.tiles().len(),
        pump.frames()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
