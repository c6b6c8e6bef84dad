#[cfg(feature = "sdl2")]
use crate::grid::Size;
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct RendererConfig {
    #[cfg(feature = "sdl2")]
    pub visual: bool,
    #[cfg(feature = "sdl2")]
    pub window_size: Size,
    #[cfg(feature = "sdl2")]
    pub vsync: bool,
    #[cfg(feature = "sdl2")]
    pub fullscreen: bool,
    #[cfg(feature = "image")]
    pub snapshot: Option<PathBuf>,
    #[cfg(feature = "image")]
    pub font: Option<PathBuf>,
}

#[derive(Debug)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub best_file: PathBuf,
    pub mute: bool,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "twenty48",
    about = "Slide and merge tiles on a 4x4 board"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        parse(from_os_str),
        long,
        default_value = "best2048.json",
        help = "File the best score is kept in"
    )]
    best_file: PathBuf,

    #[structopt(short, long, help = "Do not play sound cues")]
    mute: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(short = "V", long, help = "Play in a window instead of the terminal")]
    visual: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(
        parse(try_from_str),
        long,
        default_value = "500x500",
        help = "Window size"
    )]
    window_size: Size,

    #[cfg(feature = "sdl2")]
    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[cfg(feature = "sdl2")]
    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,

    #[cfg(feature = "image")]
    #[structopt(parse(from_os_str), long, help = "Save the final board as an image")]
    snapshot: Option<PathBuf>,

    #[cfg(feature = "image")]
    #[structopt(parse(from_os_str), long, requires = "snapshot", help = "TrueType font for the snapshot")]
    font: Option<PathBuf>,

    #[structopt(long, possible_values= &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        if self.best_file.as_os_str().is_empty() {
            return Err("Best score file must not be empty");
        }

        #[cfg(feature = "sdl2")]
        if self.visual && (self.window_size.width == 0 || self.window_size.height == 0) {
            return Err("Window size must not be zero");
        }

        Ok(AppConfig {
            seed: self.seed,
            best_file: self.best_file,
            mute: self.mute,
            renderer: RendererConfig {
                #[cfg(feature = "sdl2")]
                visual: self.visual,
                #[cfg(feature = "sdl2")]
                window_size: self.window_size,
                #[cfg(feature = "sdl2")]
                vsync: self.vsync,
                #[cfg(feature = "sdl2")]
                fullscreen: self.fullscreen,
                #[cfg(feature = "image")]
                snapshot: self.snapshot,
                #[cfg(feature = "image")]
                font: self.font,
            },
        })
    }
}
