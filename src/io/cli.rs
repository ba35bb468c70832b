//! Command-line interface for painting one picture or a whole gallery

use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_LINE_SIZE, DEFAULT_PAINT_NAME, DEFAULT_WIDTH,
    MAX_ITERATIONS,
};
use crate::io::error::{PaintingError, Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::painting::Painting;
use crate::painting::projection::{CanvasSize, Projection};
use crate::source::digits::{DigitSource, PiDigits, RandomDigits};
use crate::source::palette::Palette;
use clap::Parser;
use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pimondrian")]
#[command(
    author,
    version,
    about = "Draw pictures in the style of Piet Mondrian from the digits of pi",
    long_about = "Draw pictures in the style of Piet Mondrian.\n\n\
        Creates a PNG painting from the digits of pi. Optionally, a file with \
        numbers can be given, or the numbers can be piped to standard input.",
    after_help = "The canvas is first divided into two rectangles, then each of \
        them into two others, and so on, as many times as --iterations says."
)]
/// Command-line arguments for the painting tool
pub struct Cli {
    /// File containing the digits; the bundled digits of pi are used otherwise
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// File containing the ten palette colors, one per line
    #[arg(short, long, value_name = "FILE")]
    pub colors: Option<PathBuf>,

    /// Painting name; the PNG extension is appended
    #[arg(short, long, default_value = DEFAULT_PAINT_NAME)]
    pub name: String,

    /// Number of paintings to generate from one continuing digit stream
    #[arg(short, long)]
    pub gallery: Option<usize>,

    /// Painting width in pixels
    #[arg(short = 'x', long = "xsize", default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Painting height in pixels
    #[arg(short = 'y', long = "ysize", default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Subdivision rounds; the more rounds, the more rectangles
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Line thickness in pixels
    #[arg(short, long, default_value_t = DEFAULT_LINE_SIZE)]
    pub line: u32,

    /// Use random digits instead of a file
    #[arg(short, long)]
    pub random: bool,

    /// Seed for reproducible random digits
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Generation to draw instead of the deepest one
    #[arg(short = 'G', long)]
    pub generation: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the digits of a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    /// Piped standard input
    Stdin,
    /// Random digits, optionally seeded
    Random(Option<u64>),
    /// A digit file
    File(PathBuf),
    /// The bundled digits of pi
    Pi,
}

impl SourceChoice {
    /// Status line announcing the source on stderr
    pub const fn announcement(&self) -> &'static str {
        match self {
            Self::Stdin => "Reading from stdin",
            Self::Random(_) => "Randomly generated",
            Self::File(_) => "Extracting digits from file",
            Self::Pi => "Using bundled digits of pi",
        }
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pick the digit source
    ///
    /// Piped input wins over everything, then `--random` unless a file is
    /// also given, then the file, then the digits of pi.
    pub fn source_choice(&self, stdin_is_terminal: bool) -> SourceChoice {
        if !stdin_is_terminal {
            return SourceChoice::Stdin;
        }
        match (&self.file, self.random) {
            (None, true) => SourceChoice::Random(self.seed),
            (Some(path), _) => SourceChoice::File(path.clone()),
            (None, false) => SourceChoice::Pi,
        }
    }

    /// Names of the paintings to produce, without extension
    ///
    /// A gallery of `n` yields `<name>_0` to `<name>_{n-1}`; no gallery, or a
    /// gallery of zero, yields the bare name.
    pub fn painting_names(&self) -> Vec<String> {
        match self.gallery {
            Some(count) if count > 0 => (0..count)
                .map(|number| format!("{}_{number}", self.name))
                .collect(),
            _ => vec![self.name.clone()],
        }
    }

    /// Validated subdivision rounds
    ///
    /// # Errors
    ///
    /// Returns an error if the iteration count exceeds the safety limit
    pub fn checked_iterations(&self) -> Result<usize> {
        if self.iterations > MAX_ITERATIONS {
            return Err(invalid_parameter(
                "iterations",
                &self.iterations,
                &format!("must be at most {MAX_ITERATIONS}"),
            ));
        }
        Ok(self.iterations)
    }

    /// Projection for the requested canvas and line width
    ///
    /// # Errors
    ///
    /// Returns an error if a canvas dimension is zero
    pub fn projection(&self) -> Result<Projection> {
        Projection::new(
            CanvasSize::new(self.width, self.height)?,
            f64::from(self.line),
        )
    }

    /// Palette from `--colors`, or the bundled one
    ///
    /// # Errors
    ///
    /// Returns an error if the palette file cannot be read or parsed
    pub fn palette(&self) -> Result<Palette> {
        self.colors
            .as_deref()
            .map_or_else(|| Ok(Palette::bundled()), Palette::from_path)
    }
}

/// Orchestrates a run: opens the inputs, paints and saves every picture
pub struct Studio {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Studio {
    /// Create a studio for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Paint everything the CLI asks for, reading digits from the chosen source
    ///
    /// Returns the paths written.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be opened or parsed, a parameter is
    /// out of range, or an image cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let choice = self.cli.source_choice(std::io::stdin().is_terminal());
        let digits = self.open_source(&choice)?;
        self.process_with(digits)
    }

    /// Paint everything the CLI asks for from an already opened digit source
    ///
    /// Paintings of a gallery continue the stream where the previous one
    /// stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be loaded, a parameter is out of
    /// range, or an image cannot be written
    pub fn process_with(&mut self, mut digits: DigitSource) -> Result<Vec<PathBuf>> {
        let iterations = self.cli.checked_iterations()?;
        let projection = self.cli.projection()?;
        let palette = self.cli.palette()?;
        let names = self.cli.painting_names();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(names.len());
        }

        let mut written = Vec::with_capacity(names.len());
        for name in &names {
            if let Some(ref pm) = self.progress_manager {
                pm.start_painting(name);
            }

            let painting = Painting::new(iterations, digits.by_ref());
            let img = projection.render(&painting, self.cli.generation, &palette);
            let path = export_png(&img, name)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_painting(&path);
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Open the digit source for `choice`, announcing it unless quiet
    ///
    /// # Errors
    ///
    /// Returns an error if a digit file cannot be opened
    // Allow print for user feedback on the chosen source
    #[allow(clippy::print_stderr)]
    pub fn open_source(&self, choice: &SourceChoice) -> Result<DigitSource> {
        let source = match choice {
            SourceChoice::Stdin => DigitSource::reader(std::io::stdin()),
            SourceChoice::Random(seed) => DigitSource::Random(
                seed.map_or_else(RandomDigits::from_entropy, RandomDigits::from_seed),
            ),
            SourceChoice::File(path) => {
                let file = File::open(path).map_err(|e| PaintingError::FileSystem {
                    path: path.clone(),
                    operation: "open digits",
                    source: e,
                })?;
                DigitSource::reader(file)
            }
            SourceChoice::Pi => DigitSource::Pi(PiDigits::new()),
        };

        if !self.cli.quiet {
            eprintln!("{}", choice.announcement());
        }
        Ok(source)
    }
}
