use std::time::Duration;

use clap::{Args, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use polyominoes::{Polyomino, Shape, ShapeError};

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, found: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    if let Some(len) = bar.length() {
        let pos_width = format!("{}", len).len();

        let template = format!(
            "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}"
        );

        if let Ok(style) = ProgressStyle::with_template(&template) {
            bar.set_style(style.progress_chars("#>-"));
        }
    }

    bar.finish_with_message(format!(
        "Done! Found {found} polyominoes (N = {n}) in {secs}.{micros:06} s"
    ));
}

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}} remaining: [{{eta_precise}}]");

    if let Ok(style) = ProgressStyle::with_template(&template) {
        bar.set_style(style.progress_chars("#>-"));
    }

    bar
}

#[derive(Clone, Parser)]
#[command(version, about = "Enumerate free polyominoes")]
pub enum Opts {
    /// Enumerate polyominoes with a specific amount of squares
    Enumerate(EnumerateOpts),
    /// Show the signatures of every orientation of a shape
    Signatures(SignaturesArgs),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N value for which to calculate all unique polyominoes.
    pub n: usize,

    /// Print one representation of every polyomino that was found.
    #[clap(long, short)]
    pub list: bool,

    /// Also print the amount of polyominoes for every size below N.
    #[clap(long, short)]
    pub all_sizes: bool,

    /// Don't draw progress bars.
    #[clap(long, short = 'p')]
    pub no_progress: bool,
}

#[derive(Clone, Args)]
pub struct SignaturesArgs {
    /// The shape, written as a list of squares: `[[0,0],[1,0],[1,1]]`
    pub shape: String,
}

pub fn signatures(args: &SignaturesArgs) -> Result<(), ShapeError> {
    let shape: Shape = args.shape.parse()?;
    let polyomino = Polyomino::new(&shape);

    let connected = if shape.is_connected() { "yes" } else { "no" };
    let (width, height) = polyomino.canonical().dims();

    let mut all: Vec<_> = polyomino.signatures().collect();
    all.sort();

    println!();
    println!("Info for {shape}");
    println!("Amount of squares: {}", shape.len());
    println!("Connected: {connected}");
    println!("Bounding box: {width}x{height}");
    println!("Distinct orientations: {}", polyomino.symmetry_count());
    println!("Canonical signature: {}", polyomino.canonical());
    for signature in all {
        println!("  {signature}");
    }

    Ok(())
}

fn main() {
    let opts = Opts::parse();

    let result = match opts {
        Opts::Enumerate(r) => enumerate(&r).map_err(|e| e.to_string()),
        Opts::Signatures(s) => signatures(&s).map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        println!("Error: {e}");
        std::process::exit(1);
    }
}
