use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use kindling_core::{Coord, OddsFunction, RoundConfig, seeded_trials};

mod prompt;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Curve {
    Exponential,
    Polynomial,
}

impl From<Curve> for OddsFunction {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Exponential => OddsFunction::DEFAULT_EXPONENTIAL,
            Curve::Polynomial => OddsFunction::DEFAULT_POLYNOMIAL,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Set one tile on fire and watch it spread", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Length of the rows and columns, prompted for when missing
    #[arg(short, long)]
    length: Option<Coord>,

    /// Row of the tile to set on fire
    #[arg(short = 'x', long)]
    row: Option<Coord>,

    /// Column of the tile to set on fire
    #[arg(short = 'y', long)]
    col: Option<Coord>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Curve turning the board length into the spread odds
    #[arg(long, value_enum, default_value_t = Curve::Exponential)]
    curve: Curve,

    /// Print every visited tile after the round
    #[arg(long)]
    moves: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    // keep stdout clean for the report when emitting json
    let mut prompts: Box<dyn Write> = match args.format {
        Format::Text => Box::new(io::stdout()),
        Format::Json => Box::new(io::stderr()),
    };

    run(&args, &mut input, &mut output, &mut prompts)
}

fn run(
    args: &Args,
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompts: &mut impl Write,
) -> anyhow::Result<()> {
    let length = match args.length {
        Some(length) => RoundConfig::validate_length(length)?,
        None => prompt::prompt_length(input, prompts)?,
    };
    let config = RoundConfig::new(length, args.curve.into())?;
    let mut board = config
        .build_board()
        .with_context(|| format!("cannot build a board from {:?}", config.odds))?;

    let text = args.format == Format::Text;
    if text {
        writeln!(output, "odds: {:.2}", board.probability())?;
        write!(output, "{}", render::render_board(&board))?;
    }

    let (x, y) = match (args.row, args.col) {
        (Some(row), Some(col)) => board
            .validate_coords((row, col))
            .with_context(|| format!("({row}, {col}) is not on a {length}x{length} board"))?,
        _ => prompt::prompt_origin(&board, input, prompts)?,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");
    let outcome = board.trigger(i32::from(x), i32::from(y), &mut seeded_trials(seed));
    if !outcome.has_update() {
        log::warn!("nothing caught fire at ({x}, {y})");
    }
    log::debug!("outcome: {outcome:?}");

    match args.format {
        Format::Text => {
            write!(output, "{}", render::render_board(&board))?;
            if args.moves {
                writeln!(output, "{}", render::render_moves(&board))?;
            }
            writeln!(output, "{}", render::render_summary(&board))?;
        }
        Format::Json => {
            let report = render::RoundReport::new(&board, seed);
            serde_json::to_writer_pretty(&mut *output, &report)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
