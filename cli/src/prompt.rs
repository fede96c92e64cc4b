use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use kindling_core::{Board, Coord, Coord2, RoundConfig};

/// Reads one trimmed line, failing once the input is exhausted.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input closed before a valid answer was given");
    }
    Ok(line.trim().to_owned())
}

/// Asks for the board length until an odd length within bounds is entered.
pub fn prompt_length(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Coord> {
    loop {
        writeln!(
            output,
            "Enter the length of row/cols (odd number), max {}:",
            RoundConfig::MAX_LENGTH
        )?;
        output.flush()?;

        let answer = read_line(input)?;
        match answer.parse::<Coord>() {
            Ok(length) => match RoundConfig::validate_length(length) {
                Ok(length) => return Ok(length),
                Err(err) => log::debug!("rejected length {length}: {err}"),
            },
            Err(err) => log::debug!("could not parse {answer:?} as a length: {err}"),
        }
    }
}

/// Asks for the tile to set on fire until coordinates on the board are entered.
pub fn prompt_origin(
    board: &Board,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Coord2> {
    loop {
        let x = prompt_coord("x", input, output)?;
        let y = prompt_coord("y", input, output)?;
        if let (Some(x), Some(y)) = (x, y)
            && let Ok(coords) = board.validate_coords((x, y))
        {
            return Ok(coords);
        }
        log::debug!("rejected origin ({x:?}, {y:?})");
    }
}

fn prompt_coord(
    axis: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Option<Coord>> {
    write!(output, "Enter {axis} coordinate: ")?;
    output.flush()?;
    Ok(read_line(input)?.parse().ok())
}
