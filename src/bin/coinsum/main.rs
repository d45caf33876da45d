#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use coinsum::report::{numbered_line, Summary};
use coinsum::{count, enumerate};
use log::{debug, info};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&options, &mut out)
}

fn run(options: &Options, out: &mut impl Write) -> Result<()> {
    match write_combinations(options, out) {
        // the reader went away, e.g. piped into `head`
        Err(e) if is_broken_pipe(&e) => {
            debug!("Output closed early");
            Ok(())
        }
        result => result,
    }
}

fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .map_or(false, |e| e.kind() == io::ErrorKind::BrokenPipe)
}

fn write_combinations(options: &Options, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();
    // validates the input even when only counting
    let combinations = enumerate(options.denominations(), options.target())?;
    info!(
        "Denominations [{}], target {}",
        combinations.palette(),
        combinations.target()
    );
    if options.count_only() {
        let count = count(combinations.palette(), combinations.target())?;
        writeln!(
            out,
            "{}",
            Summary {
                count,
                truncated: false,
                elapsed: start.elapsed(),
            }
        )?;
        out.flush()?;
        return Ok(());
    }

    let palette = combinations.palette().clone();
    let mut printed = 0;
    for (i, combination) in combinations.take(options.limit().unwrap_or(usize::MAX)).enumerate() {
        printed = i + 1;
        writeln!(out, "{}", numbered_line(printed, &combination, &palette))?;
    }
    writeln!(
        out,
        "{}",
        Summary {
            count: printed as u128,
            truncated: options.limit() == Some(printed),
            elapsed: start.elapsed(),
        }
    )?;
    out.flush()?;
    Ok(())
}
