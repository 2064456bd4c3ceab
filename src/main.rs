use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use qrtext::cli::{self, Args};
use qrtext::config::Config;
use qrtext::source::{self, Input};
use qrtext::{pipeline, Error};

fn main() {
    // Logs go to stderr; stdout carries the rendering
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> qrtext::Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let render = cli::render_config(args, &config);
    let options = cli::generate_options(args, &config)?;

    let input = Input::resolve(args.input_arg(), || {
        source::prompt_line(&mut io::stdin().lock(), &mut io::stderr())
    })?;

    // Output is only opened once the module grid is known
    let prepared = pipeline::prepare(&input, &options)?;

    let outcome = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            prepared.write(&render, &mut writer)?
        }
        None => prepared.write(&render, &mut io::stdout().lock())?,
    };

    log::debug!(
        "Rendered {}x{} modules at {}px per module",
        outcome.columns,
        outcome.rows,
        outcome.calibration.scale
    );
    Ok(())
}
