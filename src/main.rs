extern crate argparse;

use comoving_coords::convert;
use comoving_coords::data::Config;
use comoving_coords::CoordError;

use argparse::{ArgumentParser, Store, StoreFalse, StoreTrue};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

fn init_logging(debug: bool) -> Result<(), CoordError> {
    // Log to stderr, stdout may carry the output catalog
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l}):5} {m}{n}",
        )))
        .build();
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| CoordError::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| CoordError::Logging(e.to_string()))?;
    Ok(())
}

fn main() {
    // Arguments
    let mut args = Config::default();
    // Parse
    {
        // this block limits scope of borrows by ap.refer() method
        let mut ap = ArgumentParser::new();
        ap.set_description(
            "Convert sky positions (lon, lat) to Cartesian unit vectors and tangent-space bases (east, north, radial).",
        );
        ap.add_option(
            &["-v", "--version"],
            argparse::Print(env!("CARGO_PKG_VERSION").to_string()),
            "Print version information",
        );
        ap.refer(&mut args.input).add_option(
            &["-i", "--input"],
            Store,
            "Location of the input catalog, a file or a directory with csv, txt or csv.gz files",
        );
        ap.refer(&mut args.output).add_option(
            &["-o", "--output"],
            Store,
            "Output file. Compressed if it ends in .gz. Defaults to stdout",
        );
        ap.refer(&mut args.columns).add_option(
            &["--columns"],
            Store,
            "Comma-separated list of column names, in order, of the input catalog. Defaults to 'source_id,ra,dec'",
        );
        ap.refer(&mut args.unit).add_option(
            &["-u", "--unit"],
            Store,
            "Unit of the input angles: rad, deg, hourangle, arcmin, arcsec or mas. Defaults to deg",
        );
        ap.refer(&mut args.basis).add_option(
            &["-b", "--basis"],
            StoreTrue,
            "Output the tangent basis (east, north, radial) instead of the unit vector",
        );
        ap.refer(&mut args.header).add_option(
            &["--noheader"],
            StoreFalse,
            "Input files have no header line",
        );
        ap.refer(&mut args.file_num_cap).add_option(
            &["--maxfiles"],
            Store,
            "Maximum number of files to load from the input directory. Negative for unlimited",
        );
        ap.refer(&mut args.star_num_cap).add_option(
            &["--maxrecords"],
            Store,
            "Maximum number of records to load per file. Negative for unlimited",
        );
        ap.refer(&mut args.lon).add_option(
            &["--lon"],
            Store,
            "Longitude of a single position to convert, used when no input is given. Use --lon=<value> for negative values",
        );
        ap.refer(&mut args.lat).add_option(
            &["--lat"],
            Store,
            "Latitude of a single position to convert, used when no input is given. Use --lat=<value> for negative values",
        );
        ap.refer(&mut args.debug).add_option(
            &["-d", "--debug"],
            StoreTrue,
            "Enable debug logging",
        );
        ap.parse_args_or_exit();
    }

    if let Err(e) = init_logging(args.debug) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    log::debug!("{:?}", args);

    if !args.input.is_empty() {
        match convert::convert_catalog(&args) {
            Ok(n) => log::info!("{} positions converted successfully", n),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    } else if args.has_position() {
        match convert::describe_position(&args) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        eprintln!("Input catalog or --lon/--lat not specified!");
        std::process::exit(1);
    }
}
