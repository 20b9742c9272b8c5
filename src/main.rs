extern crate clap;
extern crate geoq_vw;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use geoq_vw::commands;
use geoq_vw::error::Error;
use geoq_vw::text;
use std::process;
use tracing_subscriber::EnvFilter;

fn run(matches: ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("area", Some(m)) => commands::simplify::minimum_area(m),
        ("percent", Some(m)) => commands::simplify::percentage_retained(m),
        _ => Err(Error::UnknownCommand),
    }
}

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn simplify_subcommand(
    name: &'static str,
    about: &'static str,
    after_help: &'static str,
    value: &'static str,
    value_help: &'static str,
) -> App<'static, 'static> {
    SubCommand::with_name(name)
        .about(about)
        .after_help(after_help)
        .arg(
            Arg::with_name(value)
                .help(value_help)
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::with_name("planar")
                .long("planar")
                .short("p")
                .help(text::PLANAR_ARG_HELP),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .takes_value(true)
                .possible_values(&["geojson", "wkt"])
                .default_value("geojson")
                .help(text::OUTPUT_ARG_HELP),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let area = simplify_subcommand(
        "area",
        text::AREA_ABOUT,
        text::AREA_AFTER_HELP,
        "tolerance",
        text::TOLERANCE_ARG_HELP,
    );
    let percent = simplify_subcommand(
        "percent",
        text::PERCENT_ABOUT,
        text::PERCENT_AFTER_HELP,
        "percentage",
        text::PERCENTAGE_ARG_HELP,
    );

    let matches = App::new("geoq-vw")
        .version(VERSION)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .about("geoq-vw - Visvalingam-Whyatt simplification for geographic shapes")
        .after_help(text::MAIN_AFTER_HELP)
        .subcommand(area)
        .subcommand(percent)
        .get_matches();

    if let Err(e) = run(matches) {
        eprintln!("Application error: {:?}", e);
        process::exit(1);
    }
}
