use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

use investwise::auth::user_interface::main_auth_flow;
use investwise::utils::{initialize_logging, StdinPrompt};
use investwise::{AppConfig, AppContext};

fn cli() -> Command {
    Command::new("investwise")
        .about("Console portfolio tracker with Zakat calculation")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a JSON configuration file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .help("Account store file (overrides the config)")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file (overrides the config)")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("gold-price")
                .long("gold-price")
                .help("Gold price per gram used for the Nisab threshold")
                .value_name("PRICE")
                .value_parser(value_parser!(f64)),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let mut config = AppConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if let Some(path) = matches.get_one::<PathBuf>("data-file") {
        config.data_file = path.clone();
    }
    if let Some(path) = matches.get_one::<PathBuf>("log-file") {
        config.log_file = path.clone();
    }
    if let Some(price) = matches.get_one::<f64>("gold-price") {
        config.gold_price_per_gram = *price;
    }
    config.validate()?;

    initialize_logging(&config.log_file, config.level_filter()?)?;
    log::info!(
        "Starting with data file {} and gold price {}",
        config.data_file.display(),
        config.gold_price_per_gram
    );

    let mut context = AppContext::from_config(&config)?;
    main_auth_flow(&mut StdinPrompt, &mut context)?;

    log::info!("Shutting down");
    Ok(())
}
