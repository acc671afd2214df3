use colored::Colorize;
use clap::Parser;
use ip_subnet_calc::config::{Cli, Config};
use ip_subnet_calc::SubnetError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::debug!("#Start main()");

    let config = Config::from(Cli::parse());

    match ip_subnet_calc::run(&config) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            match e.downcast_ref::<SubnetError>() {
                Some(kind) => eprintln!("{}: {kind}", kind.code().on_red()),
                None => eprintln!("{e}"),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
