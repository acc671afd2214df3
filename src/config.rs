//! Runtime configuration for the command-line front end.
//!
//! Defaults come from the environment (a `.env` file is loaded first by
//! `main`), and command-line flags override them.

use crate::models::{CalcOptions, HostRule};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// /31 host counting rule as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostRuleArg {
    Rfc3021,
    Traditional,
}

impl From<HostRuleArg> for HostRule {
    fn from(arg: HostRuleArg) -> Self {
        match arg {
            HostRuleArg::Rfc3021 => HostRule::Rfc3021,
            HostRuleArg::Traditional => HostRule::Traditional,
        }
    }
}

/// IPv4/IPv6 subnet calculator.
#[derive(Debug, Parser)]
#[command(name = "ip-subnet-calc", version, about, long_about = None)]
pub struct Cli {
    /// IPv4 /31 host counting rule
    #[arg(long, value_enum, env = "SUBNET_HOST_RULE", default_value = "rfc3021")]
    pub host_rule: HostRuleArg,

    /// Shorthand for --host-rule traditional
    #[arg(long, conflicts_with = "rfc3021")]
    pub traditional: bool,

    /// Shorthand for --host-rule rfc3021
    #[arg(long)]
    pub rfc3021: bool,

    /// Report format
    #[arg(long, value_enum, env = "SUBNET_OUTPUT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Also print the IPv4 classification
    #[arg(long)]
    pub meta: bool,

    /// `address/prefix`, or an IPv4 address when NETMASK follows
    #[arg(value_name = "ADDRESS[/PREFIX]")]
    pub address: String,

    /// Dotted-quad IPv4 netmask
    pub netmask: Option<String>,
}

/// What the user asked to calculate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `address/prefix`
    Cidr(String),
    /// IPv4 address and dotted-quad netmask.
    Netmask { address: String, netmask: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub options: CalcOptions,
    pub output: OutputFormat,
    /// Also print the IPv4 classification.
    pub show_meta: bool,
    pub query: Query,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let host_rule = if cli.traditional {
            HostRule::Traditional
        } else if cli.rfc3021 {
            HostRule::Rfc3021
        } else {
            cli.host_rule.into()
        };
        let output = if cli.json { OutputFormat::Json } else { cli.output };
        let query = match cli.netmask {
            Some(netmask) => Query::Netmask {
                address: cli.address,
                netmask,
            },
            None => Query::Cidr(cli.address),
        };
        log::debug!("config: rule={host_rule} output={output:?}");

        Config {
            options: CalcOptions::with_host_rule(host_rule),
            output,
            show_meta: cli.meta,
            query,
        }
    }
}

impl Config {
    /// Parse arguments (program name first) into a configuration.
    pub fn try_parse_from<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Config::from)
    }
}
