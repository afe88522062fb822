//! coinaddress 命令行入口
//!
//! ```text
//! coinaddress [--config FILE] [<network>] <xpub> [path]
//! coinaddress --list
//! coinaddress --validate <network> <address>
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use coinaddress::{config::Config, infrastructure::logging, AddressError};

const USAGE: &str = "usage: coinaddress [--config FILE] [<network>] <xpub> [path]
       coinaddress --list
       coinaddress --validate <network> <address>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Derive {
        network: Option<String>,
        xpub: String,
        path: Option<String>,
    },
    Validate {
        network: String,
        address: String,
    },
    List,
    Help,
}

struct Args {
    config_path: Option<String>,
    command: Command,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut config_path = None;
    let mut validate = false;
    let mut list = false;
    let mut positional = Vec::new();

    let mut args = raw.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().context("--config requires a file path")?);
            }
            "--validate" => validate = true,
            "--list" => list = true,
            "-h" | "--help" => {
                return Ok(Args {
                    config_path,
                    command: Command::Help,
                })
            }
            _ => positional.push(arg),
        }
    }

    let command = if list {
        Command::List
    } else if validate {
        match <[String; 2]>::try_from(positional) {
            Ok([network, address]) => Command::Validate { network, address },
            Err(_) => anyhow::bail!("--validate takes <network> <address>\n{}", USAGE),
        }
    } else {
        let mut positional = positional.into_iter();
        match (positional.next(), positional.next(), positional.next(), positional.next()) {
            (Some(xpub), None, None, None) => Command::Derive {
                network: None,
                xpub,
                path: None,
            },
            (Some(network), Some(xpub), path, None) => Command::Derive {
                network: Some(network),
                xpub,
                path,
            },
            _ => anyhow::bail!("{}", USAGE),
        }
    };

    Ok(Args {
        config_path,
        command,
    })
}

fn run(args: Args) -> Result<()> {
    let config_path = args
        .config_path
        .or_else(|| std::env::var("COINADDRESS_CONFIG").ok());
    let config = Config::from_env_and_file(config_path.as_deref())?;
    config.validate().context("invalid configuration")?;

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match args.command {
        Command::Help => println!("{}", USAGE),
        Command::List => {
            for (name, symbol) in coinaddress::supported_networks() {
                println!("{:<16} {}", name, symbol);
            }
        }
        Command::Validate { network, address } => {
            let valid = coinaddress::validate_address(&network, &address)?;
            println!("{}", if valid { "valid" } else { "invalid" });
        }
        Command::Derive {
            network,
            xpub,
            path,
        } => {
            let network = network.unwrap_or(config.defaults.network);
            let path = path.unwrap_or(config.defaults.path);
            tracing::info!(network = %network, path = %path, "deriving address");

            let address = coinaddress::address_from_xpub(&network, &xpub, &path)?;
            println!("{}", address);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // 加载 .env（可选）
    dotenvy::dotenv().ok();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<AddressError>() {
                Some(address_error) => eprintln!("error[{}]: {}", address_error.code(), address_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_derive() {
        let args = parse(&["bitcoin", "xpub1", "0/1"]).unwrap();
        assert_eq!(
            args.command,
            Command::Derive {
                network: Some("bitcoin".into()),
                xpub: "xpub1".into(),
                path: Some("0/1".into()),
            }
        );

        let args = parse(&["--config", "c.toml", "xpub1"]).unwrap();
        assert_eq!(args.config_path.as_deref(), Some("c.toml"));
        assert_eq!(
            args.command,
            Command::Derive {
                network: None,
                xpub: "xpub1".into(),
                path: None,
            }
        );
    }

    #[test]
    fn test_parse_validate_and_list() {
        let args = parse(&["--validate", "BTC", "1abc"]).unwrap();
        assert_eq!(
            args.command,
            Command::Validate {
                network: "BTC".into(),
                address: "1abc".into(),
            }
        );
        assert_eq!(parse(&["--list"]).unwrap().command, Command::List);
        assert_eq!(parse(&["--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a", "b", "c", "d"]).is_err());
        assert!(parse(&["--validate", "BTC"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }
}
