//! CLI argument parsing

use crate::{Config, Error, Result};

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub global: GlobalArgs,
    pub command: Command,
}

/// Options accepted before or after any command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub url: Option<String>,
    pub config: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub enum Command {
    Browse(BrowseArgs),
    Download(DownloadArgs),
    Stats(StatsArgs),
    Watch(WatchArgs),
    Record,
    Stop,
    Cleanup(CleanupArgs),
}

#[derive(Debug, Clone, Default)]
pub struct BrowseArgs {
    pub path: String,
    pub json: bool,
    pub out: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DownloadArgs {
    pub path: String,
    pub dest: String,
}

#[derive(Debug, Clone, Default)]
pub struct StatsArgs {
    pub json: bool,
    pub out: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WatchArgs {
    pub out: Option<String>,
    pub ticks: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CleanupArgs {
    /// Raw input; validated by the dashboard before anything is sent.
    pub days: String,
    pub out: Option<String>,
}

impl GlobalArgs {
    /// Layer defaults, the config file, the environment and these flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the merged
    /// configuration is invalid.
    pub fn build_config<F>(&self, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.apply_env(env);
        if let Some(url) = &self.url {
            config.base_url.clone_from(url);
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        config.validate()?;
        Ok(config)
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> std::result::Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> std::result::Result<CliArgs, String> {
    let mut global = GlobalArgs::default();
    let mut rest = Vec::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--url" => global.url = Some(take_value(args, &mut i, "--url")?.to_string()),
            "--config" => {
                global.config = Some(take_value(args, &mut i, "--config")?.to_string());
            }
            "--timeout" => {
                let secs: u64 = take_value(args, &mut i, "--timeout")?
                    .parse()
                    .map_err(|_| "--timeout must be a positive integer".to_string())?;
                if secs == 0 {
                    return Err("--timeout must be greater than zero".to_string());
                }
                global.timeout_secs = Some(secs);
            }
            _ => rest.push(args[i].clone()),
        }
        i += 1;
    }

    let Some((name, tail)) = rest.split_first() else {
        return Err("No command specified".to_string());
    };

    let command = match name.as_str() {
        "browse" => Command::Browse(parse_browse_args(tail)?),
        "download" => Command::Download(parse_download_args(tail)?),
        "stats" => Command::Stats(parse_stats_args(tail)?),
        "watch" => Command::Watch(parse_watch_args(tail)?),
        "record" => {
            expect_no_args(tail)?;
            Command::Record
        }
        "stop" => {
            expect_no_args(tail)?;
            Command::Stop
        }
        "cleanup" => Command::Cleanup(parse_cleanup_args(tail)?),
        other => return Err(format!("Unknown command: {other}")),
    };

    Ok(CliArgs { global, command })
}

fn expect_no_args(args: &[String]) -> std::result::Result<(), String> {
    match args.first() {
        Some(arg) => Err(format!("Unexpected argument: {arg}")),
        None => Ok(()),
    }
}

fn parse_browse_args(args: &[String]) -> std::result::Result<BrowseArgs, String> {
    let mut browse = BrowseArgs::default();
    let mut path = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--json" => browse.json = true,
            "--out" => browse.out = Some(take_value(args, &mut i, "--out")?.to_string()),
            arg if !arg.starts_with("--") => {
                if path.is_some() {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                path = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    browse.path = path.unwrap_or_default();
    Ok(browse)
}

fn parse_download_args(args: &[String]) -> std::result::Result<DownloadArgs, String> {
    let mut path = None;
    let mut dest = ".".to_string();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--dest" => dest = take_value(args, &mut i, "--dest")?.to_string(),
            arg if !arg.starts_with("--") => {
                if path.is_some() {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                path = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let path = path.ok_or_else(|| "Missing required argument: PATH".to_string())?;
    Ok(DownloadArgs { path, dest })
}

fn parse_stats_args(args: &[String]) -> std::result::Result<StatsArgs, String> {
    let mut stats = StatsArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--json" => stats.json = true,
            "--out" => stats.out = Some(take_value(args, &mut i, "--out")?.to_string()),
            arg if !arg.starts_with("--") => return Err(format!("Unexpected argument: {arg}")),
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(stats)
}

fn parse_watch_args(args: &[String]) -> std::result::Result<WatchArgs, String> {
    let mut watch = WatchArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--out" => watch.out = Some(take_value(args, &mut i, "--out")?.to_string()),
            "--ticks" => {
                let ticks: u64 = take_value(args, &mut i, "--ticks")?
                    .parse()
                    .map_err(|_| "--ticks must be a positive integer".to_string())?;
                if ticks == 0 {
                    return Err("--ticks must be greater than zero".to_string());
                }
                watch.ticks = Some(ticks);
            }
            arg if !arg.starts_with("--") => return Err(format!("Unexpected argument: {arg}")),
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    Ok(watch)
}

fn parse_cleanup_args(args: &[String]) -> std::result::Result<CleanupArgs, String> {
    let mut days = None;
    let mut out = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--out" => out = Some(take_value(args, &mut i, "--out")?.to_string()),
            arg if !arg.starts_with("--") => {
                if days.is_some() {
                    return Err(format!("Unexpected argument: {arg}"));
                }
                days = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let days = days.ok_or_else(|| "Missing required argument: DAYS".to_string())?;
    Ok(CleanupArgs { days, out })
}

/// Map a library error to the process exit code.
#[must_use]
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::InvalidInput(_) | Error::Config(_) => 2,
        Error::Api { .. } => 3,
        Error::Transport(_) | Error::Malformed(_) | Error::Io(_) => 4,
    }
}
