use std::str::FromStr;

/// How `fib-iter` gets from the start pair to the final one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fast doubling, only for the wrapping policy
    #[default]
    Jump,

    /// One step at a time
    Loop,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jump" => Ok(Self::Jump),
            "loop" => Ok(Self::Loop),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

pub fn log_level(level: &str) -> log::LevelFilter {
    match level {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "info" => log::LevelFilter::Info,
        _ => log::LevelFilter::Info,
    }
}
