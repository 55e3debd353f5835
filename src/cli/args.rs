//! CLI argument parsing

use crate::services::counter::DEFAULT_CHUNK_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Count(CountArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountArgs {
    pub path: String,
    pub chunk_size: usize,
    pub workers: Option<usize>,
    pub strategy_override: Option<String>,
    pub json: bool,
}

impl Default for CountArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: None,
            strategy_override: None,
            json: false,
        }
    }
}

/// Parse command line arguments (including the program name in `args[0]`)
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut count_args = CountArgs::default();
    let mut positionals = Vec::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--" => {
                positionals.extend(args[i + 1..].iter().cloned());
                break;
            }
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--chunk-size" => {
                i += 1;
                let value = args.get(i).ok_or("--chunk-size requires a value")?;
                let size: usize = value
                    .parse()
                    .map_err(|_| "--chunk-size must be a positive integer".to_string())?;
                if size == 0 {
                    return Err("--chunk-size must be greater than zero".to_string());
                }
                count_args.chunk_size = size;
            }
            "--workers" => {
                i += 1;
                let value = args.get(i).ok_or("--workers requires a value")?;
                let workers: usize = value
                    .parse()
                    .map_err(|_| "--workers must be a positive integer".to_string())?;
                if workers == 0 {
                    return Err("--workers must be greater than zero".to_string());
                }
                count_args.workers = Some(workers);
            }
            "--strategy" => {
                i += 1;
                let value = args.get(i).ok_or("--strategy requires a value")?;
                count_args.strategy_override = Some(value.clone());
            }
            "--json" => {
                count_args.json = true;
            }
            arg if arg == "-" || !arg.starts_with('-') => positionals.push(arg.to_string()),
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 1;
    }

    if positionals.len() != 1 {
        return Err(format!(
            "Not exactly 1 argument provided (got {})",
            positionals.len()
        ));
    }
    count_args.path = positionals.remove(0);

    Ok(Command::Count(count_args))
}
