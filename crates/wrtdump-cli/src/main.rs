use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use serde::Serialize;

use wrtdump_core::{Format, FormatMask, Nvram, escape};

#[derive(Parser, Debug)]
#[command(name = "wrtdump")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("WRTDUMP_BUILD_COMMIT"), " ", env!("WRTDUMP_BUILD_DATE"), ")"
))]
#[command(
    about = "Read, convert and export router NVRAM configuration backups.",
    long_about = None,
    after_help = "Examples:\n  wrtdump show backup.cfg\n  wrtdump export backup.cfg -o backup.json --pretty\n  wrtdump convert backup.cfg -o backup.txt --to text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect a dump's format and print its variables as escaped text.
    Show {
        /// Path to an NVRAM dump (any supported format)
        input: PathBuf,

        /// Restrict detection to these formats (repeatable; default: all)
        #[arg(long = "from", value_enum)]
        from: Vec<FormatArg>,

        /// Suppress the detected-format note on stderr
        #[arg(long)]
        quiet: bool,
    },
    /// Export a dump as JSON.
    Export {
        /// Path to an NVRAM dump (any supported format)
        input: PathBuf,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Restrict detection to these formats (repeatable; default: all)
        #[arg(long = "from", value_enum)]
        from: Vec<FormatArg>,
    },
    /// Convert a dump to another format.
    Convert {
        /// Path to an NVRAM dump (any supported format)
        input: PathBuf,

        /// Output path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Target format
        #[arg(long, value_enum)]
        to: FormatArg,

        /// Restrict detection to these formats (repeatable; default: all)
        #[arg(long = "from", value_enum)]
        from: Vec<FormatArg>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Asuswrt1,
    Asuswrt2,
    Tomato,
    Ddwrt,
    Text,
}

impl FormatArg {
    fn format(self) -> Format {
        match self {
            FormatArg::Asuswrt1 => Format::AsuswrtV1,
            FormatArg::Asuswrt2 => Format::AsuswrtV2,
            FormatArg::Tomato => Format::Tomato,
            FormatArg::Ddwrt => Format::DdWrt,
            FormatArg::Text => Format::Text,
        }
    }
}

fn detection_mask(from: &[FormatArg]) -> FormatMask {
    if from.is_empty() {
        return FormatMask::all();
    }
    from.iter()
        .fold(FormatMask::empty(), |mask, arg| mask | arg.format().mask())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { input, from, quiet } => cmd_show(input, &from, quiet),
        Commands::Export {
            input,
            output,
            stdout,
            pretty,
            compact,
            from,
        } => cmd_export(input, output, stdout, pretty, compact, &from),
        Commands::Convert {
            input,
            output,
            to,
            from,
            quiet,
        } => cmd_convert(input, output, to, &from, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

#[derive(Debug, Serialize)]
struct Export {
    format: String,
    variables: BTreeMap<String, String>,
}

fn cmd_show(input: PathBuf, from: &[FormatArg], quiet: bool) -> Result<(), CliError> {
    let nvram = load_dump(&input, from)?;
    if !quiet {
        if let Some(format) = nvram.format {
            eprintln!("format: {format}");
        }
    }
    for (key, value) in nvram.variables.iter() {
        println!("{}={}", escape::encode(key.as_bytes()), escape::encode(value));
    }
    Ok(())
}

fn cmd_export(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    from: &[FormatArg],
) -> Result<(), CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }

    let nvram = load_dump(&input, from)?;
    let export = Export {
        format: nvram
            .format
            .map(|format| format.to_string())
            .unwrap_or_default(),
        variables: nvram
            .variables
            .iter()
            .map(|(key, value)| (key.to_string(), escape::encode(value)))
            .collect(),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    }
    .context("JSON serialization failed")
    .map_err(CliError::from)?;

    if stdout {
        println!("{}", json);
        return Ok(());
    }

    let output = output.expect("output required when not using stdout");
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write export: {}", output.display()))?;
    Ok(())
}

fn cmd_convert(
    input: PathBuf,
    output: PathBuf,
    to: FormatArg,
    from: &[FormatArg],
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    ensure_output_differs(&resolved_input, &output)?;

    let mut nvram = load_dump(&input, from)?;
    let detected = nvram.format;
    nvram.format = Some(to.format());
    nvram.save(&output).map_err(|err| {
        CliError::new(
            format!("cannot save as {}: {}", to.format(), err),
            save_hint(&err),
        )
    })?;

    if !quiet {
        match detected {
            Some(detected) => {
                eprintln!("OK: {} -> {} written -> {}", detected, to.format(), output.display())
            }
            None => eprintln!("OK: written -> {}", output.display()),
        }
    }
    Ok(())
}

fn save_hint(err: &wrtdump_core::SaveError) -> Option<String> {
    match err {
        wrtdump_core::SaveError::HardwareTypeMissing
        | wrtdump_core::SaveError::HardwareTypeNotNumeric { .. } => Some(
            "Tomato dumps need a numeric .HardwareType variable".to_string(),
        ),
        _ => None,
    }
}

fn load_dump(input: &PathBuf, from: &[FormatArg]) -> Result<Nvram, CliError> {
    let resolved_input = resolve_input_path(input)?;
    if !resolved_input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", resolved_input.display()),
            Some("pass a supported NVRAM dump file".to_string()),
        ));
    }
    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", resolved_input.display()),
            Some("pass a supported NVRAM dump file".to_string()),
        ));
    }

    Nvram::load(&resolved_input, detection_mask(from)).map_err(|err| {
        CliError::new(
            format!("{}: {}", resolved_input.display(), err),
            Some("try --from to widen or narrow the candidate formats".to_string()),
        )
    })
}

fn ensure_output_differs(input: &PathBuf, output: &PathBuf) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input).unwrap_or_else(|_| input.clone());
    let output_dir = output
        .parent()
        .map(|parent| {
            if parent.as_os_str().is_empty() {
                fs::canonicalize(".")
            } else {
                fs::canonicalize(parent)
            }
        })
        .transpose()
        .ok()
        .flatten();
    if let (Some(dir), Some(name)) = (output_dir, output.file_name()) {
        if dir.join(name) == input_abs {
            return Err(CliError::new(
                format!("output path must differ from input: {}", output.display()),
                Some("choose a different output path".to_string()),
            ));
        }
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single dump file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
