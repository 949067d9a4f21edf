use clap::Parser;
use time::Duration;

fn parse_signed_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("duration cannot be empty (expected e.g. 90s, 3h20m, -45m)".to_string());
    }

    let (negative, magnitude) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let std_duration = humantime::parse_duration(magnitude.trim())
        .map_err(|_| format!("invalid duration '{s}' (expected e.g. 90s, 3h20m, -45m)"))?;

    let duration =
        Duration::try_from(std_duration).map_err(|_| format!("duration '{s}' is too large"))?;

    Ok(if negative { -duration } else { duration })
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text phrase.
    HumanReadable,
    /// Emit a single JSON object to stdout.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "roughly",
    version,
    about = "Describe a duration in rough, human-friendly words",
    long_about = "roughly turns a signed duration into a coarse phrase such as \"about 2 hours ago\" or \"in 3 minutes\".\n\nA negative duration reads as a point in the future, a positive one as a point in the past. Month and year lengths are rough averages (30.5 days and 365 days).",
    after_help = "Examples:\n  roughly 92s\n  roughly -45m\n  roughly 719h59m40s --bare\n  roughly 92s --output json"
)]
pub struct Cli {
    /// Signed duration to describe (e.g. 90s, 3h20m, -45m)
    #[arg(value_parser = parse_signed_duration, allow_hyphen_values = true)]
    pub duration: Duration,

    /// Print the phrase without the past/future indicator
    #[arg(long)]
    pub bare: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::HumanReadable)]
    pub output: OutputFormat,
}
