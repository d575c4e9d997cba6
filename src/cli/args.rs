use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "passgauge", version, about = "Password generator with strength scoring")]
pub struct Args {
    /// Characters per password (4-128)
    #[arg(short, long, value_name = "N")]
    pub length: Option<String>,

    /// How many passwords to generate
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub number: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Draw from the OS CSPRNG instead of the default generator
    #[arg(short, long)]
    pub urandom: bool,

    /// Print the strength label next to each password
    #[arg(short = 'S', long)]
    pub strength: bool,

    /// Score a password instead of generating one ("-" reads stdin)
    #[arg(long, value_name = "PASSWORD", allow_hyphen_values = true)]
    pub check: Option<String>,

    /// Start from the saved settings file
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Suppress everything except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter, e.g. "debug" or "passgauge=trace"
    #[arg(long, env = "PASSGAUGE_LOG", default_value = "warn")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generation_flags() {
        let args = Args::try_parse_from([
            "passgauge",
            "-l",
            "20",
            "-n",
            "3",
            "--no-symbols",
            "-S",
        ])
        .unwrap();
        assert_eq!(args.length.as_deref(), Some("20"));
        assert_eq!(args.number, Some(3));
        assert!(args.no_symbols);
        assert!(args.strength);
        assert!(!args.no_lower);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = Args::try_parse_from(["passgauge", "-n", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(Args::try_parse_from(["passgauge", "-n", "1"]).is_ok());
    }

    #[test]
    fn check_accepts_stdin_marker() {
        let args = Args::try_parse_from(["passgauge", "--check", "-"]).unwrap();
        assert_eq!(args.check.as_deref(), Some("-"));
    }

    #[test]
    fn length_stays_raw() {
        let args = Args::try_parse_from(["passgauge", "--length", "abc"]).unwrap();
        assert_eq!(args.length.as_deref(), Some("abc"));
    }
}
