use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn is_male(self) -> bool {
        self == Gender::Male
    }
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Total app foreground time in minutes
    #[arg(long)]
    pub app_usage: f64,

    /// Screen time in hours
    #[arg(long)]
    pub screen_time: f64,

    /// Number of installed apps
    #[arg(long)]
    pub num_apps: f64,

    /// Data usage in MB
    #[arg(long)]
    pub data_usage: f64,

    /// Age in years (defaults to the saved profile)
    #[arg(long)]
    pub age: Option<f64>,

    /// Gender (defaults to the saved profile)
    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Battery level in percent
    #[arg(short, long, default_value_t = 100.0)]
    pub battery: f32,

    /// Treat the device as charging
    #[arg(long)]
    pub charging: bool,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the TUI interface (default)
    #[command(alias = "tui")]
    Ui,

    /// Save profile answers without the TUI
    Onboard {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        age: String,

        #[arg(short, long, value_enum, default_value_t = Gender::Male)]
        gender: Gender,
    },

    /// Output drain reports in JSON format (suitable for piping)
    #[command(alias = "raw")]
    Pipe {
        /// Number of samples to output (0 = infinite)
        #[arg(short, long, default_value_t = 1)]
        samples: u32,

        /// Interval between samples in milliseconds
        #[arg(short, long, default_value_t = 5000)]
        interval: u64,

        /// Compact JSON output (one line per sample)
        #[arg(short, long)]
        compact: bool,
    },

    /// Run the drain model on explicit inputs
    Estimate(EstimateArgs),

    /// Print raw platform readings and paths
    Debug,

    /// Show or edit configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },
}

#[derive(Debug, Parser)]
#[command(name = "drainwatch", version, about, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::parse_from(["drainwatch"]);
        assert!(cli.command.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_estimate_args() {
        let cli = Cli::parse_from([
            "drainwatch",
            "estimate",
            "--app-usage",
            "60",
            "--screen-time",
            "2",
            "--num-apps",
            "50",
            "--data-usage",
            "500",
            "--gender",
            "female",
            "--log-level",
            "debug",
        ]);
        let Some(Commands::Estimate(args)) = cli.command else {
            panic!("expected estimate subcommand");
        };
        assert_eq!(args.app_usage, 60.0);
        assert_eq!(args.gender, Some(Gender::Female));
        assert_eq!(args.battery, 100.0);
        assert!(!args.charging);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_onboard_args() {
        let cli = Cli::parse_from(["drainwatch", "onboard", "-n", "Ada", "-a", "36"]);
        match cli.command {
            Some(Commands::Onboard { name, age, gender }) => {
                assert_eq!(name, "Ada");
                assert_eq!(age, "36");
                assert!(gender.is_male());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
