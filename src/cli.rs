use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Html,
}

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Register users and browse the user directory by region", version)]
#[command(after_help = "EXAMPLES:
    userdir register -n \"Kim Minji\" -r Seoul -e minji@example.com
    userdir search                    List all users
    userdir search -r Busan           List users in Busan
    userdir search -r Busan -o html   Render the result table as HTML")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, html)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show diagnostic logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new user
    #[command(after_help = "EXAMPLES:
    userdir register --name \"Kim Minji\" --region Seoul --email minji@example.com
    userdir register -n Lee -r Jeju -e lee@example.com --json")]
    Register(RegisterArgs),
    /// List users, optionally filtered by region
    #[command(
        alias = "users",
        after_help = "EXAMPLES:
    userdir search
    userdir search --region Seoul
    userdir search --region Seoul --format html > users.html"
    )]
    Search(SearchArgs),
    /// List the known region labels
    Regions,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdir completions bash > ~/.bash_completion.d/userdir
    userdir completions zsh > ~/.zfunc/_userdir
    userdir completions fish > ~/.config/fish/completions/userdir.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    userdir init")]
    Init,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long, short, default_value = "")]
    pub name: String,

    /// Region of residence (see `userdir regions`)
    #[arg(long, short, default_value = crate::constants::REGION_PLACEHOLDER)]
    pub region: String,

    /// Email address
    #[arg(long, short, default_value = "")]
    pub email: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Region to filter by (all regions when omitted)
    #[arg(long, short, default_value = "")]
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::constants::REGION_PLACEHOLDER;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn register_defaults_to_placeholder_region() {
        let cli = Cli::parse_from(["userdir", "register", "-n", "Kim"]);
        let Commands::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(args.name, "Kim");
        assert_eq!(args.region, REGION_PLACEHOLDER);
        assert_eq!(args.email, "");
    }

    #[test]
    fn search_without_region_is_unfiltered() {
        let cli = Cli::parse_from(["userdir", "search"]);
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert!(args.region.is_empty());
    }

    #[test]
    fn json_flag_overrides_format() {
        let cli = Cli::parse_from(["userdir", "search", "-o", "html", "--json"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let cli = Cli::parse_from(["userdir", "users", "-o", "html"]);
        assert_eq!(cli.output_format(), OutputFormat::Html);
    }
}
