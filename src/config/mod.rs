pub mod toml_config;

use clap::Parser;
use self::toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "assessment-submitter")]
#[command(about = "Requests a webhook and submits the SQL solution to it")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "submitter.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Show what would be submitted without calling any endpoint
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Override candidate.name")]
    pub name: Option<String>,

    #[arg(long, help = "Override candidate.reg_no")]
    pub reg_no: Option<String>,

    #[arg(long, help = "Override candidate.email")]
    pub email: Option<String>,

    #[arg(long, help = "Override webhook.generate_url")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Treat a rejected submission as a failure")]
    pub strict: bool,
}

impl CliArgs {
    /// Command line values win over the file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(name) = &self.name {
            config.candidate.name = name.clone();
        }
        if let Some(reg_no) = &self.reg_no {
            config.candidate.reg_no = reg_no.clone();
        }
        if let Some(email) = &self.email {
            config.candidate.email = email.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.webhook.generate_url = endpoint.clone();
        }
        if self.strict {
            config.submission.strict = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = TomlConfig::from_toml_str(
            r#"
[candidate]
name = "File Name"
reg_no = "REG1"
email = "file@b.c"

[webhook]
generate_url = "https://file.example.com/generate"
"#,
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "assessment-submitter",
            "--email",
            "cli@b.c",
            "--endpoint",
            "http://localhost:9000/generate",
            "--strict",
        ]);
        args.apply_overrides(&mut config);

        assert_eq!(config.candidate.name, "File Name");
        assert_eq!(config.candidate.email, "cli@b.c");
        assert_eq!(config.webhook.generate_url, "http://localhost:9000/generate");
        assert!(config.submission.strict);
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["assessment-submitter"]);
        assert_eq!(args.config, "submitter.toml");
        assert!(!args.dry_run);
        assert!(!args.strict);
    }
}
