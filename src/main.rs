use anyhow::Context;
use assessment_submitter::core::report;
use assessment_submitter::utils::{logger, validation::Validate};
use assessment_submitter::{CliArgs, Orchestrator, ReqwestTransport, StaticSolution, TomlConfig};
use clap::Parser;
use std::process::ExitCode;

const CONFIG_ERROR_EXIT: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting assessment-submitter");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // Load configuration
    let (config, solution) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
    };

    if args.dry_run {
        perform_dry_run(&config, &solution);
        return ExitCode::SUCCESS;
    }

    // Build the HTTP transport and the run
    let transport = match ReqwestTransport::new(config.connect_timeout(), config.request_timeout()) {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            return ExitCode::FAILURE;
        }
    };

    let identity = config.identity();
    let orchestrator = Orchestrator::new(transport, config.webhook_endpoint(), solution)
        .with_policy(config.rejection_policy());
    report::log_run_header(&identity, orchestrator.webhook_endpoint());

    // Execute
    let run = orchestrator.run(&identity).await;

    report::log_run_footer(&run);
    println!("{}", report::summary_line(&run.terminal));

    ExitCode::from(run.terminal.exit_code() as u8)
}

fn load(args: &CliArgs) -> anyhow::Result<(TomlConfig, StaticSolution)> {
    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;
    args.apply_overrides(&mut config);

    config.validate().map_err(|e| {
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        anyhow::Error::new(e).context("Configuration validation failed")
    })?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let solution = match &config.submission.query_file {
        Some(path) => StaticSolution::from_file(path)
            .with_context(|| format!("Failed to load solution query from '{}'", path))?,
        None => StaticSolution::default(),
    };

    Ok((config, solution))
}

fn perform_dry_run(config: &TomlConfig, solution: &StaticSolution) {
    use assessment_submitter::SolutionProvider;

    tracing::info!("🔍 DRY RUN MODE - no requests will be sent");
    println!("📋 Configuration Summary:");
    println!("  Candidate: {}", config.candidate.name);
    println!("  Registration Number: {}", config.candidate.reg_no);
    println!("  Email: {}", config.candidate.email);
    println!("  Webhook endpoint: {}", config.webhook_endpoint());
    println!(
        "  Timeouts: connect {}s, request {}s",
        config.http.connect_timeout_seconds, config.http.request_timeout_seconds
    );
    println!("  Rejection policy: {:?}", config.rejection_policy());
    println!();
    println!("📝 Query to submit:");
    println!("{}", solution.query().trim_end());
}
