use clap::Parser;
use roster_repos::core::{CommandRunner, ConfigProvider};
use roster_repos::utils::error::{ErrorSeverity, Result};
use roster_repos::utils::{logger, validation::Validate};
use roster_repos::{
    load_roster, CliConfig, DryRunRunner, LogFormat, ProcessRunner, ProvisionError, Provisioner,
};

fn exit_with(e: &ProvisionError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run_batch<R: CommandRunner>(runner: R, config: CliConfig) -> Result<()> {
    let records = load_roster(config.csv_file())?;

    let provisioner = Provisioner::new(runner, config);
    for outcome in provisioner.run(&records).await {
        tracing::info!("{}", outcome);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting create-gh-repos for semester {}", config.semester);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let result = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - commands are printed, not executed");
        run_batch(DryRunRunner, config).await
    } else {
        run_batch(ProcessRunner::new(), config).await
    };

    if let Err(e) = result {
        exit_with(&e);
    }
}
