use std::process::ExitCode;

use accordion_a11y::audit::audit_reachable_states;
use accordion_a11y::config::Config;
use accordion_a11y::error::AuditError;
use accordion_a11y::report::{generate_report, Summary};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(code) => code,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, AuditError> {
    let config = Config::from_env()?;
    let controller = config.load_controller()?;

    log::info!(
        "Auditing accordion \"{}\" with {} section(s)",
        controller.label(),
        controller.len()
    );

    let audits = audit_reachable_states(&controller);
    let summary = Summary::from_audits(&audits);

    println!("{}", generate_report(&audits, config.format)?);

    log::info!(
        "Audit finished: {} error(s), {} warning(s) across {} state(s)",
        summary.errors,
        summary.warnings,
        summary.states
    );

    let failed = summary.errors > 0 || (config.fail_on_warning && summary.warnings > 0);
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
