//! Armada CLI - Checks for Multi-Chain Testnets
//!
//! Run checks against a deployed topology to verify that chain nodes,
//! relayers and funded accounts look the way the topology file says they
//! should.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use armada::api::{start_api_server, ApiState};
use armada::checks::{registry::CHECKS, Check, CheckContext};
use armada::config::{resolve_config_path, Config, Expectations, CONFIG_ENV_VAR};

/// Armada - checks for multi-chain testnets
#[derive(Debug, Parser)]
#[command(name = "armada")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run checks against a deployed topology
    Check {
        /// Path to the topology file (falls back to $ARMADA_CONFIG, then the default)
        #[arg(short, long)]
        config: Option<String>,

        /// Specific checks to run (comma-separated)
        #[arg(short = 'C', long)]
        checks: Option<String>,

        /// Start HTTP status API on this port
        #[arg(long)]
        api_port: Option<u16>,

        /// Keep running after checks complete (for API access)
        #[arg(long)]
        keep_alive: bool,
    },

    /// Generate a default topology file
    Init {
        /// Output file path
        #[arg(short, long, default_value = "configs/two-chain.yaml")]
        output: String,
    },

    /// List available checks
    List,

    /// Validate a topology file
    Validate {
        /// Path to the topology file
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn setup_logging(verbose: bool, json: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.json);

    // The environment is read exactly once; everything below works on the
    // resolved path.
    let env_config = std::env::var(CONFIG_ENV_VAR).ok();

    match cli.command {
        Commands::Check {
            config,
            checks: check_filter,
            api_port,
            keep_alive,
        } => {
            let config_path = resolve_config_path(config.as_deref(), env_config.as_deref());
            run_checks(&config_path, check_filter.as_deref(), api_port, keep_alive).await
        }

        Commands::Init { output } => init_config(&output),

        Commands::List => {
            list_checks();
            Ok(())
        }

        Commands::Validate { config } => {
            let config_path = resolve_config_path(config.as_deref(), env_config.as_deref());
            validate_config(&config_path)
        }
    }
}

/// Run checks against a topology
async fn run_checks(
    config_path: &Path,
    check_filter: Option<&str>,
    api_port: Option<u16>,
    keep_alive: bool,
) -> Result<()> {
    tracing::info!(config = %config_path.display(), "Loading topology");

    // A missing or malformed topology file aborts the whole run here,
    // before any check fires.
    let config = Config::from_file(config_path)
        .with_context(|| format!("Failed to load topology from {}", config_path.display()))?;

    tracing::info!(
        chains = config.chains.len(),
        relayers = config.relayers.len(),
        "Topology loaded"
    );

    let expectations = Expectations::for_config_file(config_path);
    let ctx = CheckContext::new(Arc::new(config), expectations);

    // Determine which checks to run
    let checks_to_run: Vec<Arc<dyn Check>> = if let Some(filter) = check_filter {
        // Run specific checks
        filter
            .split(',')
            .filter_map(|name| {
                let name = name.trim();
                CHECKS.get(name).cloned().or_else(|| {
                    tracing::warn!(check = name, "Unknown check, skipping");
                    None
                })
            })
            .collect()
    } else {
        // Run all enabled checks from config
        CHECKS
            .iter()
            .filter(|(name, _)| ctx.config.is_check_enabled(name))
            .map(|(_, check)| check.clone())
            .collect()
    };

    if checks_to_run.is_empty() {
        tracing::warn!("No checks to run");
        return Ok(());
    }

    // Create API state
    let api_state = ApiState::new();
    api_state.set_total_checks(checks_to_run.len());

    // Start API server if port specified
    if let Some(port) = api_port {
        let state_clone = api_state.clone();
        tokio::spawn(async move {
            if let Err(e) = start_api_server(port, state_clone).await {
                tracing::error!(error = %e, "API server error");
            }
        });
        // Give the server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    tracing::info!(
        count = checks_to_run.len(),
        checks = ?checks_to_run.iter().map(|c| c.name()).collect::<Vec<_>>(),
        "Running checks"
    );

    // Checks are independent of each other and run as separate tasks;
    // each check probes its targets sequentially.
    let mut handles = Vec::new();
    for check in checks_to_run {
        let check_name = check.name().to_string();
        let ctx = ctx.clone();
        let api_state = api_state.clone();

        handles.push(tokio::spawn(async move {
            tracing::info!(check = %check_name, "Starting check");
            api_state.start_check(&check_name);

            let result = check.run(&ctx).await;
            (check_name, result, api_state)
        }));
    }

    // Wait for all checks to complete and collect results
    let mut all_passed = true;
    for handle in handles {
        match handle.await {
            Ok((check_name, result, api_state)) => match result {
                Ok(result) => {
                    let passed = result.passed;
                    if passed {
                        tracing::info!(
                            check = %check_name,
                            duration_ms = result.duration.as_millis(),
                            message = ?result.message,
                            "Check PASSED"
                        );
                    } else {
                        tracing::error!(
                            check = %check_name,
                            duration_ms = result.duration.as_millis(),
                            message = ?result.message,
                            failed_targets = result.target_results.iter().filter(|r| !r.passed).count(),
                            "Check FAILED"
                        );
                        all_passed = false;
                    }

                    // Log individual target results at debug level
                    for target_result in &result.target_results {
                        if target_result.passed {
                            tracing::debug!(
                                check = %check_name,
                                target = %target_result.target,
                                "Target passed"
                            );
                        } else {
                            tracing::warn!(
                                check = %check_name,
                                target = %target_result.target,
                                error = ?target_result.error,
                                "Target failed"
                            );
                        }
                    }

                    // Record result in API state
                    api_state.record_result(result);
                }
                Err(e) => {
                    tracing::error!(check = %check_name, error = %e, "Check error");
                    all_passed = false;
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Check task panicked");
                all_passed = false;
            }
        }
    }

    // Mark completion
    api_state.complete(all_passed);

    if all_passed {
        tracing::info!("All checks PASSED");
    } else {
        tracing::error!("Some checks FAILED");
    }

    // If keep_alive is set and API is running, wait forever
    if keep_alive && api_port.is_some() {
        tracing::info!("Keeping alive for API access. Press Ctrl+C to exit.");
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        }
    }

    if all_passed {
        Ok(())
    } else {
        anyhow::bail!("Some checks FAILED")
    }
}

/// Generate a default topology file
fn init_config(output: &str) -> Result<()> {
    let config = Config::default_config();
    let yaml = config.to_yaml().context("Failed to serialize topology")?;

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(output, &yaml)
        .with_context(|| format!("Failed to write topology to {output}"))?;

    tracing::info!(path = %output, "Topology file created");
    println!("Created {output}");
    println!();
    println!("Edit the file to match your deployment, then run:");
    println!("  armada check --config {output}");

    Ok(())
}

/// List available checks
fn list_checks() {
    println!("Available checks:");
    println!();

    for (name, check) in CHECKS.iter() {
        println!("  {name:16} - {}", check.description());
    }

    println!();
    println!("Run specific checks with:");
    println!("  armada check --checks chain-status,relayer-state");
}

/// Validate a topology file
fn validate_config(config_path: &Path) -> Result<()> {
    tracing::info!(config = %config_path.display(), "Validating topology");

    let config = Config::from_file(config_path)
        .with_context(|| format!("Failed to load topology from {}", config_path.display()))?;

    println!("Topology is valid!");
    println!();
    println!("Chains: {}", config.chains.len());
    for chain in &config.chains {
        println!(
            "  - {} ({}, {} validators, rpc:{} rest:{})",
            chain.id, chain.name, chain.num_validators, chain.ports.rpc, chain.ports.rest
        );
    }

    println!("Relayers: {}", config.relayers.len());
    for relayer in &config.relayers {
        println!(
            "  - {} ({}, chains: {})",
            relayer.name,
            relayer.relayer_type,
            relayer.chains.join(", ")
        );
    }

    if !config.checks.is_empty() {
        println!();
        println!("Checks configured: {}", config.checks.len());
        for (name, check_config) in &config.checks {
            let status = if check_config.enabled {
                "enabled"
            } else {
                "disabled"
            };
            println!("  - {name}: {status}");
        }
    }

    Ok(())
}
