//! Access Check CLI - inspect and audit the talentgate access policy
//!
//! Usage:
//!   cargo run --bin access_check -- decide --role candidate --path /candidates
//!   cargo run --bin access_check -- routes --role recruiter
//!   cargo run --bin access_check -- validate
//!   cargo run --bin access_check -- audit config/access-audit.yaml

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use talentgate::policy::{
    permissions_for, validate_registry, PolicyFingerprint, Principal, Role, RouteGuard,
    RouteRegistry,
};
use talentgate::{navigate, run_audit, AuditConfig, StaticSession};

#[derive(Parser)]
#[command(name = "access_check")]
#[command(about = "Inspect and audit the role-based route policy")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Decide a single navigation
    Decide {
        #[command(flatten)]
        who: Who,

        /// Requested path
        #[arg(short, long)]
        path: String,
    },
    /// List the routes a role may enter
    Routes {
        #[arg(short, long)]
        role: Role,
    },
    /// Show the capability flags of a role
    Permissions {
        #[arg(short, long)]
        role: Role,
    },
    /// Check the route table invariants and print its fingerprint
    Validate,
    /// Run a YAML scenario file
    Audit {
        /// Scenario file
        #[arg(env = "ACCESS_AUDIT_FILE", default_value = "config/access-audit.yaml")]
        file: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Who {
    /// Signed in with this role
    #[arg(short, long)]
    role: Option<Role>,

    /// Signed in without a role
    #[arg(long)]
    no_role: bool,

    /// Not signed in
    #[arg(long)]
    anonymous: bool,
}

impl Who {
    fn principal(&self) -> Principal {
        match (self.role, self.no_role) {
            (Some(role), _) => Principal::authenticated(role),
            (None, true) => Principal::without_role(),
            (None, false) => Principal::anonymous(),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let guard = RouteGuard::standard();

    match cli.command {
        Command::Decide { who, path } => {
            let session = StaticSession::new(who.principal());
            let decision = navigate(&guard, &session, &path);
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&decision)?),
                Format::Text => {
                    println!("{}", decision);
                    if let Some(active) = guard.resolver().active_menu_path(&path) {
                        println!("Active menu: {}", active);
                    }
                }
            }
        }
        Command::Routes { role } => {
            let routes = guard.resolver().accessible_routes(role);
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&routes)?),
                Format::Text => {
                    println!("=== Routes for {} ===", role);
                    for entry in routes {
                        match entry.menu_parent {
                            Some(parent) => println!(
                                "  {:<24} {:<20} (under {})",
                                entry.path, entry.label, parent
                            ),
                            None => println!("  {:<24} {}", entry.path, entry.label),
                        }
                    }
                    println!("Landing page: {}", talentgate::policy::default_route(Some(role)));
                }
            }
        }
        Command::Permissions { role } => {
            let flags = permissions_for(role).flags();
            println!("{}", serde_json::to_string_pretty(&flags)?);
        }
        Command::Validate => {
            let registry = RouteRegistry::standard();
            let fingerprint = PolicyFingerprint::compute(&registry);
            if let Err(errors) = validate_registry(&registry) {
                for error in &errors {
                    eprintln!("  {}", error);
                }
                bail!("route table has {} invariant violation(s)", errors.len());
            }
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&fingerprint)?),
                Format::Text => {
                    println!("Routes:       {}", fingerprint.routes);
                    println!("Fingerprint:  {}", fingerprint.hash);
                    println!("Invariants:   PASSED");
                }
            }
        }
        Command::Audit { file } => {
            let config = AuditConfig::load(&file)?;
            let report = run_audit(&guard, &config);
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                Format::Text => {
                    println!("=== Access Audit ({}) ===", file.display());
                    for outcome in &report.outcomes {
                        let status = if outcome.passed() { "PASS" } else { "FAIL" };
                        println!("  [{}] {} -> {}", status, outcome.name, outcome.actual);
                    }
                }
            }
            let failures = report.failures();
            if !failures.is_empty() {
                for failure in &failures {
                    eprintln!("  {}", failure);
                }
                bail!("{} of {} scenario(s) failed", failures.len(), report.outcomes.len());
            }
        }
    }

    Ok(())
}
