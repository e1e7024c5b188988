//! TradePlan CLI — plan and preference commands.
//!
//! Commands:
//! - `plan` — compute a trade plan from flags or a TOML plan file, render
//!   it as text or JSON, optionally saving a timestamped artifact
//! - `account show` / `account set` — the persisted account-size preference

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use tradeplan_core::domain::{RiskBudget, TradeInputs};
use tradeplan_core::engine::{calculate_trade, TradeCalculation};

mod plan_file;
mod preferences;
mod render;

use plan_file::{parse_direction, PlanFile};

#[derive(Parser)]
#[command(
    name = "tradeplan",
    about = "TradePlan CLI — deterministic trade-planning calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a trade plan and print it.
    Plan {
        /// Path to a TOML plan file; replaces the individual input flags.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Trade direction: long or short.
        #[arg(long)]
        direction: Option<String>,

        /// Entry price.
        #[arg(long)]
        entry: Option<f64>,

        /// Volatility unit (e.g., a 14-bar ATR value).
        #[arg(long)]
        atr: Option<f64>,

        /// Stop distance in volatility units.
        #[arg(long, default_value_t = 2.0)]
        stop_multiple: f64,

        /// Target distance in R multiples.
        #[arg(long, default_value_t = 2.0)]
        target_r: f64,

        /// Trailing-stop magnitude in volatility units.
        #[arg(long, default_value_t = 1.0)]
        trailing_multiple: f64,

        /// Worse-price buffer between the entry trigger and its limit.
        #[arg(long, default_value_t = 0.0)]
        buffer: f64,

        /// Risk as a percent of the account. Conflicts with --risk-amount;
        /// defaults to 1 when neither is given.
        #[arg(long)]
        risk_percent: Option<f64>,

        /// Risk as a fixed dollar amount. Conflicts with --risk-percent.
        #[arg(long)]
        risk_amount: Option<f64>,

        /// Account size; defaults to the saved preference.
        #[arg(long)]
        account: Option<f64>,

        /// Emit the raw calculation record as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Save a timestamped JSON artifact of the calculation here.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Read or change the persisted account-size preference.
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Print the saved account size.
    Show,
    /// Save a new account size.
    Set {
        /// New account size in dollars.
        amount: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            config,
            direction,
            entry,
            atr,
            stop_multiple,
            target_r,
            trailing_multiple,
            buffer,
            risk_percent,
            risk_amount,
            account,
            json,
            output_dir,
        } => {
            let saved_account = preferences::load_account_size(&preferences::default_path());
            let account_size = account.unwrap_or(saved_account);

            let inputs = match config {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("cannot read plan file {}", path.display()))?;
                    PlanFile::parse(&content)?.into_inputs(account_size)?
                }
                None => inputs_from_flags(
                    direction,
                    entry,
                    atr,
                    stop_multiple,
                    target_r,
                    trailing_multiple,
                    buffer,
                    risk_percent,
                    risk_amount,
                    account_size,
                )?,
            };

            let calc = calculate_trade(&inputs);

            if json {
                println!("{}", serde_json::to_string_pretty(&calc)?);
            } else {
                print!("{}", render::render_calculation(&calc));
            }

            if let Some(dir) = output_dir {
                let path = save_artifact(&dir, &calc)?;
                eprintln!("saved {}", path.display());
            }

            if !calc.is_valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Account { action } => run_account(action),
    }
}

/// Build engine inputs from the individual `plan` flags.
#[allow(clippy::too_many_arguments)]
fn inputs_from_flags(
    direction: Option<String>,
    entry: Option<f64>,
    atr: Option<f64>,
    stop_multiple: f64,
    target_r: f64,
    trailing_multiple: f64,
    buffer: f64,
    risk_percent: Option<f64>,
    risk_amount: Option<f64>,
    account_size: f64,
) -> Result<TradeInputs> {
    let Some(direction) = direction else {
        bail!("--direction is required (or use --config)");
    };
    let Some(entry_price) = entry else {
        bail!("--entry is required (or use --config)");
    };
    let Some(volatility_unit) = atr else {
        bail!("--atr is required (or use --config)");
    };

    let risk_budget = match (risk_percent, risk_amount) {
        (Some(_), Some(_)) => bail!("--risk-percent and --risk-amount are mutually exclusive"),
        (None, Some(amount)) => RiskBudget::FixedDollar { amount },
        (Some(percent), None) => RiskBudget::PercentOfAccount {
            account_size,
            percent,
        },
        (None, None) => RiskBudget::PercentOfAccount {
            account_size,
            percent: 1.0,
        },
    };

    Ok(TradeInputs {
        direction: parse_direction(&direction)?,
        entry_price,
        volatility_unit,
        risk_budget,
        stop_multiple,
        target_r_multiple: target_r,
        trailing_multiple,
        entry_buffer: buffer,
    })
}

/// Write the calculation to `<dir>/plan_<timestamp>.json`.
fn save_artifact(dir: &Path, calc: &TradeCalculation) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output dir {}", dir.display()))?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("plan_{stamp}.json"));
    let json = serde_json::to_string_pretty(calc)?;
    std::fs::write(&path, json)
        .with_context(|| format!("cannot write artifact {}", path.display()))?;
    Ok(path)
}

fn run_account(action: AccountAction) -> Result<()> {
    let path = preferences::default_path();
    match action {
        AccountAction::Show => {
            let account_size = preferences::load_account_size(&path);
            println!("account size: {}", render::format_currency(account_size));
            Ok(())
        }
        AccountAction::Set { amount } => {
            if !amount.is_finite() || amount <= 0.0 {
                bail!("account size must be a positive number");
            }
            preferences::save_account_size(&path, amount)?;
            println!("account size set to {}", render::format_currency(amount));
            Ok(())
        }
    }
}
