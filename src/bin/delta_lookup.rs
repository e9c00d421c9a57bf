//! Option Delta lookup
//!
//! Fetches live spot, history and option chain for a ticker and prints the
//! Black-Scholes Delta of the listed contract nearest the requested strike.

use std::path::PathBuf;
use std::process;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use derivlab::prelude::*;

#[derive(Parser)]
#[command(
    name = "delta-lookup",
    version,
    about = "Look up the Black-Scholes Delta of a listed option"
)]
struct Args {
    /// Underlying ticker
    #[arg(long, short, default_value = "AAPL")]
    ticker: String,

    /// Option type
    #[arg(long = "type", default_value = "call", value_parser = parse_option_type)]
    option_type: OptionType,

    /// Expiration date (YYYY-MM-DD); nearest listed when omitted
    #[arg(long, short)]
    expiry: Option<NaiveDate>,

    /// Desired strike; middle of the chain when omitted
    #[arg(long, short)]
    strike: Option<f64>,

    /// Volatility override (0.25 = 25%); historical estimate when omitted
    #[arg(long)]
    volatility: Option<f64>,

    /// Only list available expirations
    #[arg(long)]
    list_expirations: bool,

    /// Path to configuration file (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_option_type(s: &str) -> Result<OptionType, String> {
    s.parse::<OptionType>().map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    let config = match DerivConfig::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args, config: &DerivConfig) -> DerivResult<()> {
    let client = YahooClient::new(config)?;

    if args.list_expirations {
        let ticker = args.ticker.trim().to_uppercase();
        let expirations = client.expirations(&ticker)?;
        if expirations.is_empty() {
            return Err(DerivError::no_contracts(format!("{} has no listed options", ticker)));
        }
        println!("Available expirations for {}:", ticker);
        for expiry in expirations.iter().take(config.max_expirations) {
            println!("  {}", expiry);
        }
        return Ok(());
    }

    let mut request = DeltaRequest::new(args.ticker.as_str(), args.option_type);
    request.expiry = args.expiry;
    request.strike = args.strike;
    request.volatility = args.volatility;

    let estimator = DeltaEstimator::new(&client, config);
    let report = estimator.lookup(&request, Local::now().naive_local())?;

    match args.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| DerivError::Serialization(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &DeltaReport) {
    let est = &report.estimate;

    println!("{} {} expiring {}", report.ticker, est.option_type, est.expiry);
    println!("==========================\n");
    println!("  Spot:        ${:.2}", est.spot);
    println!("  Strike:      ${:.2} (requested {:.2})", est.strike, report.requested_strike);
    if let Some(symbol) = &report.contract_symbol {
        println!("  Contract:    {}", symbol);
    }
    println!("  Time:        {:.0} days", est.time_to_expiry * 365.0);
    println!("  Rate:        {:.1}%", est.risk_free_rate * 100.0);
    let source = match est.vol_source {
        VolSource::User => "user",
        VolSource::Historical => "historical",
    };
    println!("  Vol:         {:.1}% ({})\n", est.volatility * 100.0, source);

    println!("Delta: {:.4}", est.delta);
    println!("  {}\n", report.moneyness.description());

    match report.implied_vol {
        Some(iv) => println!("  Implied vol:   {:.2}%", iv * 100.0),
        None => println!("  Implied vol:   N/A"),
    }
    match report.last_price {
        Some(p) => println!("  Last price:    ${:.2}", p),
        None => println!("  Last price:    N/A"),
    }
    match report.mid_price {
        Some(p) => println!("  Mid price:     ${:.2}", p),
        None => println!("  Mid price:     N/A"),
    }
    match report.open_interest {
        Some(oi) => println!("  Open interest: {}", oi),
        None => println!("  Open interest: N/A"),
    }

    println!("\nDelta is the change in option price for a $1 move in the underlying.");
}
