//! Rate quote binary
//!
//! Usage: `rate-quote <BED_TYPE> <DAYS> [PAYMENT_TYPE]`

use anyhow::{anyhow, bail, Context, Result};
use clinica_billing::{format::format_currency, BillingConfig, DailyRateCalculator, Quote};
use clinica_common::{BedType, PaymentType};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: rate-quote <BED_TYPE> <DAYS> [PAYMENT_TYPE]
rates are read from CLINICA_RATES_FILE (default ./demos/rates.json)";

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
struct QuoteArgs {
    bed_type: BedType,
    days: u32,
    /// Compare every payment type when absent
    payment_type: Option<PaymentType>,
}

fn parse_args(args: &[String]) -> Result<QuoteArgs> {
    if args.len() < 2 || args.len() > 3 {
        bail!(USAGE);
    }

    let bed_type = args[0].parse::<BedType>().map_err(|e| anyhow!("{}\n{}", e, USAGE))?;
    let days = args[1]
        .parse::<u32>()
        .with_context(|| format!("invalid day count: {}", args[1]))?;
    let payment_type = args
        .get(2)
        .map(|p| p.parse::<PaymentType>().map_err(|e| anyhow!("{}\n{}", e, USAGE)))
        .transpose()?;

    Ok(QuoteArgs {
        bed_type,
        days,
        payment_type,
    })
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let QuoteArgs {
        bed_type,
        days,
        payment_type,
    } = parse_args(&args)?;

    let config = BillingConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let calculator = DailyRateCalculator::from_config(config)?;

    match payment_type {
        Some(payment_type) => match calculator.quote(payment_type, bed_type, days)? {
            Some(quote) => print_quote(&quote),
            None => println!(
                "{} / {}: pricing not configured for these parameters",
                payment_type.label(),
                bed_type.label()
            ),
        },
        None => {
            let comparison = calculator.compare(bed_type, days)?;
            println!("{} - {} day(s)", bed_type.label(), days);
            for payment_type in PaymentType::ALL {
                match comparison.get(payment_type) {
                    Some(result) => println!(
                        "  {:<12} {:>16}  ({} / day)",
                        payment_type.label(),
                        format_currency(result.total_cost, calculator.currency()),
                        format_currency(result.daily_value, calculator.currency()),
                    ),
                    None => println!("  {:<12} not configured", payment_type.label()),
                }
            }
            if let Some((cheapest, _)) = comparison.cheapest() {
                println!("Lowest total: {}", cheapest.label());
            }
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote) {
    let result = &quote.result;
    println!(
        "{} / {} - {} day(s)",
        result.payment_type.label(),
        result.bed_type.label(),
        result.days
    );
    println!("  Daily value:     {}", quote.daily);
    println!("  Total:           {}", quote.total);
    println!("  Base cost:       {}", quote.base);
    match &result.applied_tier {
        Some(tier) => println!(
            "  Tier {}-{} days:  {} ({})",
            tier.min_days, tier.max_days, quote.adjustment, quote.percentage
        ),
        None => println!("  No tier applied"),
    }
}
