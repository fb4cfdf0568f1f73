use anyhow::Result;
use clap::{Parser, Subcommand};

use appliance_energy::calculator::{DAYS_PER_MONTH, WATTS_PER_KILOWATT};
use appliance_energy::{classify, logging, ApplianceForm, CURRENCY, TARIFF_PER_KWH};

#[derive(Parser, Debug)]
#[command(name = "appliance-energy")]
#[command(about = "Estimate monthly electricity use and cost of household appliances")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate one appliance without starting the server
    Estimate {
        /// Appliance name
        #[arg(long)]
        name: String,
        /// Power draw in watts
        #[arg(long, allow_hyphen_values = true)]
        power: String,
        /// Hours of use per day
        #[arg(long, allow_hyphen_values = true)]
        hours: String,
    },
    /// Print the tariff constants used for every estimate
    Tariff,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    match cli.command {
        Commands::Estimate { name, power, hours } => run_estimate(&name, &power, &hours),
        Commands::Tariff => {
            run_tariff();
            Ok(())
        }
    }
}

fn run_estimate(name: &str, power: &str, hours: &str) -> Result<()> {
    let appliance = ApplianceForm::new(name, power, hours).validate()?;
    let entry = appliance.into_entry();
    let tier = classify(entry.monthly_energy_kwh());

    println!("🔌 {}", entry.name());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Power:        {} W", entry.power_watts());
    println!("   Usage:        {} h/day", entry.hours_per_day());
    println!("   Consumption:  {:.2} kWh/month", entry.monthly_energy_kwh());
    println!("   Cost:         {:.0} {}/month", entry.monthly_cost(), CURRENCY);
    println!("   Tier:         {}", tier.label());
    println!("   Advice:       {}", tier.recommendation());

    Ok(())
}

fn run_tariff() {
    println!("💡 Tariff: {} {}/kWh", TARIFF_PER_KWH, CURRENCY);
    println!("   Month length: {} days", DAYS_PER_MONTH);
    println!("   kWh = W × h/day ÷ {} × {}", WATTS_PER_KILOWATT, DAYS_PER_MONTH);
}
