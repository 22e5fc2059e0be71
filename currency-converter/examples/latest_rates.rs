//! Fetches live rates and converts an amount with the shared converter.
//!
//! Requires `EXCHANGE_RATES_API_KEY` in the environment or a `.env` file.
//!
//! Run with: cargo run -p currency-converter --example latest_rates

use currency_converter::{ConverterOptions, Currency, ExchangeRateConverter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,currency_converter=debug,converter_client=debug".into()),
        )
        .init();

    let converter = currency_converter::setup(ConverterOptions::new())?;

    let targets = [Currency::GBP, Currency::JPY, Currency::EUR];
    let rates = converter.get_exchange_rate(Currency::USD, &targets).await?;
    println!("1 USD =");
    for currency in targets {
        match rates.get(&currency) {
            Some(rate) => println!("   {} {:.4}", currency.symbol(), rate),
            None => println!("   {} (not quoted)", currency),
        }
    }

    let shared = currency_converter::shared()?;
    let yen = shared.convert(25.0, Currency::GBP, Currency::JPY).await?;
    println!("£25 = ¥{:.2}", yen);

    let amounts = shared.convert_many(25.0, Currency::GBP, &targets).await?;
    for (currency, amount) in amounts {
        println!("£25 = {}{:.2}", currency.symbol(), amount);
    }

    Ok(())
}
