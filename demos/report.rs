//! Walks through the whole SDK against the live API.
//!
//! ```sh
//! RUST_LOG=info cargo run --example report -- <api-key> <app-id> ["★ Butterfly Knife | Gamma Doppler"]
//! ```

use skinbaron_sdk::analysis::{price_prediction, price_trend, FilterParams};
use skinbaron_sdk::models::ForecastRow;
use skinbaron_sdk::SkinBaronSdk;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(api_key), Some(app_id)) = (args.next(), args.next()) else {
        eprintln!("usage: report <api-key> <app-id> [item name]");
        std::process::exit(2);
    };
    let item = args
        .next()
        .unwrap_or_else(|| "★ Butterfly Knife | Gamma Doppler".to_string());

    let sdk = SkinBaronSdk::builder().credentials(api_key, app_id).build()?;
    println!("{}", sdk);

    let price_list = sdk.price_list()?;
    println!("price list: {} entries", price_list.len());
    println!("====================================");

    let listings = sdk.filter_items(100, &FilterParams::default())?;
    println!("filtered items:\n{}", listings);
    println!("====================================");

    let report = sdk.reports().build_report(&item, false, false, None)?;
    println!("{}", report.summary);
    println!("====================================");

    let trend = price_trend(&report.table)?;
    println!("price trend:\n{}", trend);
    println!("====================================");

    let forecast = price_prediction(&trend)?;
    for row in forecast.into_records::<ForecastRow>()? {
        println!(
            "{}: predicted {:.2} in 7 days (lowest now {:?})",
            row.trend.label, row.predicted_price_7_days, row.trend.row.lowest_price
        );
    }

    Ok(())
}
