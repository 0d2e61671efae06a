//! Smoke test against the live SkinBaron API.
//!
//! Needs a real account. Run with:
//! ```sh
//! SKINBARON_API_KEY=... SKINBARON_APP_ID=... cargo test -- --ignored --nocapture
//! ```

use skinbaron_sdk::analysis::{price_prediction, price_trend, FilterParams};
use skinbaron_sdk::models::{ForecastRow, Listing};
use skinbaron_sdk::SkinBaronSdk;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

/// Counters for pass/fail/skip reporting.
struct Counters {
    pass: usize,
    fail: usize,
    skip: usize,
}

impl Counters {
    fn new() -> Self {
        Self {
            pass: 0,
            fail: 0,
            skip: 0,
        }
    }

    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }

    fn skip(&mut self, label: &str, reason: &str) {
        self.skip += 1;
        eprintln!("  [SKIP] {} -- {}", label, reason);
    }
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn smoke_test() {
    let (Ok(api_key), Ok(app_id)) = (
        std::env::var("SKINBARON_API_KEY"),
        std::env::var("SKINBARON_APP_ID"),
    ) else {
        eprintln!("SKINBARON_API_KEY / SKINBARON_APP_ID not set, skipping");
        return;
    };

    let sdk = SkinBaronSdk::builder()
        .credentials(api_key, app_id)
        .build()
        .unwrap();
    let mut c = Counters::new();

    // ================================================================
    // 1. PRICE LIST
    // ================================================================
    section("Price list");

    match sdk.price_list() {
        Ok(table) => {
            c.check("price list loads", !table.is_empty(), &format!("{} items", table.len()));
            c.check("has marketHashName", table.has_column("marketHashName"), "");
        }
        Err(e) => c.check("price list loads", false, &e.to_string()),
    }

    // ================================================================
    // 2. LISTINGS
    // ================================================================
    section("Newest items / best deals");

    let newest = sdk.newest_items(10);
    c.check(
        "newest_items(10)",
        newest.as_ref().is_ok_and(|t| t.len() <= 10),
        &format!("{:?}", newest.as_ref().map(|t| t.len())),
    );

    let deals = sdk.best_deals(10);
    c.check(
        "best_deals(10)",
        deals.is_ok(),
        &format!("{:?}", deals.as_ref().map(|t| t.len())),
    );

    match sdk.filter_items(100, &FilterParams::default()) {
        Ok(filtered) => {
            c.check("filter_items no params", !filtered.is_empty(), &format!("{} rows", filtered.len()));
            let typed = filtered.into_records::<Listing>();
            c.check("rows convert to Listing", typed.is_ok(), "");
        }
        Err(e) => c.check("filter_items no params", false, &e.to_string()),
    }

    // ================================================================
    // 3. REPORT AND FORECAST
    // ================================================================
    section("Report & forecast");

    let report = sdk
        .reports()
        .build_report("★ Butterfly Knife | Gamma Doppler", false, false, None);
    match report {
        Ok(report) => {
            c.check("build_report", true, &format!("{} variants", report.table.len()));
            eprintln!("{}", report.summary);

            match price_trend(&report.table).and_then(|t| price_prediction(&t)) {
                Ok(forecast) => {
                    let rows = forecast.into_records::<ForecastRow>();
                    c.check(
                        "forecast rows",
                        rows.is_ok(),
                        &format!("{:?}", rows.as_ref().map(Vec::len)),
                    );
                }
                Err(e) => c.check("forecast", false, &e.to_string()),
            }
        }
        Err(e) => c.skip("build_report", &e.to_string()),
    }

    // ================================================================
    // 4. DISPLAY
    // ================================================================
    section("Display");

    let display = format!("{}", sdk);
    c.check(
        "Display impl",
        display.contains("SkinBaronSdk"),
        &format!("display={}", display),
    );

    // ================================================================
    // SUMMARY
    // ================================================================
    section("SMOKE TEST COMPLETE");

    let total_checks = c.pass + c.fail;
    eprintln!("  Total:   {} checks ({} skipped)", total_checks, c.skip);
    eprintln!("  Passed:  {}", c.pass);
    eprintln!("  Failed:  {}", c.fail);
    eprintln!();

    assert_eq!(c.fail, 0, "{} smoke test checks failed", c.fail);
}
