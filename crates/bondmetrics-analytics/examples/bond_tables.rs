//! Bond Tables Example
//!
//! Values three textbook bonds and prints how price and risk respond to
//! yield, coupon and parallel shocks.
//!
//! Run with: cargo run -p bondmetrics-analytics --example bond_tables

use bondmetrics_analytics::prelude::*;

fn main() -> BondResult<()> {
    println!("=== Bondmetrics: Bond Tables ===\n");

    let bonds = [
        ("9% 5y", BondTerms::new(0.09, 100.0, 5.0, 2)?),
        ("6% 25y", BondTerms::new(0.06, 100.0, 25.0, 2)?),
        ("0% 25y", BondTerms::new(0.0, 100.0, 25.0, 2)?),
    ];

    // 1. Valuation at 9%
    println!("1. Valuation at 9.00%");
    println!("   Bond        Price   Macaulay   Modified   Convexity      DV01");
    println!("   ------    --------  --------   --------   ---------   -------");
    for (name, terms) in &bonds {
        let bond = BondModel::from_yield(*terms, 0.09)?;
        println!(
            "   {:<8} {:>9.4} {:>9.4} {:>10.4} {:>11.4} {:>9.5}",
            name,
            bond.price(),
            bond.macaulay_duration(),
            bond.modified_duration(),
            bond.convexity(),
            bond.dv01_1bp()
        );
    }
    println!();

    // 2. Yield from price
    println!("2. Yield from price (6% 25y at 70.3570)");
    let bond = BondModel::from_price(bonds[1].1, 70.3570)?;
    println!("   Yield: {:.4}%\n", bond.yield_annual() * 100.0);

    // 3. Yield sweep
    println!("3. Yield sweep (6% 25y)");
    println!("   Yield      Price   Modified   Convexity");
    let yields: Vec<f64> = (1..=8).map(|i| 0.02 * f64::from(i)).collect();
    for row in yield_sweep(&bond, &yields)? {
        let m = row.metrics;
        println!(
            "   {:>5.2}%  {:>9.4} {:>10.4} {:>11.4}",
            m.yield_annual * 100.0,
            m.price,
            m.modified_duration,
            m.convexity
        );
    }
    println!();

    // 4. Coupon sweep
    println!("4. Coupon sweep (25y at 9%)");
    println!("   Coupon     Price   Macaulay");
    let coupons = [0.0, 0.03, 0.06, 0.09, 0.12, 0.15];
    for row in coupon_sweep(&bonds[2].1, &coupons, 0.09)? {
        println!(
            "   {:>5.2}%  {:>9.4} {:>10.4}",
            row.terms.coupon_rate * 100.0,
            row.metrics.price,
            row.metrics.macaulay_duration
        );
    }
    println!();

    // 5. Shock table
    println!("5. Parallel shocks (6% 25y at 9%)");
    println!("   Shift(bp)     Actual   Duration  +Convexity");
    let shifts = [-300.0, -100.0, -25.0, -1.0, 1.0, 25.0, 100.0, 300.0];
    for row in shift_table(&bond, &shifts) {
        println!(
            "   {:>8.0} {:>10.4} {:>10.4} {:>11.4}",
            row.bp, row.actual, row.duration_estimate, row.convexity_estimate
        );
    }
    println!();

    // 6. Shared model
    println!("6. Shared model");
    let shared = SharedBondModel::from(bond);
    shared.set_yield(0.10)?;
    let snapshot = shared.snapshot();
    println!(
        "   After move to 10.00%: price {:.4}, modified {:.4}",
        snapshot.metrics.price, snapshot.metrics.modified_duration
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
