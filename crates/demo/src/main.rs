use anyhow::Context;

use stand_core::Money;
use stand_menu::MenuItem;
use stand_sales::{SalesQuantities, Stand};

const DEFAULT_STAND_NAME: &str = "Lemons R Us";

fn main() -> anyhow::Result<()> {
    stand_observability::init();

    let stand_name = std::env::var("STAND_NAME").unwrap_or_else(|_| {
        tracing::warn!("STAND_NAME not set; using {DEFAULT_STAND_NAME:?}");
        DEFAULT_STAND_NAME.to_string()
    });

    let mut stand = Stand::new(stand_name);
    let menu = [("lemonade", 50, 150), ("nori", 60, 80), ("cookie", 20, 100)];
    for (name, cost, price) in menu {
        stand.add_menu_item(MenuItem::new(
            name,
            Money::from_cents(cost),
            Money::from_cents(price),
        ));
    }

    // Day 0: no nori sold.
    let day0 = SalesQuantities::from([
        ("lemonade".to_string(), 5),
        ("cookie".to_string(), 2),
    ]);
    stand
        .record_sales_for_day(day0)
        .context("recording sales for day 0")?;

    for name in ["lemonade", "nori", "cookie"] {
        tracing::info!(
            item = name,
            sold = stand.total_sales_for_item(name),
            profit_cents = stand.total_profit_for_item(name).cents(),
            "item totals"
        );
    }
    tracing::info!(
        stand = stand.name(),
        days = stand.current_day(),
        profit_cents = stand.total_profit_for_stand().cents(),
        "stand totals"
    );

    Ok(())
}
