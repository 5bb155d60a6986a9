use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Asset, Order, Side};
use crate::services::portfolio_service;

// Fixed reference value for the naive performance figure. The period argument
// is accepted for API compatibility but does not influence the baseline.
const PERFORMANCE_BASELINE: f64 = 1000.0;

/// Running cash-flow sum over the portfolio's orders: sells add, buys
/// subtract. No cost-basis tracking or lot matching.
pub async fn profit_loss(pool: &PgPool, portfolio_id: Uuid) -> Result<f64, AppError> {
    let orders = db::order_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(cash_flow_sum(&orders))
}

pub async fn asset_allocation(
    pool: &PgPool,
    portfolio_id: Uuid,
) -> Result<HashMap<String, f64>, AppError> {
    let assets = db::asset_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(allocation_percentages(&assets))
}

pub async fn performance(
    pool: &PgPool,
    portfolio_id: Uuid,
    _period: &str,
) -> Result<f64, AppError> {
    let assets = db::asset_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(performance_vs_baseline(portfolio_service::total_value(
        &assets,
    )))
}

pub fn cash_flow_sum(orders: &[Order]) -> f64 {
    orders
        .iter()
        .map(|o| match o.side {
            Side::Sell => o.quantity * o.price,
            Side::Buy => -(o.quantity * o.price),
        })
        .sum()
}

/// Percentage of total portfolio value per symbol. When the total is zero
/// every symbol maps to zero instead of dividing by zero.
pub fn allocation_percentages(assets: &[Asset]) -> HashMap<String, f64> {
    let mut by_symbol: HashMap<String, f64> = HashMap::new();
    let mut total = 0.0;
    for asset in assets {
        let value = asset.quantity.unwrap_or(0.0) * asset.price.unwrap_or(0.0);
        *by_symbol.entry(asset.symbol.clone()).or_insert(0.0) += value;
        total += value;
    }
    for value in by_symbol.values_mut() {
        *value = if total > 0.0 {
            *value / total * 100.0
        } else {
            0.0
        };
    }
    by_symbol
}

pub fn performance_vs_baseline(current_value: f64) -> f64 {
    (current_value - PERFORMANCE_BASELINE) / PERFORMANCE_BASELINE * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(symbol: &str, quantity: f64, price: f64) -> Asset {
        Asset::new(
            symbol.to_string(),
            Some(quantity),
            Some(price),
            uuid::Uuid::new_v4(),
        )
    }

    fn order(side: Side, quantity: f64, price: f64) -> Order {
        Order::new(
            "AAPL".to_string(),
            side,
            quantity,
            price,
            "Completed",
            Some(uuid::Uuid::new_v4()),
        )
    }

    #[test]
    fn profit_loss_is_sells_minus_buys() {
        let orders = vec![order(Side::Buy, 10.0, 5.0), order(Side::Sell, 4.0, 8.0)];
        assert_eq!(cash_flow_sum(&orders), -18.0);
    }

    #[test]
    fn profit_loss_of_no_orders_is_zero() {
        assert_eq!(cash_flow_sum(&[]), 0.0);
    }

    #[test]
    fn allocation_splits_by_symbol_value() {
        let assets = vec![asset("AAPL", 2.0, 150.0), asset("MSFT", 1.0, 300.0)];
        let allocation = allocation_percentages(&assets);
        assert_eq!(allocation["AAPL"], 50.0);
        assert_eq!(allocation["MSFT"], 50.0);
    }

    #[test]
    fn allocation_groups_repeated_symbols() {
        let assets = vec![
            asset("AAPL", 1.0, 100.0),
            asset("AAPL", 1.0, 100.0),
            asset("MSFT", 2.0, 100.0),
        ];
        let allocation = allocation_percentages(&assets);
        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation["AAPL"], 50.0);
        assert_eq!(allocation["MSFT"], 50.0);
    }

    #[test]
    fn allocation_percentages_sum_to_hundred() {
        let assets = vec![
            asset("AAPL", 3.0, 17.5),
            asset("MSFT", 7.0, 220.0),
            asset("GOOG", 1.0, 133.0),
        ];
        let sum: f64 = allocation_percentages(&assets).values().sum();
        assert!((sum - 100.0).abs() < 1e-9, "expected ~100, got {}", sum);
    }

    #[test]
    fn allocation_is_all_zero_when_total_is_zero() {
        let assets = vec![
            Asset::new("AAPL".to_string(), None, None, uuid::Uuid::new_v4()),
            asset("MSFT", 0.0, 300.0),
        ];
        let allocation = allocation_percentages(&assets);
        assert_eq!(allocation["AAPL"], 0.0);
        assert_eq!(allocation["MSFT"], 0.0);
    }

    #[test]
    fn performance_is_percentage_change_from_baseline() {
        // {AAPL: 2 x 150, MSFT: 1 x 300} is worth 600
        assert_eq!(performance_vs_baseline(600.0), -40.0);
        assert_eq!(performance_vs_baseline(1000.0), 0.0);
        assert_eq!(performance_vs_baseline(1500.0), 50.0);
    }
}
