//! Alert message rendering.

use divwatch_market_data::DividendFacts;
use rust_decimal::Decimal;

use crate::portfolio::Holding;

/// One formatted alert block for one holding whose ex-dividend date is
/// today. Immutable once rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    pub ticker: String,
    pub body: String,
}

/// Render the alert block for a matched holding.
pub fn render_alert(holding: &Holding, facts: &DividendFacts, payout: Decimal) -> AlertMessage {
    let price = facts
        .current_price
        .map(|p| format!("${}", p))
        .unwrap_or_else(|| "unknown".to_string());

    let body = format!(
        "---------------------------------------\n\
         🔔 Stock: {ticker}\n\
         📅 Event: Ex-Dividend Date Today!\n\
         💰 Dividend Per Share: ${rate}\n\
         📊 Your Shares: {shares}\n\
         💵 EST. PAYOUT: ${payout:.2}\n\
         📈 Current Price: {price}\n\
         ---------------------------------------",
        ticker = holding.ticker,
        rate = facts.dividend_rate,
        shares = holding.shares,
        payout = payout,
        price = price,
    );

    AlertMessage {
        ticker: holding.ticker.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn facts(rate: Decimal, price: Option<Decimal>) -> DividendFacts {
        DividendFacts {
            ex_dividend_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            dividend_rate: rate,
            rate_known: rate != Decimal::ZERO,
            current_price: price,
        }
    }

    fn holding() -> Holding {
        Holding {
            ticker: "AAA".to_string(),
            shares: dec!(10),
        }
    }

    #[test]
    fn test_render_contains_all_fields() {
        let message = render_alert(
            &holding(),
            &facts(dec!(0.50), Some(dec!(101.25))),
            dec!(5.00),
        );

        assert_eq!(message.ticker, "AAA");
        assert!(message.body.contains("🔔 Stock: AAA"));
        assert!(message.body.contains("💰 Dividend Per Share: $0.50"));
        assert!(message.body.contains("📊 Your Shares: 10"));
        assert!(message.body.contains("💵 EST. PAYOUT: $5.00"));
        assert!(message.body.contains("📈 Current Price: $101.25"));
    }

    #[test]
    fn test_render_zero_payout_shows_two_decimals() {
        let message = render_alert(&holding(), &facts(Decimal::ZERO, None), Decimal::ZERO);
        assert!(message.body.contains("💵 EST. PAYOUT: $0.00"));
    }

    #[test]
    fn test_render_unknown_price() {
        let message = render_alert(&holding(), &facts(dec!(0.25), None), dec!(2.50));
        assert!(message.body.contains("📈 Current Price: unknown"));
    }
}
