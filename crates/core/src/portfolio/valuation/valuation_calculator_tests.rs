#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use modelfolio_market_data::{DailyQuote, PriceTable};

    use crate::portfolio::allocation::Position;
    use crate::portfolio::valuation::{calculate_trajectory, summarize};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn position(symbol: &str, shares: Decimal) -> Position {
        Position {
            symbol: symbol.to_string(),
            shares,
        }
    }

    fn two_day_table() -> PriceTable {
        let requested = vec!["A".to_string(), "B".to_string()];
        let quotes = vec![
            DailyQuote::new("A", day(1), dec!(100)),
            DailyQuote::new("A", day(2), dec!(110)),
            DailyQuote::new("B", day(1), dec!(50)),
            DailyQuote::new("B", day(2), dec!(45)),
        ];
        PriceTable::from_quotes(&requested, quotes).unwrap()
    }

    #[test]
    fn marks_the_basket_to_market_each_day() {
        let table = two_day_table();
        let positions = vec![position("A", dec!(60)), position("B", dec!(80))];

        let trajectory = calculate_trajectory(&positions, &table);

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory[0].date, day(1));
        assert_eq!(trajectory[0].value, dec!(10000));
        assert_eq!(trajectory[1].date, day(2));
        assert_eq!(trajectory[1].value, dec!(10200));
    }

    #[test]
    fn trajectory_dates_ascend_with_the_table() {
        let table = two_day_table();
        let trajectory = calculate_trajectory(&[position("A", dec!(1))], &table);
        assert!(trajectory.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(
            trajectory.iter().map(|p| p.date).collect::<Vec<_>>(),
            table.dates().to_vec()
        );
    }

    #[test]
    fn summary_reports_change_metrics() {
        let table = two_day_table();
        let positions = vec![position("A", dec!(60)), position("B", dec!(80))];
        let trajectory = calculate_trajectory(&positions, &table);

        let summary = summarize(&trajectory).unwrap();
        assert_eq!(summary.start_value, dec!(10000));
        assert_eq!(summary.end_value, dec!(10200));
        assert_eq!(summary.absolute_change, dec!(200));
        assert_eq!(summary.pct_change.unwrap(), dec!(0.02));
    }

    #[test]
    fn zero_start_value_reports_undefined_change() {
        let table = two_day_table();
        let positions = vec![position("A", Decimal::ZERO), position("B", Decimal::ZERO)];
        let trajectory = calculate_trajectory(&positions, &table);

        assert!(trajectory.iter().all(|p| p.value.is_zero()));
        let summary = summarize(&trajectory).unwrap();
        assert_eq!(summary.start_value, Decimal::ZERO);
        assert_eq!(summary.pct_change, None);
    }

    #[test]
    fn empty_trajectory_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn single_position_tracks_its_own_series() {
        let table = two_day_table();
        // 10000 / 100 = 100 shares of A
        let trajectory = calculate_trajectory(&[position("A", dec!(100))], &table);
        assert_eq!(trajectory[0].value, dec!(10000));
        assert_eq!(trajectory[1].value, dec!(11000));
        let summary = summarize(&trajectory).unwrap();
        assert_eq!(summary.pct_change.unwrap(), dec!(0.10));
    }
}
