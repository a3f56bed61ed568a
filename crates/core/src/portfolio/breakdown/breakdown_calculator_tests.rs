#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use modelfolio_market_data::{DailyQuote, PriceTable};

    use crate::portfolio::allocation::{compute_positions, normalize_weights};
    use crate::portfolio::breakdown::build_breakdown;
    use crate::universe::{AssetClass, SecurityMeta, Universe};

    fn meta(symbol: &str, weight: Decimal, asset_class: AssetClass) -> SecurityMeta {
        SecurityMeta {
            symbol: symbol.to_string(),
            name: format!("{} Fund", symbol),
            target_weight_pct: weight,
            asset_class,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn table_for(symbols_prices: &[(&str, Decimal, Decimal)]) -> PriceTable {
        let requested: Vec<String> = symbols_prices.iter().map(|(s, _, _)| s.to_string()).collect();
        let mut quotes = Vec::new();
        for (symbol, first, last) in symbols_prices {
            quotes.push(DailyQuote::new(*symbol, day(1), *first));
            quotes.push(DailyQuote::new(*symbol, day(2), *last));
        }
        PriceTable::from_quotes(&requested, quotes).unwrap()
    }

    fn growth_mix_universe() -> Universe {
        Universe::new(vec![
            meta("SPY", dec!(50), AssetClass::Equity),
            meta("VXUS", dec!(20), AssetClass::Equity),
            meta("GVI", dec!(22), AssetClass::FixedIncome),
            meta("GOIXX", dec!(8), AssetClass::Cash),
        ])
        .unwrap()
    }

    #[test]
    fn groups_follow_fixed_class_order_and_sort_by_weight() {
        let universe = growth_mix_universe();
        let enabled = universe.symbols();
        let table = table_for(&[
            ("SPY", dec!(100), dec!(110)),
            ("VXUS", dec!(50), dec!(55)),
            ("GVI", dec!(20), dec!(21)),
            ("GOIXX", dec!(1), dec!(1)),
        ]);
        let allocation = normalize_weights(&universe, &enabled, table.symbols()).unwrap();
        let positions = compute_positions(dec!(10000), &allocation, &table).unwrap();

        let groups = build_breakdown(&universe, &allocation, &positions, &table);

        let classes: Vec<AssetClass> = groups.iter().map(|g| g.asset_class).collect();
        assert_eq!(
            classes,
            vec![AssetClass::Equity, AssetClass::FixedIncome, AssetClass::Cash]
        );

        let equity = &groups[0];
        assert_eq!(equity.rows.len(), 2);
        assert_eq!(equity.rows[0].symbol, "SPY");
        assert_eq!(equity.rows[1].symbol, "VXUS");
        assert!(equity.rows[0].weight_pct > equity.rows[1].weight_pct);
    }

    #[test]
    fn subtotals_reconcile_to_one_hundred_percent() {
        let universe = growth_mix_universe();
        let enabled = universe.symbols();
        let table = table_for(&[
            ("SPY", dec!(100), dec!(110)),
            ("VXUS", dec!(50), dec!(55)),
            ("GVI", dec!(20), dec!(21)),
            ("GOIXX", dec!(1), dec!(1)),
        ]);
        let allocation = normalize_weights(&universe, &enabled, table.symbols()).unwrap();
        let positions = compute_positions(dec!(10000), &allocation, &table).unwrap();

        let groups = build_breakdown(&universe, &allocation, &positions, &table);

        for group in &groups {
            let row_sum: Decimal = group.rows.iter().map(|r| r.weight_pct).sum();
            assert!((row_sum - group.subtotal_weight_pct).abs() < dec!(0.000001));
        }
        let total: Decimal = groups.iter().map(|g| g.subtotal_weight_pct).sum();
        assert!((total - dec!(100)).abs() < dec!(0.01));
    }

    #[test]
    fn row_values_carry_display_precision() {
        let universe = Universe::new(vec![meta("SPY", dec!(100), AssetClass::Equity)]).unwrap();
        let enabled = universe.symbols();
        let table = table_for(&[("SPY", dec!(99.123456), dec!(101.987654))]);
        let allocation = normalize_weights(&universe, &enabled, table.symbols()).unwrap();
        let positions = compute_positions(dec!(10000), &allocation, &table).unwrap();

        let groups = build_breakdown(&universe, &allocation, &positions, &table);
        let row = &groups[0].rows[0];

        assert_eq!(row.weight_pct, dec!(100.000));
        assert_eq!(row.start_price, dec!(99.1235));
        assert_eq!(row.end_price, dec!(101.9877));
        assert!(row.shares.scale() <= 6);
        assert!(row.end_value.scale() <= 2);
    }

    #[test]
    fn unconfigured_held_symbol_falls_back_to_other() {
        // universe omits the class info the allocation carries
        let universe = Universe::new(vec![meta("SPY", dec!(60), AssetClass::Equity)]).unwrap();
        let wide = Universe::new(vec![
            meta("SPY", dec!(60), AssetClass::Equity),
            meta("XYZ", dec!(40), AssetClass::Equity),
        ])
        .unwrap();
        let table = table_for(&[("SPY", dec!(100), dec!(110)), ("XYZ", dec!(10), dec!(11))]);
        let allocation =
            normalize_weights(&wide, &wide.symbols(), table.symbols()).unwrap();
        let positions = compute_positions(dec!(10000), &allocation, &table).unwrap();

        let groups = build_breakdown(&universe, &allocation, &positions, &table);

        let other = groups
            .iter()
            .find(|g| g.asset_class == AssetClass::Other)
            .unwrap();
        assert_eq!(other.rows[0].symbol, "XYZ");
        assert_eq!(other.rows[0].name, "XYZ");
    }
}
