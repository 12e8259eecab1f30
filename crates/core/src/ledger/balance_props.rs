//! Property-based tests for closing balance derivation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::derive_closing;

fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000, 0u32..4).prop_map(|(units, scale)| Decimal::new(units, scale))
}

fn non_zero_amount() -> impl Strategy<Value = Decimal> {
    amount().prop_filter("non-zero opening balance", |d| !d.is_zero())
}

proptest! {
    /// Active-sided account: closing active = A + t1 - t2, closing passive = 0.
    #[test]
    fn test_active_side_closing(
        opening in non_zero_amount(),
        turnover_active in amount(),
        turnover_passive in amount(),
    ) {
        let closing = derive_closing(opening, Decimal::ZERO, turnover_active, turnover_passive);
        prop_assert_eq!(closing.active, opening + turnover_active - turnover_passive);
        prop_assert_eq!(closing.passive, Decimal::ZERO);
    }

    /// Passive-sided account: closing passive = P - t1 + t2, closing active = 0.
    #[test]
    fn test_passive_side_closing(
        opening in non_zero_amount(),
        turnover_active in amount(),
        turnover_passive in amount(),
    ) {
        let closing = derive_closing(Decimal::ZERO, opening, turnover_active, turnover_passive);
        prop_assert_eq!(closing.active, Decimal::ZERO);
        prop_assert_eq!(closing.passive, opening - turnover_active + turnover_passive);
    }

    /// No opening balance: turnover is ignored.
    #[test]
    fn test_dormant_closing_is_zero(
        turnover_active in amount(),
        turnover_passive in amount(),
    ) {
        let closing = derive_closing(Decimal::ZERO, Decimal::ZERO, turnover_active, turnover_passive);
        prop_assert_eq!(closing.active, Decimal::ZERO);
        prop_assert_eq!(closing.passive, Decimal::ZERO);
    }
}
