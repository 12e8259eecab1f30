//! Closing balance derivation.
//!
//! An account carries its balance on one side only. The side is signalled by
//! which opening balance is non-zero:
//! - Active: closing active = opening active + turnover active - turnover passive
//! - Passive: closing passive = opening passive - turnover active + turnover passive
//! - Neither side open: both closing amounts are zero
//!
//! No rounding happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of the balance an account is kept on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSide {
    /// Asset-sided account (non-zero opening active balance).
    Active,
    /// Liability-sided account (non-zero opening passive balance).
    Passive,
    /// No opening balance on either side.
    Dormant,
}

impl BalanceSide {
    /// Determines the side from the opening balances.
    ///
    /// The active side wins when both are non-zero.
    #[must_use]
    pub fn from_opening(opening_active: Decimal, opening_passive: Decimal) -> Self {
        if !opening_active.is_zero() {
            Self::Active
        } else if !opening_passive.is_zero() {
            Self::Passive
        } else {
            Self::Dormant
        }
    }
}

/// Closing balance of one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingBalance {
    /// Closing balance, active side.
    pub active: Decimal,
    /// Closing balance, passive side.
    pub passive: Decimal,
}

/// Derives closing balances from opening balances and turnover.
#[must_use]
pub fn derive_closing(
    opening_active: Decimal,
    opening_passive: Decimal,
    turnover_active: Decimal,
    turnover_passive: Decimal,
) -> ClosingBalance {
    match BalanceSide::from_opening(opening_active, opening_passive) {
        BalanceSide::Active => ClosingBalance {
            active: opening_active + turnover_active - turnover_passive,
            passive: Decimal::ZERO,
        },
        BalanceSide::Passive => ClosingBalance {
            active: Decimal::ZERO,
            passive: opening_passive - turnover_active + turnover_passive,
        },
        BalanceSide::Dormant => ClosingBalance {
            active: Decimal::ZERO,
            passive: Decimal::ZERO,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(100), dec!(0), dec!(20), dec!(5), dec!(115), dec!(0))]
    #[case(dec!(0), dec!(50), dec!(10), dec!(30), dec!(0), dec!(70))]
    #[case(dec!(0), dec!(0), dec!(10), dec!(30), dec!(0), dec!(0))]
    #[case(dec!(10), dec!(0), dec!(0), dec!(25), dec!(-15), dec!(0))]
    #[case(dec!(0.01), dec!(0), dec!(0.001), dec!(0), dec!(0.011), dec!(0))]
    fn test_derive_closing(
        #[case] opening_active: Decimal,
        #[case] opening_passive: Decimal,
        #[case] turnover_active: Decimal,
        #[case] turnover_passive: Decimal,
        #[case] closing_active: Decimal,
        #[case] closing_passive: Decimal,
    ) {
        let closing = derive_closing(
            opening_active,
            opening_passive,
            turnover_active,
            turnover_passive,
        );
        assert_eq!(closing.active, closing_active);
        assert_eq!(closing.passive, closing_passive);
    }

    #[test]
    fn test_zero_with_scale_is_dormant() {
        assert_eq!(
            BalanceSide::from_opening(dec!(0.00), dec!(0.000)),
            BalanceSide::Dormant
        );
    }

    #[test]
    fn test_active_side_wins_when_both_open() {
        assert_eq!(
            BalanceSide::from_opening(dec!(1), dec!(1)),
            BalanceSide::Active
        );
        let closing = derive_closing(dec!(1), dec!(1), dec!(2), dec!(0));
        assert_eq!(closing.active, dec!(3));
        assert_eq!(closing.passive, Decimal::ZERO);
    }
}
