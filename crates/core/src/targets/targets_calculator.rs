use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, EMERGENCY_FUND_CATEGORY, INSURANCE_RATE, PREMIUM_DISCOUNT,
    PREMIUM_DISCOUNT_TERM,
};
use crate::targets::targets_model::{CommitmentResult, Tier};

/// Computes the monthly installment, discount, insurance fee and total
/// commitment of a validated target.
///
/// Insurance on an emergency-fund target sets `insurance_error` and
/// suppresses both the discount and the insurance fee. Otherwise the Premium
/// discount and the insurance fee apply independently.
pub fn compute(
    nominal: i64,
    term: u32,
    tier: Tier,
    insurance_requested: bool,
    category: &str,
) -> CommitmentResult {
    let term = i64::from(term.max(1));
    let installment = nominal.div_euclid(term);
    let installment_exact = (Decimal::from(nominal) / Decimal::from(term))
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointNearestEven);

    let mut discount = 0;
    let mut insurance_fee = 0;
    let insurance_error = insurance_requested && category == EMERGENCY_FUND_CATEGORY;

    if !insurance_error {
        if tier == Tier::Premium && term == i64::from(PREMIUM_DISCOUNT_TERM) {
            discount = PREMIUM_DISCOUNT;
        }
        if insurance_requested {
            insurance_fee = insurance_fee_for(nominal);
        }
    }

    CommitmentResult {
        installment,
        installment_exact,
        discount,
        insurance_fee,
        total: nominal + insurance_fee - discount,
        insurance_error,
    }
}

/// Insurance fee on `nominal`, rounded down to the whole rupiah.
fn insurance_fee_for(nominal: i64) -> i64 {
    (Decimal::from(nominal) * INSURANCE_RATE)
        .floor()
        .to_i64()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insurance_on_emergency_fund_is_rejected() {
        let result = compute(1_200_000, 12, Tier::Reguler, true, "Dana Darurat");
        assert!(result.insurance_error);
        assert_eq!(result.discount, 0);
        assert_eq!(result.insurance_fee, 0);
        assert_eq!(result.total, 1_200_000);
    }

    #[test]
    fn test_emergency_fund_error_suppresses_premium_discount() {
        let result = compute(1_200_000, 12, Tier::Premium, true, "Dana Darurat");
        assert!(result.insurance_error);
        assert_eq!(result.discount, 0);
        assert_eq!(result.insurance_fee, 0);
    }

    #[test]
    fn test_no_discount_no_fee() {
        let result = compute(1_200_000, 6, Tier::Reguler, false, "Gadget");
        assert!(!result.insurance_error);
        assert_eq!(result.discount, 0);
        assert_eq!(result.insurance_fee, 0);
        assert_eq!(result.total, 1_200_000);
        assert_eq!(result.installment, 200_000);
        assert_eq!(result.installment_exact, dec!(200000));
    }

    #[test]
    fn test_premium_twelve_month_discount() {
        let result = compute(1_200_000, 12, Tier::Premium, false, "Liburan");
        assert_eq!(result.discount, 10_000);
        assert_eq!(result.insurance_fee, 0);
        assert_eq!(result.total, 1_190_000);
    }

    #[test]
    fn test_premium_discount_needs_twelve_months() {
        let result = compute(1_200_000, 6, Tier::Premium, false, "Liburan");
        assert_eq!(result.discount, 0);
        assert_eq!(result.total, 1_200_000);
    }

    #[test]
    fn test_insurance_fee() {
        let result = compute(1_200_000, 12, Tier::Reguler, true, "Gadget");
        assert_eq!(result.insurance_fee, 60_000);
        assert_eq!(result.discount, 0);
        assert_eq!(result.total, 1_260_000);
    }

    #[test]
    fn test_discount_and_fee_combine() {
        let result = compute(1_200_000, 12, Tier::Premium, true, "Rumah");
        assert_eq!(result.discount, 10_000);
        assert_eq!(result.insurance_fee, 60_000);
        assert_eq!(result.total, 1_250_000);
    }

    #[test]
    fn test_insurance_fee_rounds_down() {
        // 5% of 100_019 is 5000.95
        let result = compute(100_019, 3, Tier::Reguler, true, "Gadget");
        assert_eq!(result.insurance_fee, 5_000);
        assert_eq!(result.total, 105_019);
    }

    #[test]
    fn test_installment_rounding() {
        let result = compute(100_000, 3, Tier::Reguler, false, "Gadget");
        assert_eq!(result.installment, 33_333);
        assert_eq!(result.installment_exact, dec!(33333.33));

        let result = compute(100_001, 6, Tier::Reguler, false, "Gadget");
        assert_eq!(result.installment, 16_666);
        assert_eq!(result.installment_exact, dec!(16666.83));
    }
}
