use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum number of characters in a target name
pub const NAME_MAX_LENGTH: usize = 50;

/// Smallest accepted target nominal (Rp)
pub const NOMINAL_MIN: i64 = 100_000;

/// Largest accepted target nominal (Rp)
pub const NOMINAL_MAX: i64 = 100_000_000;

/// Terms (in months) a target can be paid over
pub const ALLOWED_TERMS: [u32; 3] = [3, 6, 12];

/// How far ahead of today a start date may be, in days
pub const MAX_START_DATE_OFFSET_DAYS: u64 = 365;

/// Category for which insurance cannot be purchased
pub const EMERGENCY_FUND_CATEGORY: &str = "Dana Darurat";

/// Categories offered by the creation form
pub const TARGET_CATEGORIES: [&str; 7] = [
    EMERGENCY_FUND_CATEGORY,
    "Liburan",
    "Gadget",
    "Pendidikan",
    "Rumah",
    "Kendaraan",
    "Lainnya",
];

/// Fixed discount for Premium targets paid over 12 months (Rp)
pub const PREMIUM_DISCOUNT: i64 = 10_000;

/// Term that unlocks the Premium discount
pub const PREMIUM_DISCOUNT_TERM: u32 = 12;

/// Insurance fee as a fraction of the nominal
pub const INSURANCE_RATE: Decimal = dec!(0.05);

/// Decimal precision for the monthly installment
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Wire format of a start date
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format of a stored start date
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
