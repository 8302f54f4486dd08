use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Ecuadorian IVA applied to invoices
pub const IVA_RATE: Decimal = dec!(0.12);
/// Subtotal above which final consumers pay IVA under the threshold rule
pub const IVA_FINAL_CONSUMER_THRESHOLD: Decimal = dec!(200.00);
/// Stock at or below `min * factor` is reported as `medio`
pub const STOCK_MEDIUM_FACTOR: Decimal = dec!(1.5);

pub const VACCINE_UPCOMING_WINDOW_DAYS: i64 = 7;
pub const CALENDAR_UPCOMING_WINDOW_DAYS: i64 = 7;
pub const MEDICINE_EXPIRY_WINDOW_DAYS: i64 = 90;

pub const LIST_PREVIEW_LEN: usize = 5;

pub const IOT_LOW_BATTERY: f64 = 20.0;
pub const IOT_ALERT_BATTERY: f64 = 15.0;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

pub const PET_PHOTO_MAX_SIZE_BYTES: usize = 6_000_000;
pub const ACCEPTED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpeg", "jpg", "heic"];

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
