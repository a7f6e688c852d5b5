pub mod model;
pub mod user_interface;
pub mod valuation;
pub mod zakat;

pub use model::{Asset, PortfolioError};
pub use valuation::{format_amount, total_value};
pub use zakat::{ZakatError, ZakatPolicy, NISAB_GOLD_GRAMS, ZAKAT_RATE};
