use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// QR entry point for a product, with its own price override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsQrcode {
    pub qr_id: Option<i64>,
    pub qr_name: Option<String>,
    pub qr_price: Option<Decimal>,
    pub qr_url: Option<String>,
}
