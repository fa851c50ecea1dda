use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::serialization::{de_opt_epoch_millis, ser_opt_epoch_millis};

/// One purchasable variant of a listed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsSku {
    pub sku_id: Option<i64>,
    pub outer_id: Option<String>,
    pub price: Option<Decimal>,
    pub num: Option<i64>,
    pub properties_name: Option<String>,
    pub properties_name_json: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_epoch_millis",
        serialize_with = "ser_opt_epoch_millis"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "de_opt_epoch_millis",
        serialize_with = "ser_opt_epoch_millis"
    )]
    pub modified: Option<DateTime<Utc>>,
}
