use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serialization::{de_opt_epoch_millis, ser_opt_epoch_millis};

/// Merchant-defined tag attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsTag {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_epoch_millis",
        serialize_with = "ser_opt_epoch_millis"
    )]
    pub created: Option<DateTime<Utc>>,
    pub item_num: Option<i64>,
    pub share_url: Option<String>,
}
