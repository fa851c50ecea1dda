use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serialization::{de_opt_epoch_millis, ser_opt_epoch_millis};

/// Product gallery image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsImage {
    pub id: Option<i64>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_epoch_millis",
        serialize_with = "ser_opt_epoch_millis"
    )]
    pub created: Option<DateTime<Utc>>,
}
