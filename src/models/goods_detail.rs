use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decode;
use crate::error::Result;
use crate::models::{GoodsImage, GoodsQrcode, GoodsSku, GoodsTag, HtmlText};
use crate::utils::serialization::{
    de_bool_one, de_opt_epoch_millis, de_opt_epoch_seconds, ser_bool_one, ser_opt_epoch_millis,
    ser_opt_epoch_seconds,
};

/// One product snapshot as returned by `kdt.item.get` and friends.
///
/// Field names follow the platform's snake_case wire keys. Every key is
/// nullable on the wire, so every field is `Option` apart from
/// `join_level_discount`, which the platform encodes as the string `"1"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsDetail {
    pub is_virtual: Option<bool>,
    #[serde(
        default,
        deserialize_with = "de_opt_epoch_seconds",
        serialize_with = "ser_opt_epoch_seconds"
    )]
    pub auto_listing_time: Option<DateTime<Utc>>,
    pub detail_url: Option<String>,
    pub post_fee: Option<Decimal>,
    pub skus: Option<Vec<GoodsSku>>,
    pub item_qrcodes: Option<Vec<GoodsQrcode>>,
    pub ump_level: Option<Vec<String>>,
    pub promotion_cid: Option<i64>,
    pub buy_quota: Option<i64>,
    pub item_type: Option<i32>,
    pub num: Option<i64>,
    pub delivery_template_fee: Option<String>,
    pub template_title: Option<String>,
    pub num_iid: Option<i64>,
    pub title: Option<HtmlText>,
    pub outer_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_bool_one",
        serialize_with = "ser_bool_one"
    )]
    pub join_level_discount: bool,
    pub purchase_right: Option<i32>,
    pub ump_tags_text: Option<Vec<String>>,
    pub price: Option<Decimal>,
    pub alias: Option<String>,
    pub post_type: Option<i32>,
    pub ump_level_text: Option<Vec<String>>,
    pub delivery_template_name: Option<String>,
    pub order: Option<i64>,
    pub ump_tags: Option<Vec<String>>,
    pub tag_ids: Option<String>,
    pub is_supplier_item: Option<bool>,
    pub like_count: Option<i64>,
    pub item_tags: Option<Vec<GoodsTag>>,
    #[serde(
        default,
        deserialize_with = "de_opt_epoch_millis",
        serialize_with = "ser_opt_epoch_millis"
    )]
    pub created: Option<DateTime<Utc>>,
    pub item_imgs: Option<Vec<GoodsImage>>,
    pub is_listing: Option<bool>,
    pub is_used: Option<bool>,
    pub sold_num: Option<i64>,
    pub outer_buy_url: Option<String>,
    pub product_type: Option<String>,
    // The wire key really is "share_ur"; the missing "l" is part of the
    // platform contract.
    #[serde(rename = "share_ur")]
    pub share_url: Option<String>,
    pub pic_thumb_url: Option<String>,
    pub delivery_template_id: Option<i64>,
    pub is_lock: Option<bool>,
    pub messages: Option<Vec<HashMap<String, String>>>,
    pub template_id: Option<i64>,
    pub origin_price: Option<String>,
    pub pic_url: Option<String>,
    pub cid: Option<i64>,
    pub desc: Option<String>,
}

impl GoodsDetail {
    pub fn from_json(payload: &str) -> Result<Self> {
        decode::from_json_str(payload)
    }

    pub fn to_json(&self) -> Result<String> {
        decode::to_json_str(self)
    }
}
