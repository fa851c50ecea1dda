pub mod decode;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ClientError, Result};
pub use models::{GoodsDetail, GoodsImage, GoodsQrcode, GoodsSku, GoodsTag, HtmlText};
