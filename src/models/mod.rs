mod goods_detail;
mod goods_image;
mod goods_qrcode;
mod goods_sku;
mod goods_tag;
mod html_text;

pub use goods_detail::*;
pub use goods_image::*;
pub use goods_qrcode::*;
pub use goods_sku::*;
pub use goods_tag::*;
pub use html_text::*;
