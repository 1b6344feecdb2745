pub mod loading_indicator;
pub mod notice_banner;
pub mod stat_card;

pub use loading_indicator::*;
pub use notice_banner::*;
pub use stat_card::*;
