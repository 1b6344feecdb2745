pub mod basic_info_form;
pub mod category_selection_form;
pub mod professional_profile_form;
pub mod role_selector;

pub use basic_info_form::*;
pub use category_selection_form::*;
pub use professional_profile_form::*;
pub use role_selector::*;
