//! UI Widgets

pub mod footer;
pub mod help_overlay;
pub mod number_field;
pub mod round_switch;
pub mod tip_result;
pub mod title;

pub use footer::Footer;
pub use help_overlay::HelpOverlay;
pub use number_field::NumberField;
pub use round_switch::RoundUpSwitch;
pub use tip_result::TipResultText;
pub use title::TitleText;
