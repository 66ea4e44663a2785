mod button;
mod container;
mod input;

pub use button::{icon_button_style, nav_button_style, primary_button_style, secondary_button_style};
pub use container::{card_style, header_style, notice_style, progress_bar_style, tag_style, transparent_style};
pub use input::{editor_style, input_style};
