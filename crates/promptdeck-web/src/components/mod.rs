pub mod header;
pub mod preset_bar;
pub mod prompt_form;
pub mod response_panel;
