pub mod action_list;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod input_field;
pub mod panel;
pub mod popup;
pub mod scanner;
pub mod tab_bar;
