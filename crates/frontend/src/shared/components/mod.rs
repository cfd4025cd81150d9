pub mod code_display;
pub mod data_table;
pub mod form_dialog;
pub mod form_field;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
