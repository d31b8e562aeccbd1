pub mod data_table;
pub mod date_range_picker;
pub mod page_header;
pub mod stat_card;
