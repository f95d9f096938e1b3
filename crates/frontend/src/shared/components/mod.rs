pub mod date_range_picker;
pub mod filter_panel;
pub mod option_select;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
