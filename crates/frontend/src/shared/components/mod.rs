pub mod search_input;
pub mod sort_header_cell;
