pub mod footer;
pub mod header;
pub mod modals;
pub mod result_list;
pub mod search_box;
pub mod snippet_form;
pub mod snippet_table;
