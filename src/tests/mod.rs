mod common;
mod page_flow;
mod quiz_banks;
mod search_properties;
