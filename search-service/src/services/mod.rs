pub mod catalog;
pub mod pipeline;
pub mod query_parser;
