//! Infrastructure adapters: relational storage and the search mirror

pub mod search;
pub mod storage;
