//! Core services for crawling, chunking, and line counting

pub mod chunk;
pub mod counter;
pub mod crawl;
pub mod lines;
