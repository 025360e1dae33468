//! Job ingestion and matching pipeline
//! Normalization, skill extraction, identity, dedup, scoring and planning

pub mod job;
pub mod header;
pub mod lexicon;
pub mod identity;
pub mod mapper;
pub mod merge;
pub mod keywords;
pub mod profile;
pub mod scoring;
pub mod roadmap;
pub mod filter;
