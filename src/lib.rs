// RAPID: URL trust scoring and analysis history
//
// This is the library root. `scoring` and `history` are the pure core;
// `signals` computes the lexical facts a URL string alone can provide;
// `db`, `output` and `web` are the edges around them.

pub mod config;
pub mod db;
pub mod history;
pub mod output;
pub mod scoring;
pub mod signals;

#[cfg(feature = "web")]
pub mod web;
