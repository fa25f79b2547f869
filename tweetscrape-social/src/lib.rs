//! Social data clients used by tweetscrape.
//!
//! Only the ScrapeCreators tweet endpoint is implemented.
pub mod scrapecreators;
