pub mod catalog;
pub mod chat;
pub mod data;
pub mod error;
pub mod feed;
pub mod types;

pub use catalog::{ArticleCatalog, ArticleProvider};
pub use chat::generate_chat_response;
pub use error::Error;
pub use feed::get_feed;
pub use types::{
    Article, ArticleSummary, ChatCitation, ChatContext, ChatRequest, ChatResponse, Confidence,
    FeedFilters, FeedItem, FeedResult, SortKey, SourceInfo, SummaryMode,
};

pub type Result<T> = std::result::Result<T, Error>;
