pub mod article;
pub mod details;

pub use article::{Article, ArticlePage};
pub use details::DetailsParams;
