//! View-state controllers consumed by the presentation layer.
//!
//! Controllers take `&self`, keep their state behind a mutex that is never
//! held across a suspension point, and translate collaborator errors into
//! plain state fields or a one-shot [`Notice`].

pub mod actions;
pub mod details;
pub mod favorites;
pub mod feed;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::ArticleActionsController;
pub use details::DetailsController;
pub use favorites::{FavoritesController, FavoritesState};
pub use feed::{FeedController, FeedState, LOAD_FAILED, PAGE_SIZE};

pub const SAVED_MESSAGE: &str = "Article saved successfully";
pub const REMOVED_MESSAGE: &str = "Article removed from saved";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save article";
pub const SHARE_FAILED_MESSAGE: &str = "Failed to share article";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot user notification produced by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub fn success(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message)
    }
}
