use serde::Serialize;
use warp::reject;

use crate::errors::BackendError;

#[derive(Debug)]
pub struct Rejection {
    pub(crate) context: Context,
    pub(crate) error: BackendError,
}

impl Rejection {
    pub fn new(context: Context, error: BackendError) -> Self {
        Rejection { context, error }
    }

    pub fn flatten(&self) -> FlattenedRejection {
        let link = if self.error.is_not_found() {
            Some(self.context.fallback_link())
        } else {
            None
        };

        FlattenedRejection {
            context: self.context.clone(),
            message: format!("{}", self.error),
            link,
        }
    }
}

impl reject::Reject for Rejection {}

#[derive(Debug, Serialize)]
pub struct FlattenedRejection {
    #[serde(flatten)]
    pub(crate) context: Context,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) link: Option<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Context {
    Search { query: String },
    Game { id: String },
    Guide { id: String },
    Listing { listing: &'static str },
    Path { path: String },
}

impl Context {
    pub fn search(query: String) -> Context {
        Context::Search { query }
    }

    pub fn game(id: String) -> Context {
        Context::Game { id }
    }

    pub fn guide(id: String) -> Context {
        Context::Guide { id }
    }

    pub fn featured() -> Context {
        Context::Listing {
            listing: "featured",
        }
    }

    pub fn guides() -> Context {
        Context::Listing { listing: "guides" }
    }

    pub fn faqs() -> Context {
        Context::Listing { listing: "faqs" }
    }

    pub fn path(path: String) -> Context {
        Context::Path { path }
    }

    /// Where a client should go when the thing it asked for is missing.
    pub fn fallback_link(&self) -> &'static str {
        match self {
            Context::Game { .. } => "/search",
            Context::Guide { .. } => "/guides",
            _ => "/",
        }
    }
}
