use serde::{Deserialize, Serialize};

/// Length of the content preview shown in guide listings, in characters.
const PREVIEW_LENGTH: usize = 200;

/// An article for parents.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Guide {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) snippet: String,
    pub(crate) content: String,
}

impl Guide {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Guide {
            id: id.into(),
            title: title.into(),
            snippet: snippet.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The listing form of the guide, with the content cut short.
    pub fn preview(&self) -> GuidePreview {
        let preview: String = self.content.chars().take(PREVIEW_LENGTH).collect();

        GuidePreview {
            id: self.id.clone(),
            title: self.title.clone(),
            snippet: self.snippet.clone(),
            preview: format!("{}...", preview),
            link: format!("/guides/{}", self.id),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GuidePreview {
    id: String,
    title: String,
    snippet: String,
    preview: String,
    link: String,
}

/// A frequently asked question.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Faq {
    pub(crate) id: String,
    pub(crate) question: String,
    pub(crate) answer: String,
}

impl Faq {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Faq {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}
