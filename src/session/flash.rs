use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient toast style message, shown exactly once on the next screen.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Error, message: message.into() }
    }
}

/// The notice corner every screen carries.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NoticeArea {
    pub position: &'static str,
    pub items: Vec<Notice>,
}

impl NoticeArea {
    pub fn new(items: Vec<Notice>) -> Self {
        NoticeArea { position: "top-right", items }
    }

    pub fn empty() -> Self {
        NoticeArea::new(Vec::new())
    }
}
