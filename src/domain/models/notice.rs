#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeType {
    Info,
    Error,
}

/// One line status message shown beneath the output panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    ntype: NoticeType,
}

impl Notice {
    pub fn info(text: &str) -> Notice {
        return Notice {
            text: text.to_string(),
            ntype: NoticeType::Info,
        };
    }

    pub fn error(text: &str) -> Notice {
        return Notice {
            text: text.to_string(),
            ntype: NoticeType::Error,
        };
    }

    pub fn notice_type(&self) -> NoticeType {
        return self.ntype;
    }
}
