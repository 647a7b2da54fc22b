//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Genre;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "message-info",
            NoticeLevel::Success => "message-success",
            NoticeLevel::Error => "message-error",
        }
    }
}

/// Message shown in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Genre of the current page, fixed for its lifetime
    pub genre: Genre,
    /// Trigger to refetch quiz statistics - read
    pub stats_trigger: ReadSignal<u32>,
    /// Trigger to refetch quiz statistics - write
    set_stats_trigger: WriteSignal<u32>,
    /// Message modal content - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Message modal content - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        genre: Genre,
        stats_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            genre,
            stats_trigger: stats_trigger.0,
            set_stats_trigger: stats_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Trigger a refetch of the stats panel
    pub fn reload_stats(&self) {
        self.set_stats_trigger.update(|v| *v += 1);
    }

    /// Open the message modal
    pub fn notify(&self, message: impl Into<String>, level: NoticeLevel) {
        self.set_notice.set(Some(Notice {
            message: message.into(),
            level,
        }));
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }
}
