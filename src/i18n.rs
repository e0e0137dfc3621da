//! Locale handling and the shared bilingual string table.
//!
//! One lookup serves both screens, keyed by locale and message id. Per-screen
//! strings (titles, modal headings) are supplied by the entity configuration
//! as `ScreenLabels`, field labels ride on each `FieldSpec`.

use crate::error::{ClientError, Result};

/// Supported UI locales. Labels only, no pluralization or formatting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Uz,
    En,
}

impl Locale {
    /// Parse a locale from user input. Accepts short and long forms
    /// ("uz"/"uzb", "en"/"eng").
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "uz" | "uzb" => Ok(Locale::Uz),
            "en" | "eng" => Ok(Locale::En),
            other => Err(ClientError::InvalidCommand(format!(
                "unknown locale: {}",
                other
            ))),
        }
    }
}

/// One UI string in both locales.
#[derive(Debug, Clone, Copy)]
pub struct Label {
    pub uz: &'static str,
    pub en: &'static str,
}

impl Label {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Uz => self.uz,
            Locale::En => self.en,
        }
    }
}

/// Screen-level strings supplied per entity.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLabels {
    pub title: Label,
    pub search_placeholder: Label,
    pub add_button: Label,
    pub add_title: Label,
    pub edit_title: Label,
}

/// Message ids for the chrome shared by both screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiText {
    Id,
    Actions,
    Edit,
    Delete,
    Cancel,
    Update,
    /// Marker rendered for an absent optional value ("Yoq" / "No").
    Empty,
}

/// Shared string lookup for the chrome common to both screens.
pub fn text(locale: Locale, msg: UiText) -> &'static str {
    let label = match msg {
        UiText::Id => Label { uz: "ID", en: "ID" },
        UiText::Actions => Label {
            uz: "Amallar",
            en: "Actions",
        },
        UiText::Edit => Label {
            uz: "Tahrirlash",
            en: "Edit",
        },
        UiText::Delete => Label {
            uz: "O'chirish",
            en: "Delete",
        },
        UiText::Cancel => Label {
            uz: "Bekor qilish",
            en: "Cancel",
        },
        UiText::Update => Label {
            uz: "Yangilash",
            en: "Update",
        },
        UiText::Empty => Label {
            uz: "Yoq",
            en: "No",
        },
    };
    label.get(locale)
}
