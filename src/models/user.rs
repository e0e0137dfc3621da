/// User record for the directory screen.

use super::{Entity, FieldKind, FieldSpec};
use crate::error::{ClientError, Result};
use crate::i18n::{Label, ScreenLabels};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Backend-assigned. Drafts carry an empty id, which is omitted from the
    /// create request body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "firstName",
        kind: FieldKind::Text,
        label: Label {
            uz: "Ism",
            en: "First Name",
        },
    },
    FieldSpec {
        name: "lastName",
        kind: FieldKind::Text,
        label: Label {
            uz: "Familiya",
            en: "Last Name",
        },
    },
    FieldSpec {
        name: "email",
        kind: FieldKind::Text,
        label: Label {
            uz: "Email",
            en: "Email",
        },
    },
    FieldSpec {
        name: "username",
        kind: FieldKind::Text,
        label: Label {
            uz: "Foydalanuvchi Nomi",
            en: "Username",
        },
    },
    FieldSpec {
        name: "password",
        kind: FieldKind::Text,
        label: Label {
            uz: "Parol",
            en: "Password",
        },
    },
    FieldSpec {
        name: "phone",
        kind: FieldKind::Text,
        label: Label {
            uz: "Telefon",
            en: "Phone",
        },
    },
    FieldSpec {
        name: "additionalInfo",
        kind: FieldKind::OptionalText,
        label: Label {
            uz: "Bunga ham",
            en: "Additional Info",
        },
    },
];

const LABELS: ScreenLabels = ScreenLabels {
    title: Label {
        uz: "Foydalanuvchilar",
        en: "Users",
    },
    search_placeholder: Label {
        uz: "Qidiruv...",
        en: "Search...",
    },
    add_button: Label {
        uz: "Foydalanuvchi Qo'shish",
        en: "Add User",
    },
    add_title: Label {
        uz: "Foydalanuvchi Qo'shish",
        en: "Add User",
    },
    edit_title: Label {
        uz: "Foydalanuvchini Tahrirlash",
        en: "Edit User",
    },
};

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn filter_key(&self) -> &str {
        &self.first_name
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn labels() -> &'static ScreenLabels {
        &LABELS
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "firstName" => Some(self.first_name.clone()),
            "lastName" => Some(self.last_name.clone()),
            "email" => Some(self.email.clone()),
            "username" => Some(self.username.clone()),
            "password" => Some(self.password.clone()),
            "phone" => Some(self.phone.clone()),
            "additionalInfo" => Some(self.additional_info.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, input: &str) -> Result<()> {
        match name {
            "firstName" => self.first_name = input.to_string(),
            "lastName" => self.last_name = input.to_string(),
            "email" => self.email = input.to_string(),
            "username" => self.username = input.to_string(),
            "password" => self.password = input.to_string(),
            "phone" => self.phone = input.to_string(),
            "additionalInfo" => {
                self.additional_info = if input.is_empty() {
                    None
                } else {
                    Some(input.to_string())
                };
            }
            _ => return Err(ClientError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}
