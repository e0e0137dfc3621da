/// Product record for the catalog screen.

use super::{coerce_number, Entity, FieldKind, FieldSpec};
use crate::error::{ClientError, Result};
use crate::i18n::{Label, ScreenLabels};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    /// Image URLs. Carried through create/update, not edited in the form.
    pub images: Vec<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        kind: FieldKind::Text,
        label: Label {
            uz: "Sarlavha",
            en: "Title",
        },
    },
    FieldSpec {
        name: "description",
        kind: FieldKind::Text,
        label: Label {
            uz: "Ta'rif",
            en: "Description",
        },
    },
    FieldSpec {
        name: "brand",
        kind: FieldKind::Text,
        label: Label {
            uz: "Brend",
            en: "Brand",
        },
    },
    FieldSpec {
        name: "category",
        kind: FieldKind::Text,
        label: Label {
            uz: "Kategoriyasi",
            en: "Category",
        },
    },
    FieldSpec {
        name: "price",
        kind: FieldKind::Number,
        label: Label {
            uz: "Narxi",
            en: "Price",
        },
    },
    FieldSpec {
        name: "discountPercentage",
        kind: FieldKind::Number,
        label: Label {
            uz: "Foiz",
            en: "Discount",
        },
    },
];

const LABELS: ScreenLabels = ScreenLabels {
    title: Label {
        uz: "Mahsulotlar",
        en: "Products",
    },
    search_placeholder: Label {
        uz: "Mahsulotlarni qidirish...",
        en: "Search products...",
    },
    add_button: Label {
        uz: "Qo'shish",
        en: "Add",
    },
    add_title: Label {
        uz: "Mahsulot qo'shish",
        en: "Add Product",
    },
    edit_title: Label {
        uz: "Mahsulotni tahrirlash",
        en: "Edit Product",
    },
};

impl Entity for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn filter_key(&self) -> &str {
        &self.title
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn labels() -> &'static ScreenLabels {
        &LABELS
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone()),
            "brand" => Some(self.brand.clone()),
            "category" => Some(self.category.clone()),
            "price" => Some(self.price.to_string()),
            "discountPercentage" => Some(self.discount_percentage.to_string()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, input: &str) -> Result<()> {
        match name {
            "title" => self.title = input.to_string(),
            "description" => self.description = input.to_string(),
            "brand" => self.brand = input.to_string(),
            "category" => self.category = input.to_string(),
            "price" => self.price = coerce_number(input),
            "discountPercentage" => self.discount_percentage = coerce_number(input),
            _ => return Err(ClientError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// New products carry a millisecond-timestamp id hint and start unrated.
    fn prepare_create(&mut self) {
        self.id = Utc::now().timestamp_millis().to_string();
        self.rating = 0.0;
    }
}
