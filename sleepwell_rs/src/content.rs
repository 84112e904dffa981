//! Blog content records.
//!
//! The backend returns loosely-typed rows; [`RawContent::validate`] turns
//! them into [`BlogPost`]s or rejects them with
//! [`StoreError::InvalidRecord`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{is_path_segment, null_as_default};
use crate::error::{Result, StoreError};

/// A content row as stored in the backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawContent {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured_image: Vec<String>,
    pub created_at: Option<String>,
    pub status: Option<String>,
    pub store_id: Option<String>,
    pub content: Option<String>,
}

/// A published blog article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub status: String,
    pub store_id: String,
    pub body: Option<String>,
}

fn required(field: Option<String>) -> Option<String> {
    field.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// Parse a backend timestamp. Accepts RFC 3339 and offset-less ISO forms.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl RawContent {
    pub fn validate(self) -> Result<BlogPost> {
        let id = required(self.id).ok_or_else(|| StoreError::InvalidRecord {
            kind: "content",
            id: String::new(),
            reason: "missing id".into(),
        })?;
        let invalid = |reason: &str| StoreError::InvalidRecord {
            kind: "content",
            id: id.clone(),
            reason: reason.into(),
        };

        let title = required(self.title).ok_or_else(|| invalid("missing title"))?;
        let slug = required(self.slug).ok_or_else(|| invalid("missing slug"))?;
        if !is_path_segment(&slug) {
            return Err(invalid("slug must be a single path segment"));
        }
        let created_at = match self.created_at.as_deref() {
            Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| invalid("unparseable created_at"))?),
            None => None,
        };

        Ok(BlogPost {
            id,
            title,
            slug,
            excerpt: non_blank(self.excerpt),
            featured_image: self.featured_image,
            created_at,
            status: self.status.unwrap_or_default(),
            store_id: self.store_id.unwrap_or_default(),
            body: non_blank(self.content),
        })
    }
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// First featured image.
    pub fn cover(&self) -> Option<&str> {
        self.featured_image.first().map(String::as_str)
    }

    /// Body text split on blank lines.
    pub fn paragraphs(&self) -> Vec<String> {
        let Some(body) = &self.body else {
            return Vec::new();
        };
        body.split("\n\n")
            .map(|p| p.trim().replace('\n', " "))
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Locale used for long dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "en-US")]
    EnUs,
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EsEs => "es-ES",
            Locale::EnUs => "en-US",
        }
    }

    /// "19 de octubre de 2026" / "October 19, 2026".
    pub fn long_date(self, date: &DateTime<Utc>) -> String {
        match self {
            Locale::EsEs => format!(
                "{} de {} de {}",
                date.day(),
                MONTHS_ES[date.month0() as usize],
                date.year()
            ),
            Locale::EnUs => date.format("%B %-d, %Y").to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "es-ES" | "es" => Ok(Locale::EsEs),
            "en-US" | "en" => Ok(Locale::EnUs),
            other => Err(format!("unsupported locale {other:?} (expected es-ES or en-US)")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
