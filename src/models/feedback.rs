use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    OneStar,
    TwoStars,
    ThreeStars,
    FourStars,
    FiveStars,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::OneStar,
        Rating::TwoStars,
        Rating::ThreeStars,
        Rating::FourStars,
        Rating::FiveStars,
    ];

    pub fn stars(&self) -> u8 {
        match self {
            Rating::OneStar => 1,
            Rating::TwoStars => 2,
            Rating::ThreeStars => 3,
            Rating::FourStars => 4,
            Rating::FiveStars => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::OneStar => "⭐",
            Rating::TwoStars => "⭐⭐",
            Rating::ThreeStars => "⭐⭐⭐",
            Rating::FourStars => "⭐⭐⭐⭐",
            Rating::FiveStars => "⭐⭐⭐⭐⭐",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown rating: {}", s))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackFields {
    pub name: String,
    pub email: String,
    pub rating: Rating,
    pub message: String,
}

// Body of `POST /feedback` and `PUT /feedback/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInput {
    #[serde(alias = "userId")]
    pub owner_id: String,
    #[serde(flatten)]
    pub fields: FeedbackFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(alias = "_id")]
    pub id: Uuid,
    #[serde(alias = "userId")]
    pub owner_id: String,
    pub name: String,
    pub email: String,
    pub rating: Rating,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackList {
    pub feedback: Vec<FeedbackRecord>,
}

impl FeedbackRecord {
    pub fn new(id: Uuid, input: FeedbackInput, now: DateTime<Utc>) -> Self {
        let FeedbackInput { owner_id, fields } = input;
        Self {
            id,
            owner_id,
            name: fields.name,
            email: fields.email,
            rating: fields.rating,
            message: fields.message,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fields(&self) -> FeedbackFields {
        FeedbackFields {
            name: self.name.clone(),
            email: self.email.clone(),
            rating: self.rating,
            message: self.message.clone(),
        }
    }

    // Id, owner and creation time are kept.
    pub fn apply(&mut self, fields: FeedbackFields, now: DateTime<Utc>) {
        self.name = fields.name;
        self.email = fields.email;
        self.rating = fields.rating;
        self.message = fields.message;
        self.updated_at = now;
    }

    pub fn to_redis_hash(&self) -> Vec<(String, String)> {
        vec![
            ("id".into(), self.id.to_string()),
            ("owner_id".into(), self.owner_id.clone()),
            ("name".into(), self.name.clone()),
            ("email".into(), self.email.clone()),
            ("rating".into(), self.rating.to_string()),
            ("message".into(), self.message.clone()),
            ("created_at".into(), self.created_at.to_rfc3339()),
            ("updated_at".into(), self.updated_at.to_rfc3339()),
        ]
    }

    pub fn from_redis_hash(map: &HashMap<String, String>) -> Result<Self, AppError> {
        let field = |key: &str| {
            map.get(key)
                .cloned()
                .ok_or_else(|| AppError::Deserialization(format!("Missing {key}")))
        };
        let timestamp = |key: &str| -> Result<DateTime<Utc>, AppError> {
            DateTime::parse_from_rfc3339(&field(key)?)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| AppError::Deserialization(format!("Invalid {key}")))
        };

        Ok(Self {
            id: field("id")?
                .parse()
                .map_err(|_| AppError::Deserialization("Invalid UUID for id".into()))?,
            owner_id: field("owner_id")?,
            name: field("name")?,
            email: field("email")?,
            rating: field("rating")?.parse().map_err(AppError::Deserialization)?,
            message: field("message")?,
            created_at: timestamp("created_at")?,
            updated_at: timestamp("updated_at")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub rating: Option<Rating>,
    pub message: String,
}

impl FeedbackDraft {
    pub fn from_record(record: &FeedbackRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            rating: Some(record.rating),
            message: record.message.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.rating.is_none()
            && self.message.is_empty()
    }

    pub fn to_fields(&self) -> Option<FeedbackFields> {
        Some(FeedbackFields {
            name: self.name.clone(),
            email: self.email.clone(),
            rating: self.rating?,
            message: self.message.clone(),
        })
    }
}
