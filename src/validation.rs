use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::models::FeedbackDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackField {
    Name,
    Email,
    Rating,
    Message,
}

impl FeedbackField {
    pub const ALL: [FeedbackField; 4] = [
        FeedbackField::Name,
        FeedbackField::Email,
        FeedbackField::Rating,
        FeedbackField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackField::Name => "name",
            FeedbackField::Email => "email",
            FeedbackField::Rating => "rating",
            FeedbackField::Message => "message",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            FeedbackField::Name => "Please enter your name",
            FeedbackField::Email => "Please enter your email",
            FeedbackField::Rating => "Please give a rating",
            FeedbackField::Message => "Please write your feedback",
        }
    }
}

impl fmt::Display for FeedbackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FeedbackField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FeedbackField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FeedbackField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeedbackField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FeedbackField) {
        self.0.insert(field, field.required_message().to_string());
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate(draft: &FeedbackDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if is_blank(&draft.name) {
        errors.insert(FeedbackField::Name);
    }
    if is_blank(&draft.email) {
        errors.insert(FeedbackField::Email);
    }
    if draft.rating.is_none() {
        errors.insert(FeedbackField::Rating);
    }
    if is_blank(&draft.message) {
        errors.insert(FeedbackField::Message);
    }

    errors
}
