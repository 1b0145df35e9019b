//! The canonical answer record.

use crate::error::BriefingError;
use crate::normalize::coerce_flag;
use crate::schema::{Field, FieldKind, Flag};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Flag(Flag),
}

impl AnswerValue {
    pub fn as_str(&self) -> &str {
        match self {
            AnswerValue::Text(text) => text,
            AnswerValue::Flag(flag) => flag.as_str(),
        }
    }

    fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => AnswerValue::Text(String::new()),
            FieldKind::Flag => AnswerValue::Flag(Flag::Nao),
        }
    }
}

/// Normalized answers of one submission.
///
/// Every schema field is present. Flag fields hold `Sim`/`Não`, text fields hold
/// a possibly empty string, and conditional fields are empty whenever their
/// governing flag is `Não`. The record has no mutators once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    values: BTreeMap<Field, AnswerValue>,
}

impl Answers {
    pub fn builder() -> AnswersBuilder {
        AnswersBuilder::default()
    }

    pub fn get(&self, field: Field) -> &AnswerValue {
        // Builder fills every field, so the map is total.
        &self.values[&field]
    }

    /// Raw text of a field; flags render as their token
    pub fn text(&self, field: Field) -> &str {
        self.get(field).as_str()
    }

    pub fn flag(&self, field: Field) -> Flag {
        match self.get(field) {
            AnswerValue::Flag(flag) => *flag,
            AnswerValue::Text(text) => coerce_flag(text),
        }
    }

    pub fn company_name(&self) -> &str {
        self.text(Field::CompanyName)
    }

    /// Required fields that are empty or whitespace-only, in schema order
    pub fn missing_required(&self) -> Vec<Field> {
        Field::required()
            .filter(|field| self.text(*field).trim().is_empty())
            .collect()
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for field in Field::ALL {
            map.serialize_entry(field.key(), self.text(field))?;
        }
        map.end()
    }
}

/// Collects raw values for one submission.
///
/// Fields never set default to empty text or `Não`.
#[derive(Debug, Clone, Default)]
pub struct AnswersBuilder {
    values: BTreeMap<Field, AnswerValue>,
}

impl AnswersBuilder {
    /// Set a value, coercing it to a flag if the field is a flag field
    pub fn value(mut self, field: Field, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = match field.kind() {
            FieldKind::Text => AnswerValue::Text(raw),
            FieldKind::Flag => AnswerValue::Flag(coerce_flag(&raw)),
        };
        self.values.insert(field, value);
        self
    }

    /// Set a flag field directly
    pub fn flag(mut self, field: Field, flag: Flag) -> Self {
        let value = match field.kind() {
            FieldKind::Flag => AnswerValue::Flag(flag),
            FieldKind::Text => AnswerValue::Text(flag.as_str().to_string()),
        };
        self.values.insert(field, value);
        self
    }

    /// Build without checking required fields.
    ///
    /// Conditional fields are cleared when their flag is `Não`.
    pub fn build_unchecked(mut self) -> Answers {
        for field in Field::ALL {
            self.values
                .entry(field)
                .or_insert_with(|| AnswerValue::empty(field.kind()));
        }

        for (flag, dependent) in Field::CONDITIONAL {
            let enabled = matches!(self.values.get(&flag), Some(AnswerValue::Flag(Flag::Sim)));
            if !enabled {
                if let Some(AnswerValue::Text(text)) = self.values.get(&dependent) {
                    if !text.is_empty() {
                        tracing::debug!(
                            field = dependent.key(),
                            flag = flag.key(),
                            "Dropping conditional answer because its flag is Não"
                        );
                    }
                }
                self.values
                    .insert(dependent, AnswerValue::Text(String::new()));
            }
        }

        Answers {
            values: self.values,
        }
    }

    /// Build and reject the record if any required field is empty
    pub fn build(self) -> Result<Answers, BriefingError> {
        let answers = self.build_unchecked();
        let missing = answers.missing_required();
        if missing.is_empty() {
            Ok(answers)
        } else {
            Err(BriefingError::Validation { missing })
        }
    }
}
