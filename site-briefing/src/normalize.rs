//! Input normalization.
//!
//! Two sources feed the same [`Answers`] record:
//!
//! * **form values**: one value per field, keyed by the field's wire key;
//! * **tabular record**: the first data row of a CSV export whose column
//!   headers are the questionnaire's question strings.
//!
//! Flag answers from either source go through [`coerce_flag`].

use crate::answers::{Answers, AnswersBuilder};
use crate::error::BriefingError;
use crate::schema::{Field, FieldKind, Flag, ADDITIONAL_CONSIDERATIONS_QUESTION};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Prefixes that make a free-text answer affirmative
pub const AFFIRMATIVE_TOKENS: [&str; 4] = ["sim", "s", "yes", "y"];

/// Separator between the two questions merged into `consideracoes_finais`
pub const CONSIDERATIONS_SEPARATOR: &str = "\n\n";

/// Discrete field values as submitted by a form, keyed by wire key
pub type FormValues = serde_json::Map<String, Value>;

/// Coerce a free-text answer to `Sim`/`Não`.
///
/// The answer is affirmative when, lower-cased and trimmed, it starts with one of
/// [`AFFIRMATIVE_TOKENS`]. Anything else, including the empty string, is `Não`.
pub fn coerce_flag(raw: &str) -> Flag {
    let lowered = raw.trim().to_lowercase();
    let affirmative = AFFIRMATIVE_TOKENS
        .iter()
        .any(|token| lowered.starts_with(token));
    Flag::from(affirmative)
}

/// Where a submission's answers come from
#[derive(Debug, Clone)]
pub enum AnswerSource {
    Form(FormValues),
    /// Raw CSV text
    Table(String),
}

impl AnswerSource {
    /// Read a JSON object of form values
    pub fn from_form_file(path: &Path) -> Result<Self, BriefingError> {
        let text = read_utf8(path)?;
        Ok(AnswerSource::Form(parse_form_json(&text)?))
    }

    /// Read an uploaded CSV table
    pub fn from_table_file(path: &Path) -> Result<Self, BriefingError> {
        Ok(AnswerSource::Table(read_utf8(path)?))
    }

    /// Produce the validated canonical record
    pub fn normalize(&self) -> Result<Answers, BriefingError> {
        match self {
            AnswerSource::Form(values) => from_form(values),
            AnswerSource::Table(csv) => from_table(&parse_table(csv)?),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnswerSource::Form(_) => "form",
            AnswerSource::Table(_) => "table",
        }
    }
}

fn read_utf8(path: &Path) -> Result<String, BriefingError> {
    let bytes = std::fs::read(path).map_err(|e| {
        BriefingError::input(format!("não foi possível ler {}: {}", path.display(), e))
    })?;
    String::from_utf8(bytes).map_err(|e| {
        BriefingError::input(format!("{} não está em UTF-8: {}", path.display(), e))
    })
}

pub fn parse_form_json(json: &str) -> Result<FormValues, BriefingError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(values) => Ok(values),
        other => Err(BriefingError::input(format!(
            "o formulário deve ser um objeto JSON, recebido: {}",
            json_type_name(&other)
        ))),
    }
}

/// Build answers from discrete form values.
///
/// Values pass through unchanged apart from flag coercion and conditional-field
/// suppression. Unknown keys are ignored.
pub fn from_form(values: &FormValues) -> Result<Answers, BriefingError> {
    for key in values.keys() {
        if Field::from_key(key).is_none() {
            tracing::debug!(key = %key, "Ignoring unknown form field");
        }
    }

    let mut builder = Answers::builder();
    for field in Field::ALL {
        builder = match values.get(field.key()) {
            Some(value) => apply_form_value(builder, field, value)?,
            None => builder,
        };
    }
    builder.build()
}

fn apply_form_value(
    builder: AnswersBuilder,
    field: Field,
    value: &Value,
) -> Result<AnswersBuilder, BriefingError> {
    let builder = match (value, field.kind()) {
        (Value::Null, _) => builder,
        (Value::Bool(b), FieldKind::Flag) => builder.flag(field, Flag::from(*b)),
        (Value::Bool(b), FieldKind::Text) => builder.value(field, b.to_string()),
        (Value::String(s), _) => builder.value(field, s.as_str()),
        (Value::Number(n), _) => builder.value(field, n.to_string()),
        // Multi-select widgets submit lists of options
        (Value::Array(items), FieldKind::Text) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(invalid_type(field, other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder.value(field, parts.join(", "))
        }
        (other, _) => return Err(invalid_type(field, other)),
    };
    Ok(builder)
}

fn invalid_type(field: Field, value: &Value) -> BriefingError {
    BriefingError::input(format!(
        "campo {} tem tipo inválido: {}",
        field.key(),
        json_type_name(value)
    ))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "texto",
        Value::Array(_) => "lista",
        Value::Object(_) => "objeto",
    }
}

/// First data row of an uploaded table, keyed by normalized header
#[derive(Debug, Clone, Default)]
pub struct TableRecord {
    cells: HashMap<String, String>,
}

impl TableRecord {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let cells = pairs
            .into_iter()
            .map(|(header, cell)| (normalize_header(header.as_ref()), cell.into()))
            .collect();
        Self { cells }
    }

    /// Cell under a question, or `None` when the column is absent
    pub fn get(&self, question: &str) -> Option<&str> {
        self.cells
            .get(&normalize_header(question))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Trim whitespace, a UTF-8 BOM and a trailing required marker from a header
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_start_matches('\u{feff}')
        .trim()
        .trim_end_matches('*')
        .trim_end()
        .to_string()
}

/// Parse CSV text and keep its first data row.
///
/// The delimiter is `;` when the header line has more `;` than `,` outside quotes,
/// otherwise `,`.
pub fn parse_table(data: &str) -> Result<TableRecord, BriefingError> {
    if data.trim().is_empty() {
        return Err(BriefingError::input("o arquivo enviado está vazio"));
    }

    let delimiter = detect_delimiter(data);
    // Exports drop trailing empty cells, so short rows are accepted
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let record = match reader.records().next() {
        Some(record) => record?,
        None => {
            return Err(BriefingError::input(
                "a planilha não possui nenhuma linha de respostas",
            ))
        }
    };

    tracing::debug!(
        columns = headers.len(),
        delimiter = %(delimiter as char),
        "Read first table row"
    );

    Ok(TableRecord::from_pairs(
        headers.iter().zip(record.iter()),
    ))
}

fn detect_delimiter(data: &str) -> u8 {
    let header_line = data.lines().next().unwrap_or_default();
    let mut in_quotes = false;
    let (mut semicolons, mut commas) = (0usize, 0usize);
    for ch in header_line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => semicolons += 1,
            ',' if !in_quotes => commas += 1,
            _ => {}
        }
    }
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

/// Build answers from the first row of an uploaded table.
///
/// Absent columns read as empty, so absent flag columns read as `Não`.
/// `consideracoes_finais` joins its two source questions with a blank line.
pub fn from_table(record: &TableRecord) -> Result<Answers, BriefingError> {
    let mut builder = Answers::builder();
    for field in Field::ALL {
        let value = if field == Field::FinalConsiderations {
            let other_needs = record.get(field.question()).unwrap_or_default();
            let additional = record
                .get(ADDITIONAL_CONSIDERATIONS_QUESTION)
                .unwrap_or_default();
            format!("{other_needs}{CONSIDERATIONS_SEPARATOR}{additional}")
        } else {
            record.get(field.question()).unwrap_or_default().to_string()
        };
        builder = builder.value(field, value);
    }
    builder.build()
}

/// Blank CSV template: one `;`-delimited header row with every question
pub fn table_template() -> Result<String, BriefingError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    let mut headers: Vec<&str> = Field::ALL.iter().map(|field| field.question()).collect();
    headers.push(ADDITIONAL_CONSIDERATIONS_QUESTION);
    writer.write_record(&headers)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| BriefingError::input(format!("falha ao gerar o modelo: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| BriefingError::input(format!("falha ao gerar o modelo: {}", e)))
}
