use chrono::{DateTime, SecondsFormat};
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::{Style, Width};
use crate::config::constants::{DATE_FIELDS, HIDDEN_FIELDS, INDEX_COLUMN, VALUES_COLUMN};
use crate::errors::{PitchError, PitchResult};

/// How a result is printed.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub raw: bool,
    /// Hidden on top of the built-in verbose fields.
    pub hidden_fields: Vec<String>,
    /// Truncate table cells so rows fit this many columns.
    pub max_width: Option<usize>,
}

impl RenderOptions {
    pub fn raw() -> Self {
        Self { raw: true, ..Self::default() }
    }

    pub fn table(hidden_fields: Vec<String>) -> Self {
        Self { raw: false, hidden_fields, max_width: None }
    }

    pub fn with_terminal_width(mut self) -> Self {
        self.max_width = terminal_size::terminal_size().map(|(width, _)| usize::from(width.0));
        self
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    /// Epoch seconds to an ISO-8601 UTC string with millisecond precision.
    // Out-of-range values saturate and are then rejected by `from_timestamp_millis`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn epoch_to_string(epoch: f64) -> Option<String> {
        if !epoch.is_finite() {
            return None;
        }
        let millis = (epoch * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis).map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Drops hidden keys and rewrites numeric date fields; key order is preserved.
    pub fn format_fields(fields: &Map<String, Value>, additional_hidden_fields: &[String]) -> Map<String, Value> {
        let mut formatted = Map::new();

        for (key, value) in fields {
            let hidden = HIDDEN_FIELDS.contains(&key.as_str())
                || additional_hidden_fields.iter().any(|field| field == key);
            if hidden {
                continue;
            }

            let rewritten = if DATE_FIELDS.contains(&key.as_str()) {
                value.as_f64().and_then(Self::epoch_to_string).map(Value::String)
            } else {
                None
            };

            formatted.insert(key.clone(), rewritten.unwrap_or_else(|| value.clone()));
        }

        formatted
    }

    /// List responses wrap their items in `data`.
    pub fn unwrap_data(value: Value) -> Value {
        match value {
            Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
            other => other,
        }
    }

    pub fn render(value: Value, options: &RenderOptions) -> PitchResult<String> {
        let value = Self::unwrap_data(value);

        if value.is_null() {
            return Err(PitchError::EmptyResult { operation: "render".to_string() });
        }

        if options.raw {
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let builder = match &value {
            Value::Array(items) => Self::array_table(items, &options.hidden_fields),
            Value::Object(fields) => Self::object_table(&Self::format_fields(fields, &options.hidden_fields)),
            scalar => {
                let mut builder = Builder::default();
                builder.push_record([VALUES_COLUMN.to_string()]);
                builder.push_record([Self::cell(scalar)]);
                builder
            }
        };

        let mut table = builder.build();
        table.with(Style::modern());
        if let Some(width) = options.max_width {
            table.with(Width::truncate(width).suffix("..."));
        }

        Ok(table.to_string())
    }

    fn array_table(items: &[Value], hidden_fields: &[String]) -> Builder {
        let rows: Vec<Value> = items
            .iter()
            .map(|item| match item {
                Value::Object(fields) => Value::Object(Self::format_fields(fields, hidden_fields)),
                other => other.clone(),
            })
            .collect();

        // Columns are the union of keys in order of first appearance.
        let mut columns: Vec<String> = Vec::new();
        let mut has_scalars = false;
        for row in &rows {
            match row {
                Value::Object(fields) => {
                    for key in fields.keys() {
                        if !columns.contains(key) {
                            columns.push(key.clone());
                        }
                    }
                }
                _ => has_scalars = true,
            }
        }

        let mut builder = Builder::default();
        let mut header = vec![INDEX_COLUMN.to_string()];
        header.extend(columns.iter().cloned());
        if has_scalars {
            header.push(VALUES_COLUMN.to_string());
        }
        builder.push_record(header);

        for (index, row) in rows.iter().enumerate() {
            let mut record = vec![index.to_string()];
            match row {
                Value::Object(fields) => {
                    record.extend(columns.iter().map(|column| fields.get(column).map(Self::cell).unwrap_or_default()));
                    if has_scalars {
                        record.push(String::new());
                    }
                }
                scalar => {
                    record.extend(columns.iter().map(|_| String::new()));
                    record.push(Self::cell(scalar));
                }
            }
            builder.push_record(record);
        }

        builder
    }

    fn object_table(fields: &Map<String, Value>) -> Builder {
        let mut builder = Builder::default();
        builder.push_record([INDEX_COLUMN.to_string(), VALUES_COLUMN.to_string()]);
        for (key, value) in fields {
            builder.push_record([key.clone(), Self::cell(value)]);
        }
        builder
    }

    fn cell(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
