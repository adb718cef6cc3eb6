//! Output formatting for command results.
//!
//! Results come back from the orchestration APIs as loosely-typed JSON
//! payloads; this module renders them as JSON, YAML or CSV. CSV rendering is
//! driven by per-resource [`Column`] specs so tabular output stays meaningful
//! for nested payloads.

use csv::Writer;
use serde_json::Value;
use std::io::BufWriter;
use std::str::FromStr;
use strum::EnumIter;

pub const JSON: &str = "json";
pub const YAML: &str = "yaml";
pub const CSV: &str = "csv";

#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("failed to format output due to: {cause:?}")]
    FormatFailure { cause: Box<dyn std::error::Error> },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlSerializationError(#[from] serde_yaml::Error),
    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<BufWriter<Vec<u8>>>>),
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub struct OutputFormatOptions {
    pub pretty: bool,
    pub with_headers: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    Json(OutputFormatOptions),
    Yaml(OutputFormatOptions),
    Csv(OutputFormatOptions),
}

impl OutputFormat {
    pub fn names() -> Vec<&'static str> {
        vec![JSON, YAML, CSV]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        match normalized_format.as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            YAML => Ok(OutputFormat::Yaml(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            _ => Err(FormattingError::UnsupportedOutputFormat(normalized_format)),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Json(_) => write!(f, "json"),
            OutputFormat::Yaml(_) => write!(f, "yaml"),
            OutputFormat::Csv(_) => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

/// One CSV column: where the value lives in the payload and what to call it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub attribute: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, attribute: &'static str) -> Self {
        Column { header, attribute }
    }
}

/// Render a payload in the requested format. `columns` only applies to CSV;
/// the payload may be a single object or an array of objects.
pub fn format_value(
    value: &Value,
    format: &OutputFormat,
    columns: &[Column],
) -> Result<String, FormattingError> {
    match format {
        OutputFormat::Json(options) => {
            if options.pretty {
                Ok(serde_json::to_string_pretty(value)?)
            } else {
                Ok(serde_json::to_string(value)?)
            }
        }
        OutputFormat::Yaml(_) => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Csv(options) => to_csv(value, columns, options.with_headers),
    }
}

fn cell_text(row: &Value, attribute: &str) -> Result<String, FormattingError> {
    match row.get(attribute) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        // Nested values render as compact JSON so the cell stays one field.
        Some(other) => Ok(serde_json::to_string(other)?),
    }
}

fn to_csv(value: &Value, columns: &[Column], with_headers: bool) -> Result<String, FormattingError> {
    let rows: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let buf = BufWriter::new(Vec::new());
    let mut wtr = Writer::from_writer(buf);
    if with_headers {
        wtr.write_record(columns.iter().map(|c| c.header))?;
    }
    for row in rows {
        let mut record = Vec::with_capacity(columns.len());
        for column in columns {
            record.push(cell_text(row, column.attribute)?);
        }
        wtr.write_record(&record)?;
    }
    wtr.flush()
        .map_err(|cause| FormattingError::FormatFailure {
            cause: Box::new(cause),
        })?;
    let bytes = wtr
        .into_inner()?
        .into_inner()
        .map_err(|cause| FormattingError::FormatFailure {
            cause: Box::new(cause),
        })?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[Column] = &[
        Column::new("NAME", "name"),
        Column::new("STATE", "state"),
    ];

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(FormattingError::UnsupportedOutputFormat(f)) if f == "xml"
        ));
    }

    #[test]
    fn format_names_parse_case_insensitively() {
        for name in OutputFormat::names() {
            assert!(OutputFormat::from_str(&name.to_uppercase()).is_ok());
        }
    }

    #[test]
    fn json_compact_and_pretty() {
        let value = json!({"name": "a"});
        let compact = format_value(&value, &OutputFormat::default(), &[]).unwrap();
        assert_eq!(compact, "{\"name\":\"a\"}");
        let pretty = format_value(
            &value,
            &OutputFormat::Json(OutputFormatOptions {
                pretty: true,
                with_headers: false,
            }),
            &[],
        )
        .unwrap();
        assert!(pretty.contains("\n"));
    }

    #[test]
    fn yaml_output() {
        let value = json!({"name": "a"});
        let yaml = format_value(
            &value,
            &OutputFormat::Yaml(OutputFormatOptions::default()),
            &[],
        )
        .unwrap();
        assert!(yaml.contains("name: a"));
    }

    #[test]
    fn csv_renders_rows_per_array_element() {
        let value = json!([
            {"name": "a", "state": "Active"},
            {"name": "b", "state": "Broken", "extra": 1}
        ]);
        let csv = format_value(
            &value,
            &OutputFormat::Csv(OutputFormatOptions {
                pretty: false,
                with_headers: true,
            }),
            COLUMNS,
        )
        .unwrap();
        assert_eq!(csv, "NAME,STATE\na,Active\nb,Broken\n");
    }

    #[test]
    fn csv_missing_and_nested_cells() {
        let value = json!({"name": "a", "state": {"current": "Active"}});
        let csv = format_value(
            &value,
            &OutputFormat::Csv(OutputFormatOptions::default()),
            COLUMNS,
        )
        .unwrap();
        assert_eq!(csv, "a,\"{\"\"current\"\":\"\"Active\"\"}\"\n");
    }
}
