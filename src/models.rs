use serde::Serialize;

use crate::normalizer::normalize_counted;

/// Formato de salida soportado por la CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain header line, ready for `parse_csv`.
    #[default]
    Csv,
    /// One JSON object per header.
    Json,
}

/// A normalized header together with its field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedHeader {
    pub header: String,
    pub fields: Vec<String>,
    pub field_count: usize,
    pub placeholders: usize,
}

impl NormalizedHeader {
    pub fn from_raw(raw: &str) -> Self {
        let (header, placeholders) = normalize_counted(raw);
        let fields: Vec<String> = if header.is_empty() {
            Vec::new()
        } else {
            header.split(',').map(str::to_string).collect()
        };

        Self {
            field_count: fields.len(),
            header,
            fields,
            placeholders,
        }
    }

    /// Renders the header in the requested output format (sin salto de línea).
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Csv => Ok(self.header.clone()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields_and_counts_placeholders() {
        let h = NormalizedHeader::from_raw("Receive Time, FUTURE_USE, Serial Number, FUTURE_USE");
        assert_eq!(h.header, "receive_time,future_use1,serial_number,future_use2");
        assert_eq!(
            h.fields,
            vec!["receive_time", "future_use1", "serial_number", "future_use2"]
        );
        assert_eq!(h.field_count, 4);
        assert_eq!(h.placeholders, 2);
    }

    #[test]
    fn empty_header_has_no_fields() {
        let h = NormalizedHeader::from_raw("");
        assert_eq!(h.header, "");
        assert!(h.fields.is_empty());
        assert_eq!(h.field_count, 0);
    }

    #[test]
    fn csv_render_is_the_bare_header() {
        let h = NormalizedHeader::from_raw("Format: Receive Time, Serial Number");
        assert_eq!(h.render(OutputFormat::Csv).unwrap(), "receive_time,serial_number");
    }

    #[test]
    fn json_render_carries_fields() {
        let h = NormalizedHeader::from_raw("Type, Future_Use");
        let json = h.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["header"], "type,future_use1");
        assert_eq!(value["fields"][1], "future_use1");
        assert_eq!(value["field_count"], 2);
        assert_eq!(value["placeholders"], 1);
    }
}
