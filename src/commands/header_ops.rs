use std::io::Write;

use tracing::{debug, warn};

use crate::error::HeaderError;
use crate::models::{NormalizedHeader, OutputFormat};
use crate::normalizer::PLACEHOLDER;

/// Normaliza cada header y lo escribe en `out`, uno por línea.
///
/// Every raw header gets its own normalizer call, so placeholder numbering
/// restarts at 1 for each line. Returns the number of headers written.
pub fn write_headers<W: Write>(
    out: &mut W,
    raw_headers: &[String],
    format: OutputFormat,
) -> Result<usize, HeaderError> {
    let mut written = 0;

    for (idx, raw) in raw_headers.iter().enumerate() {
        if raw.to_lowercase().contains(&format!("{}1", PLACEHOLDER)) {
            warn!(
                line = idx + 1,
                "input already looks normalized; numbered placeholders will be suffixed again"
            );
        }

        let header = NormalizedHeader::from_raw(raw);
        debug!(
            line = idx + 1,
            fields = header.field_count,
            placeholders = header.placeholders,
            "header ready"
        );

        writeln!(out, "{}", header.render(format)?)?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
