//! Zone-file rendering.
//!
//! Each exported zone becomes one block of text: a comment header,
//! `$ORIGIN` and `$TTL` directives, a SOA line synthesized from the
//! domain's settings, one line per resource record, and a trailing comment
//! section listing the provider's `REDIRECT` pseudo-records.

use crate::error::{ExportError, Result};
use crate::types::{Domain, Record, RecordType, RedirectEntry};

/// Result of formatting one provider record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedRecord {
    /// A finished zone-file line.
    Line(String),
    /// A redirect destined for the zone's trailing comment section.
    Redirect(RedirectEntry),
}

/// Formats one record as either a zone-file line or a redirect entry.
///
/// `REDIRECT` pseudo-records never become record lines; they turn into
/// [`RedirectEntry`] values for the zone's comment section. MX and SRV data
/// is prefixed with the record's priority, and a missing priority is a hard
/// error rather than a silently malformed line. TXT and record-level SOA
/// data is wrapped in one pair of double quotes; embedded quotes are not
/// escaped.
pub fn format_record(record: &Record) -> Result<FormattedRecord> {
    if record.record_type == RecordType::Redirect {
        return Ok(FormattedRecord::Redirect(RedirectEntry {
            source_url: format!("http://{}/", record.fullname),
            target_url: record.data.clone(),
        }));
    }

    let data = match record.record_type {
        RecordType::Mx | RecordType::Srv => {
            let aux = record.aux.ok_or_else(|| ExportError::MissingPriority {
                fullname: record.fullname.clone(),
                record_type: record.record_type.clone(),
            })?;
            format!("{aux} {}", record.data)
        }
        RecordType::Txt | RecordType::Soa => format!("\"{}\"", record.data),
        _ => record.data.clone(),
    };

    Ok(FormattedRecord::Line(format!(
        "{}. {} IN {} {}",
        record.fullname, record.ttl, record.record_type, data
    )))
}

/// Renders one domain and its records as an ordered zone block.
///
/// Record lines keep the order `records` was supplied in. Redirects are
/// collected in that same order and appended as a comment section after the
/// record lines. The block always ends with one empty line, and the first
/// [`format_record`] error aborts the render.
pub fn render_zone(domain: &Domain, records: &[Record]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(records.len() + 8);
    let mut redirects = Vec::new();

    lines.push(format!(";; ZONE - {} ;;", domain.name));
    lines.push(format!(";; EXPIRES: {}", domain.expires));
    lines.push(format!("$ORIGIN {}", domain.name));
    lines.push(format!("$TTL {}", domain.ttl));
    lines.push(format!(
        "{}. IN SOA {} {} ( {} {} {} {} {} )",
        domain.name,
        domain.ns,
        domain.mbox,
        domain.serial,
        domain.refresh,
        domain.retry,
        domain.expire,
        domain.ttl
    ));
    lines.push(String::new());

    for record in records {
        match format_record(record)? {
            FormattedRecord::Line(line) => lines.push(line),
            FormattedRecord::Redirect(entry) => redirects.push(entry),
        }
    }

    if !redirects.is_empty() {
        lines.push(String::new());
        lines.push(format!(";; DOMAIN REDIRECTS - {} ;;", domain.name));
        for redirect in &redirects {
            lines.push(format!(
                "; REDIRECT: {} => {}",
                redirect.source_url, redirect.target_url
            ));
        }
    }

    lines.push(String::new());
    Ok(lines)
}
