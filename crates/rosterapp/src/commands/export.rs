use chrono::NaiveDate;

use crate::attributes::Schema;
use crate::commands::helpers::{select_records, Query};
use crate::commands::{CmdMessage, CmdResult, ExportFile};
use crate::config::RosterConfig;
use crate::domains::Domain;
use crate::error::{Result, RosterError};
use crate::model::Record;
use crate::store::DataStore;

/// Export the filtered collection as CSV.
///
/// Columns are the schema's exported fields, headed by their labels. Every
/// cell is quoted. The file name is `<prefix>-<domain>-<date>.csv`.
pub fn run<S: DataStore>(
    store: &S,
    domain: Domain,
    query: &Query,
    config: &RosterConfig,
    today: NaiveDate,
) -> Result<CmdResult> {
    let data = store.load()?;
    let selected = select_records(&data, domain, query)?;

    let contents = write_csv(&selected.records, domain.schema())?;
    let filename = format!(
        "{}-{}-{}.csv",
        config.export_prefix,
        domain.name(),
        today.format("%Y-%m-%d")
    );

    let mut result = CmdResult::for_domain(domain);
    result.warnings = selected.warnings;
    result.add_message(CmdMessage::success(format!(
        "Exported {} {} to CSV file.",
        selected.records.len(),
        domain.noun()
    )));
    result.export = Some(ExportFile { filename, contents });
    Ok(result)
}

fn write_csv(records: &[Record], schema: &Schema) -> Result<String> {
    // Header quoted only where needed, every data cell quoted.
    let headers: Vec<&str> = schema.exported().map(|spec| spec.label).collect();
    let mut header = csv_writer(csv::QuoteStyle::Necessary, Vec::new());
    header.write_record(&headers)?;
    let bytes = into_bytes(header)?;

    let mut wtr = csv_writer(csv::QuoteStyle::Always, bytes);
    for record in records {
        let row: Vec<String> = schema.exported().map(|spec| record.text(spec.name)).collect();
        wtr.write_record(&row)?;
    }

    let bytes = into_bytes(wtr)?;
    String::from_utf8(bytes).map_err(|e| RosterError::Store(e.to_string()))
}

fn csv_writer(style: csv::QuoteStyle, buf: Vec<u8>) -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buf)
}

fn into_bytes(wtr: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    wtr.into_inner().map_err(|e| RosterError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_member_export_matches_directory_layout() {
        let store = StoreFixture::new().with_sample().store;
        let res = run(
            &store,
            Domain::Members,
            &Query::default(),
            &RosterConfig::default(),
            today(),
        )
        .unwrap();

        let file = res.export.unwrap();
        assert_eq!(file.filename, "rotaract-members-2024-03-01.csv");

        let lines: Vec<&str> = file.contents.lines().collect();
        assert_eq!(
            lines[0],
            "Name,Email,Phone,Club,Role,Position,Location,Join Date"
        );
        assert_eq!(lines.len(), 7);
        // Sivaa SP has no position
        assert_eq!(
            lines[5],
            "\"Sivaa SP\",\"sivaasp1078@gmail.com\",\"+91 8925647608\",\"Rotaract Club of KPRCAS\",\"Member\",\"\",\"Coimbatore, India\",\"2022-03-18T00:00:00.000Z\""
        );
        assert_eq!(res.messages[0].content, "Exported 6 members to CSV file.");
    }

    #[test]
    fn test_header_quoted_only_when_needed() {
        const FIELDS: &[crate::attributes::FieldSpec] = &[
            crate::attributes::FieldSpec::new("a", "Plain", crate::attributes::FieldKind::Text)
                .exported(),
            crate::attributes::FieldSpec::new("b", "Date, Time", crate::attributes::FieldKind::Text)
                .exported(),
        ];
        let records = vec![Record::new("1").with("a", "x").with("b", "y")];
        let csv = write_csv(&records, &Schema::new("t", FIELDS)).unwrap();
        assert_eq!(csv, "Plain,\"Date, Time\"\n\"x\",\"y\"\n");
    }

    #[test]
    fn test_export_respects_filters() {
        let store = StoreFixture::new().with_sample().store;
        let query = Query::search("finance");
        let config = RosterConfig {
            export_prefix: "d3206".into(),
            ..Default::default()
        };
        let res = run(&store, Domain::Members, &query, &config, today()).unwrap();
        let file = res.export.unwrap();
        assert_eq!(file.filename, "d3206-members-2024-03-01.csv");
        assert_eq!(file.contents.lines().count(), 2);
        assert_eq!(res.messages[0].content, "Exported 1 members to CSV file.");
    }

    #[test]
    fn test_export_quotes_embedded_quotes() {
        let records = vec![Record::new("1").with("title", "The \"Big\" Day")];
        const FIELDS: &[crate::attributes::FieldSpec] = &[crate::attributes::FieldSpec::new(
            "title",
            "Title",
            crate::attributes::FieldKind::Text,
        )
        .exported()];
        let csv = write_csv(&records, &Schema::new("t", FIELDS)).unwrap();
        assert_eq!(csv, "Title\n\"The \"\"Big\"\" Day\"\n");
    }
}
