use common::model::record::Record;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders `records` as CSV: one header line with `columns`, then one line per
/// record, `\n`-terminated. Values are quoted only when they need it.
///
/// Cells are looked up by column name, so a record listing its keys in another
/// order still lines up with the header.
pub fn records_to_csv(columns: &[String], records: &[Record]) -> Result<String, EncodeError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for record in records {
        writer.write_record(columns.iter().map(|column| {
            record
                .get(column)
                .map(ToString::to_string)
                .unwrap_or_default()
        }))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
