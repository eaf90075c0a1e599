use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "type", "payment", "tx", "operation", "status", "amount", "currency",
];

/// Writes a gateway event log with the given rows after the header.
pub fn write_events(path: &Path, rows: &[[&str; 7]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes an event log that opens `payments` payments and leaves one
/// preauth in flight on each.
pub fn write_open_payments(path: &Path, payments: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for i in 1..=payments {
        let client_id = format!("order-{i:04}");
        let tx = format!("tx-{i}");
        wtr.write_record([
            "open",
            &client_id,
            "",
            "",
            "",
            "1.00",
            "USD",
        ])?;
        wtr.write_record(["submit", &client_id, &tx, "preauth", "", "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
