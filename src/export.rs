use std::io;
use std::path::Path;
use csv::WriterBuilder;
use crate::schedule::GridModel;

/// Writes the grid as CSV: a `room,<slot labels...>` header, then one row per
/// room with `X` in reserved cells
pub fn write_grid_csv<W: io::Write>(grid: &GridModel, writer: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut header = vec!["room"];
    header.extend(grid.time_slots().iter().map(String::as_str));
    wtr.write_record(&header)?;

    for (room_index, room) in grid.rooms().iter().enumerate() {
        let mut record = vec![room.as_str()];
        record.extend(
            (0..grid.slot_count()).map(|slot| if grid.is_reserved(room_index, slot) { "X" } else { "" }),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// CSV export as an in-memory string, used by the HTTP layer
pub fn grid_to_csv_string(grid: &GridModel) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_grid_csv(grid, &mut buf)?;
    String::from_utf8(buf).map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Exports the grid to a CSV file, replacing any previous export
pub fn export_grid_to_csv(grid: &GridModel, csv_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(csv_path)?;
    write_grid_csv(grid, file)?;
    Ok(())
}
