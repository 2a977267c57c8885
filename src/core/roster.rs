use crate::domain::model::RosterRecord;
use crate::utils::error::Result;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Loads the roster at `path`, in file order.
///
/// A missing file is reported and yields no records. A row that lacks one of
/// the expected columns is an error for the whole roster.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<RosterRecord>> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!("Roster file not found: {}", path.display());
            println!("Error: The file {} was not found.", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let records = read_roster(file)?;
    tracing::info!("📋 Loaded {} roster records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_roster<R: Read>(reader: R) -> Result<Vec<RosterRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<RosterRecord>() {
        let record = row?;
        tracing::debug!(
            "Roster row: {}, {} ({}) section {}",
            record.last_name,
            record.first_name,
            record.username,
            record.section_number
        );
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProvisionError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "last name,first name,username,github username,section number\n";

    #[test]
    fn test_read_roster_trims_fields() {
        let data = format!("{} Doe , Jane , jdoe ,jdoe-gh, 3 \n", HEADER);
        let records = read_roster(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            RosterRecord {
                last_name: "Doe".to_string(),
                first_name: "Jane".to_string(),
                username: "jdoe".to_string(),
                github_username: "jdoe-gh".to_string(),
                section_number: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_read_roster_preserves_row_order_and_ignores_extra_columns() {
        let data = "email,section number,username,github username,first name,last name\n\
                    a@x.edu,1,alpha,alpha-gh,Al,Pha\n\
                    b@x.edu,2,bravo,bravo-gh,Bra,Vo\n";
        let records = read_roster(data.as_bytes()).unwrap();

        let usernames: Vec<&str> = records.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(usernames, vec!["alpha", "bravo"]);
        assert_eq!(records[1].section_number, "2");
    }

    #[test]
    fn test_read_roster_missing_column_is_error() {
        let data = "last name,first name,username,section number\nDoe,Jane,jdoe,3\n";
        let result = read_roster(data.as_bytes());
        assert!(matches!(result, Err(ProvisionError::CsvError(_))));
    }

    #[test]
    fn test_read_roster_column_names_are_case_sensitive() {
        let data = "Last Name,First Name,Username,GitHub Username,Section Number\nDoe,Jane,jdoe,jdoe-gh,3\n";
        assert!(read_roster(data.as_bytes()).is_err());
    }

    #[test]
    fn test_read_roster_short_row_is_error() {
        let data = format!("{}Doe,Jane,jdoe\n", HEADER);
        assert!(read_roster(data.as_bytes()).is_err());
    }

    #[test]
    fn test_read_roster_tolerates_trailing_extra_field() {
        let data = format!("{}Doe,Jane,jdoe,jdoe-gh,3\nRoe,Rich,rroe,rroe-gh,12,\n", HEADER);
        let records = read_roster(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].username, "jdoe");
        assert_eq!(records[1].username, "rroe");
        assert_eq!(records[1].section_number, "12");
    }

    #[test]
    fn test_load_roster_missing_file_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_roster(dir.path().join("nope.csv")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}Doe,Jane,jdoe,jdoe-gh,3\nRoe,Rich,rroe,rroe-gh,12\n", HEADER).unwrap();

        let records = load_roster(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].github_username, "rroe-gh");
    }
}
