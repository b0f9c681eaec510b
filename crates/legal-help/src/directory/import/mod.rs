mod parser;

use crate::directory::domain::{Lawyer, RecordId};
use chrono::{DateTime, Utc};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use parser::{parse_flag, split_list, LawyerRow};

#[derive(Debug)]
pub enum LawyerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for LawyerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LawyerImportError::Io(err) => write!(f, "failed to read lawyer export: {}", err),
            LawyerImportError::Csv(err) => write!(f, "invalid lawyer CSV data: {}", err),
            LawyerImportError::InvalidRow { line, reason } => {
                write!(f, "lawyer export line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for LawyerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LawyerImportError::Io(err) => Some(err),
            LawyerImportError::Csv(err) => Some(err),
            LawyerImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for LawyerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LawyerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads lawyer listings from a CSV export. List cells use `;` separators.
pub struct LawyerImporter;

impl LawyerImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        imported_at: DateTime<Utc>,
    ) -> Result<Vec<Lawyer>, LawyerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, imported_at)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        imported_at: DateTime<Utc>,
    ) -> Result<Vec<Lawyer>, LawyerImportError> {
        let mut lawyers = Vec::new();

        for (index, row) in parser::parse_rows(reader)?.into_iter().enumerate() {
            let id = RecordId(format!("lawyer-csv-{:04}", index + 1));
            lawyers.push(build_lawyer(id, row, imported_at)?);
        }

        debug!(rows = lawyers.len(), "lawyer export parsed");
        Ok(lawyers)
    }
}

fn build_lawyer(
    id: RecordId,
    row: LawyerRow,
    imported_at: DateTime<Utc>,
) -> Result<Lawyer, LawyerImportError> {
    let LawyerRow { line, fields } = row;
    let invalid = |reason: String| LawyerImportError::InvalidRow { line, reason };

    if fields.name.trim().is_empty() {
        return Err(invalid("name is required".to_string()));
    }
    if fields.phone.trim().is_empty() {
        return Err(invalid(format!("{} has no phone number", fields.name)));
    }

    let rating = fields
        .rating
        .as_deref()
        .map(|raw| {
            raw.parse::<f32>()
                .ok()
                .filter(|value| (0.0..=5.0).contains(value))
                .ok_or_else(|| invalid(format!("rating '{raw}' must be between 0 and 5")))
        })
        .transpose()?;

    let review_count = fields
        .review_count
        .as_deref()
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| invalid(format!("review count '{raw}' is not a number")))
        })
        .transpose()?;

    let years_of_experience = fields
        .years_of_experience
        .as_deref()
        .map(|raw| {
            raw.parse::<u16>()
                .map_err(|_| invalid(format!("years of experience '{raw}' is not a number")))
        })
        .transpose()?;

    let accepts_legal_aid = match fields.accepts_legal_aid.as_deref() {
        Some(raw) => parse_flag(raw)
            .ok_or_else(|| invalid(format!("accepts legal aid '{raw}' is not yes/no")))?,
        None => false,
    };

    Ok(Lawyer {
        id,
        name: fields.name,
        firm: fields.firm,
        specialties: split_list(&fields.specialties),
        phone: fields.phone,
        email: fields.email,
        address: fields.address,
        website: fields.website,
        rating,
        review_count,
        accepts_legal_aid,
        languages: split_list(&fields.languages),
        years_of_experience,
        created_at: imported_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Name,Firm,Specialties,Phone,Email,Address,Website,Rating,Review Count,Accepts Legal Aid,Languages,Years of Experience\n";

    fn import(body: &str) -> Result<Vec<Lawyer>, LawyerImportError> {
        let csv = format!("{HEADER}{body}");
        LawyerImporter::from_reader(Cursor::new(csv), Utc::now())
    }

    #[test]
    fn importer_reads_list_cells_and_optional_fields() {
        let lawyers = import(
            "Ana Ruiz,Ruiz Law,Family Law; Divorce ;,403-555-0000,,,,4.2,12,yes,English;Spanish,7\n\
Ben Ode,,Criminal Law,403-555-1111,ben@example.ca,,,,,no,English,\n",
        )
        .expect("import succeeds");

        assert_eq!(lawyers.len(), 2);
        let ana = &lawyers[0];
        assert_eq!(ana.id, RecordId::new("lawyer-csv-0001"));
        assert_eq!(ana.specialties, vec!["Family Law", "Divorce"]);
        assert_eq!(ana.languages, vec!["English", "Spanish"]);
        assert_eq!(ana.rating, Some(4.2));
        assert_eq!(ana.review_count, Some(12));
        assert!(ana.accepts_legal_aid);
        assert_eq!(ana.years_of_experience, Some(7));
        assert!(ana.email.is_none());

        let ben = &lawyers[1];
        assert!(ben.firm.is_none());
        assert_eq!(ben.email.as_deref(), Some("ben@example.ca"));
        assert!(!ben.accepts_legal_aid);
        assert!(ben.rating.is_none());
    }

    #[test]
    fn importer_rejects_out_of_range_ratings() {
        let error = import("Ana Ruiz,,Family Law,403-555-0000,,,,9.5,,yes,English,\n")
            .expect_err("rating rejected");

        match error {
            LawyerImportError::InvalidRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("9.5"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn importer_requires_a_phone_number() {
        let error =
            import("Ana Ruiz,,Family Law,,,,,,,yes,English,\n").expect_err("phone required");
        assert!(matches!(error, LawyerImportError::InvalidRow { .. }));
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = LawyerImporter::from_path("./does-not-exist.csv", Utc::now())
            .expect_err("expected io error");

        match error {
            LawyerImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn list_cells_and_flags_parse_leniently() {
        assert_eq!(parser::split_list(" a ;; b;"), vec!["a", "b"]);
        assert_eq!(parser::parse_flag("Y"), Some(true));
        assert_eq!(parser::parse_flag("0"), Some(false));
        assert_eq!(parser::parse_flag("maybe"), None);
    }
}
