use std::{fs::File, io, path::Path};

use tracing::info;

use crate::{
    error::{Result, TopsisError},
    score::Evaluation,
};

/// Columns appended to every result, in output order.
pub const RESULT_COLUMNS: [&str; 4] = [
    "Distance from Ideal Best",
    "Distance from Ideal Worst",
    "TOPSIS Score",
    "Rank",
];

/// A comma-separated table with a header row. Cells are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Table {
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => TopsisError::InputNotFound {
                path: path.to_owned(),
            },
            _ => unreadable(path, err),
        })?;
        Self::from_reader(file).map_err(|err| unreadable(path, err))
    }

    /// Ragged records and invalid UTF-8 are rejected.
    pub fn from_reader<R: io::Read>(reader: R) -> std::result::Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let header: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        let records = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_owned).collect::<Vec<String>>()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { header, records })
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Copy of this table with the criterion cells (every column but the first) replaced by the
    /// given column-major values.
    pub fn with_criteria(&self, columns: &[Vec<f64>]) -> Self {
        let records = self
            .records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                record
                    .iter()
                    .take(1)
                    .cloned()
                    .chain(columns.iter().map(|column| column[row].to_string()))
                    .collect::<Vec<String>>()
            })
            .collect();
        Self {
            header: self.header.clone(),
            records,
        }
    }
}

fn unreadable(path: &Path, err: impl std::fmt::Display) -> TopsisError {
    TopsisError::InputUnreadable {
        path: path.to_owned(),
        reason: err.to_string(),
    }
}

/// The input table augmented with one `Evaluation` per row.
#[derive(Clone, Debug)]
pub struct ResultTable {
    pub table: Table,
    pub evaluations: Vec<Evaluation>,
}

impl ResultTable {
    pub fn to_csv(&self) -> io::Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.table.header.iter().map(String::as_str).chain(RESULT_COLUMNS))?;
        for (record, evaluation) in self.table.records.iter().zip(&self.evaluations) {
            let appended = [
                evaluation.distance_best.to_string(),
                evaluation.distance_worst.to_string(),
                evaluation.score.to_string(),
                evaluation.rank.map(|r| r.to_string()).unwrap_or_default(),
            ];
            writer.write_record(record.iter().chain(&appended))?;
        }
        writer.into_inner().map_err(|err| err.into_error())
    }

    /// The result is serialized before the file is created, so nothing is written unless the
    /// whole table can be.
    pub fn write(&self, path: &Path) -> Result<()> {
        let write_error = |source| TopsisError::OutputWriteError {
            path: path.to_owned(),
            source,
        };
        let bytes = self.to_csv().map_err(write_error)?;
        std::fs::write(path, bytes).map_err(write_error)?;
        info!(path = %path.display(), rows = self.evaluations.len(), "result written");
        Ok(())
    }
}
