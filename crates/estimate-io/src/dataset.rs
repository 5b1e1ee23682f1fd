use std::fs;
use std::path::Path;

use estimate_core::Matrix;

use crate::error::{DatasetError, DatasetResult};

/// Whether rows carry a trailing target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// `k` attributes followed by the target on every row.
    Training,
    /// `k` attributes only.
    Query,
}

impl DatasetKind {
    fn values_per_row(self, num_attributes: usize) -> usize {
        match self {
            DatasetKind::Training => num_attributes + 1,
            DatasetKind::Query => num_attributes,
        }
    }
}

/// The three header fields at the top of every dataset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetHeader {
    pub name: String,
    pub num_attributes: usize,
    pub num_rows: usize,
}

/// A parsed dataset.
///
/// `features` is the design matrix: column 0 is the intercept (always 1.0),
/// columns `1..=k` are the attributes in file order. `targets` is present
/// only for training data.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub header: DatasetHeader,
    pub features: Matrix<f64>,
    pub targets: Option<Matrix<f64>>,
}

impl Dataset {
    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn num_attributes(&self) -> usize {
        self.header.num_attributes
    }

    pub fn num_rows(&self) -> usize {
        self.header.num_rows
    }
}

// ─── Tokenizer ──────────────────────────────────────────────────────────────

/// Whitespace-delimited tokens, each tagged with its 1-based line number.
struct Tokens<'a> {
    items: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let items = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Tokens { items, pos: 0 }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let item = self.items.get(self.pos).copied();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }
}

fn parse_count(tokens: &mut Tokens<'_>, field: &'static str) -> DatasetResult<(usize, usize)> {
    let (line, token) = tokens.next_token().ok_or(DatasetError::MissingHeader { field })?;
    let count = token.parse::<usize>().map_err(|_| DatasetError::InvalidCount {
        field,
        token: token.to_string(),
        line,
    })?;
    Ok((line, count))
}

fn parse_value(line: usize, token: &str) -> DatasetResult<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DatasetError::InvalidNumber {
            token: token.to_string(),
            line,
        }),
    }
}

fn read_header(tokens: &mut Tokens<'_>) -> DatasetResult<DatasetHeader> {
    let (_, name) = tokens
        .next_token()
        .ok_or(DatasetError::MissingHeader { field: "dataset name" })?;
    let (attr_line, num_attributes) = parse_count(tokens, "attribute count")?;
    let (row_line, num_rows) = parse_count(tokens, "row count")?;
    if num_rows == 0 {
        return Err(DatasetError::EmptyDataset);
    }
    // n × (k + 1) cells must be addressable
    let width = num_attributes
        .checked_add(1)
        .ok_or_else(|| DatasetError::InvalidCount {
            field: "attribute count",
            token: num_attributes.to_string(),
            line: attr_line,
        })?;
    if num_rows.checked_mul(width).is_none() {
        return Err(DatasetError::InvalidCount {
            field: "row count",
            token: num_rows.to_string(),
            line: row_line,
        });
    }
    Ok(DatasetHeader {
        name: name.to_string(),
        num_attributes,
        num_rows,
    })
}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// Parse only the header of a dataset file's contents.
pub fn parse_header(text: &str) -> DatasetResult<DatasetHeader> {
    read_header(&mut Tokens::new(text))
}

/// Parse a whole dataset.
///
/// Fewer values than the header declares is an error; values past the
/// declared rows are ignored with a warning.
pub fn parse_dataset(text: &str, kind: DatasetKind) -> DatasetResult<Dataset> {
    let mut tokens = Tokens::new(text);
    let header = read_header(&mut tokens)?;

    let k = header.num_attributes;
    let n = header.num_rows;
    let per_row = kind.values_per_row(k);
    let expected = n * per_row;
    if tokens.remaining() < expected {
        return Err(DatasetError::UnexpectedEof {
            expected,
            found: tokens.remaining(),
        });
    }

    let mut features = Matrix::zeros(n, k + 1)?;
    let mut targets = match kind {
        DatasetKind::Training => Some(Matrix::zeros(n, 1)?),
        DatasetKind::Query => None,
    };

    for i in 0..n {
        features[(i, 0)] = 1.0;
        for j in 1..=k {
            let (line, token) = tokens.next_token().ok_or(DatasetError::UnexpectedEof {
                expected,
                found: i * per_row + j - 1,
            })?;
            features[(i, j)] = parse_value(line, token)?;
        }
        if let Some(y) = targets.as_mut() {
            let (line, token) = tokens.next_token().ok_or(DatasetError::UnexpectedEof {
                expected,
                found: i * per_row + k,
            })?;
            y[(i, 0)] = parse_value(line, token)?;
        }
    }

    if tokens.remaining() > 0 {
        log::warn!(
            "dataset `{}`: ignoring {} value(s) after the declared {} rows",
            header.name,
            tokens.remaining(),
            n
        );
    }
    log::debug!(
        "dataset `{}`: {} rows, {} attributes ({:?})",
        header.name,
        n,
        k,
        kind
    );

    Ok(Dataset {
        header,
        features,
        targets,
    })
}

/// Read and parse a dataset file.
pub fn read_dataset<P: AsRef<Path>>(path: P, kind: DatasetKind) -> DatasetResult<Dataset> {
    parse_dataset(&load_text(path.as_ref())?, kind)
}

/// Read a whole dataset file into memory.
pub fn load_text(path: &Path) -> DatasetResult<String> {
    fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Training and query data must describe the same attributes.
pub fn check_compatible(training: &DatasetHeader, query: &DatasetHeader) -> DatasetResult<()> {
    if training.num_attributes != query.num_attributes {
        return Err(DatasetError::AttributeMismatch {
            training: training.num_attributes,
            query: query.num_attributes,
        });
    }
    Ok(())
}
