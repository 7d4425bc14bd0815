use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::puzzle::PuzzleError;
use crate::state::Direction;

/// On-disk shape of a puzzle file, before validation.
#[derive(Deserialize, Debug, Clone)]
pub struct PuzzleDocument {
    pub grid: Vec<Vec<CellEntry>>,
    pub across_clues: BTreeMap<String, String>,
    pub down_clues: BTreeMap<String, String>,
}

/// One grid entry. Both keys must be present; `null` is the only way to leave them empty.
#[derive(Deserialize, Debug, Clone)]
pub struct CellEntry {
    #[serde(deserialize_with = "Option::deserialize")]
    pub letter: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub number: Option<i64>,
}

/// Read and parse a puzzle document from a JSON file
pub fn read_document(path: &Path) -> Result<PuzzleDocument, PuzzleError> {
    let file = File::open(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = serde_json::from_reader(BufReader::new(file))?;
    Ok(document)
}

/// Parse a puzzle document from in-memory JSON
pub fn parse_document(bytes: &[u8]) -> Result<PuzzleDocument, PuzzleError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Turn the string keys of a clue table into clue numbers.
pub fn parse_clue_keys(
    clues: BTreeMap<String, String>,
    direction: Direction,
) -> Result<BTreeMap<i64, String>, PuzzleError> {
    clues
        .into_iter()
        .map(|(key, text)| match key.trim().parse::<i64>() {
            Ok(number) => Ok((number, text)),
            Err(_) => Err(PuzzleError::InvalidClueNumber { direction, key }),
        })
        .collect()
}
