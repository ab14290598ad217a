use crate::LoaderError;
use scout_core::MatchRecord;
use std::fs;
use std::path::Path;

pub struct MatchHistoryLoader;

impl MatchHistoryLoader {
    /// Load the match-history document: an ordered JSON array, newest
    /// match first.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<MatchRecord>, LoaderError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::read_json(&raw)
    }

    pub fn read_json(raw: &str) -> Result<Vec<MatchRecord>, LoaderError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::MatchOutcome;

    #[test]
    fn match_document_parses() {
        let raw = r#"[
            {
                "date": "2024-03-01",
                "opponent": "Dynamo",
                "result": "3-1",
                "possession": 54.5,
                "chances": 6,
                "tactics": "pressing",
                "formation": "4-4-2"
            },
            {
                "date": "2024-02-23",
                "opponent": "Union",
                "result": "0-2",
                "possession": 41.0,
                "chances": 2,
                "tactics": "normal",
                "formation": "4-5-1"
            }
        ]"#;

        let matches = MatchHistoryLoader::read_json(raw).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].opponent, "Dynamo");
        assert_eq!(matches[0].result.outcome(), MatchOutcome::Win);
        assert_eq!(matches[1].result.outcome(), MatchOutcome::Loss);
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(MatchHistoryLoader::read_json("{\"not\": \"an array\"}").is_err());
        assert!(MatchHistoryLoader::read_json("[{\"date\": \"yesterday\"}]").is_err());
    }
}
