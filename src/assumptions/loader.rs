//! CSV-based assumption loader
//!
//! Reads rate overrides from `parameters.csv` in an assumptions directory.
//! Each row is `name,value`; names not present keep their default.

use crate::error::AssumptionsError;
use std::collections::HashMap;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File holding the scalar rate overrides
pub const PARAMETERS_FILE: &str = "parameters.csv";

pub const SOCIAL_SECURITY_RATE: &str = "social_security_rate";
pub const SOCIAL_SECURITY_THRESHOLD: &str = "social_security_threshold";
pub const CAPITAL_GAINS_TAX_RATE: &str = "capital_gains_tax_rate";

const KNOWN_PARAMETERS: [&str; 3] = [
    SOCIAL_SECURITY_RATE,
    SOCIAL_SECURITY_THRESHOLD,
    CAPITAL_GAINS_TAX_RATE,
];

/// Raw values read from the parameters file
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub parameters: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load from the default path
    pub fn load_default() -> Result<Self, AssumptionsError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load `parameters.csv` from the given directory
    pub fn load_from(dir: &Path) -> Result<Self, AssumptionsError> {
        let path = dir.join(PARAMETERS_FILE);
        let reader = csv::Reader::from_path(&path).map_err(|source| AssumptionsError::Csv {
            path: path.clone(),
            source,
        })?;
        Self::from_reader(reader, &path)
    }

    /// Load from any reader (string buffer, request body)
    pub fn load_from_reader<R: std::io::Read>(reader: R) -> Result<Self, AssumptionsError> {
        Self::from_reader(csv::Reader::from_reader(reader), Path::new("<reader>"))
    }

    fn from_reader<R: std::io::Read>(
        mut reader: csv::Reader<R>,
        path: &Path,
    ) -> Result<Self, AssumptionsError> {
        let mut parameters = HashMap::new();

        for result in reader.records() {
            let record = result.map_err(|source| AssumptionsError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let name = record.get(0).unwrap_or_default().trim().to_string();
            let raw = record.get(1).unwrap_or_default().trim().to_string();

            if !KNOWN_PARAMETERS.contains(&name.as_str()) {
                return Err(AssumptionsError::UnknownParameter(name));
            }

            let value: f64 = match raw.parse() {
                Ok(v) if f64::is_finite(v) && v >= 0.0 => v,
                _ => return Err(AssumptionsError::InvalidValue { name, value: raw }),
            };

            parameters.insert(name, value);
        }

        Ok(Self { parameters })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "name,value\nsocial_security_rate,0.2\ncapital_gains_tax_rate,0.25\n";
        let loaded = LoadedAssumptions::load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(loaded.get(SOCIAL_SECURITY_RATE), Some(0.2));
        assert_eq!(loaded.get(CAPITAL_GAINS_TAX_RATE), Some(0.25));
        assert_eq!(loaded.get(SOCIAL_SECURITY_THRESHOLD), None);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let data = "name,value\ninflation,0.02\n";
        let err = LoadedAssumptions::load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AssumptionsError::UnknownParameter(name) if name == "inflation"));
    }

    #[test]
    fn test_bad_value_rejected() {
        let data = "name,value\nsocial_security_threshold,lots\n";
        let err = LoadedAssumptions::load_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AssumptionsError::InvalidValue { .. }));

        let data = "name,value\nsocial_security_rate,-0.1\n";
        assert!(LoadedAssumptions::load_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_default_assumptions() {
        let loaded = LoadedAssumptions::load_default();
        assert!(loaded.is_ok(), "Failed to load assumptions: {:?}", loaded.err());

        let loaded = loaded.unwrap();
        assert_eq!(loaded.get(SOCIAL_SECURITY_RATE), Some(0.186));
        assert_eq!(loaded.get(SOCIAL_SECURITY_THRESHOLD), Some(66_150.0));
        assert_eq!(loaded.get(CAPITAL_GAINS_TAX_RATE), Some(0.2638));
    }
}
