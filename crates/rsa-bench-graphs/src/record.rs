//! Benchmark records and the table they are loaded into

use rsa_bench_common::{BenchPlotError, Result};
use serde::{de, Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Status value marking a successful trial
pub const STATUS_OK: &str = "OK";

/// Columns a benchmark CSV must carry; any others are ignored
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "KeyBits",
    "MsgLen",
    "Status",
    "KeyGenMS",
    "EncryptMS",
    "DecryptMS",
];

/// Written by the benchmark driver in every timing column of a trial that threw
const FAILED_TIMING: &str = "ERR";

/// One timed RSA trial
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    /// RSA key size in bits
    #[serde(rename = "KeyBits")]
    pub key_bits: u32,

    /// Message length used in the trial
    #[serde(rename = "MsgLen")]
    pub msg_len: u32,

    /// `OK` or an error indicator
    #[serde(rename = "Status")]
    pub status: String,

    /// Key generation time in milliseconds
    #[serde(rename = "KeyGenMS", deserialize_with = "deserialize_timing")]
    pub key_gen_ms: Option<f64>,

    /// Encryption time in milliseconds
    #[serde(rename = "EncryptMS", deserialize_with = "deserialize_timing")]
    pub encrypt_ms: Option<f64>,

    /// Decryption time in milliseconds
    #[serde(rename = "DecryptMS", deserialize_with = "deserialize_timing")]
    pub decrypt_ms: Option<f64>,
}

impl BenchmarkRecord {
    /// Build a successful record
    pub fn ok(
        key_bits: u32,
        msg_len: u32,
        key_gen_ms: f64,
        encrypt_ms: f64,
        decrypt_ms: f64,
    ) -> Self {
        Self {
            key_bits,
            msg_len,
            status: STATUS_OK.to_string(),
            key_gen_ms: Some(key_gen_ms),
            encrypt_ms: Some(encrypt_ms),
            decrypt_ms: Some(decrypt_ms),
        }
    }

    /// Build a record with an arbitrary status and no timings
    pub fn with_status(key_bits: u32, msg_len: u32, status: impl Into<String>) -> Self {
        Self {
            key_bits,
            msg_len,
            status: status.into(),
            key_gen_ms: None,
            encrypt_ms: None,
            decrypt_ms: None,
        }
    }

    /// Whether the trial succeeded; the comparison is exact
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Empty cells and the `ERR` sentinel load as no value; other text must be a number
fn deserialize_timing<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let value = raw.trim();
    if value.is_empty() || value == FAILED_TIMING {
        return Ok(None);
    }
    let parsed = value
        .parse::<f64>()
        .map_err(|_| de::Error::custom(format!("invalid timing value {value:?}")))?;
    if !parsed.is_finite() {
        return Err(de::Error::custom(format!("timing value {value:?} is not finite")));
    }
    Ok(Some(parsed))
}

/// In-memory benchmark table, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkTable {
    /// Wrap already-built records
    pub fn from_records(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// Load a benchmark CSV, failing before any parsing if the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BenchPlotError::missing_input(path));
        }

        let table = Self::from_reader(File::open(path)?)?;
        info!("Loaded {} benchmark rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse CSV text with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?;
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|header| header == *column))
            .collect();
        if !missing.is_empty() {
            return Err(BenchPlotError::malformed_at_line(
                format!("missing required column(s): {}", missing.join(", ")),
                1,
            ));
        }

        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<BenchmarkRecord>, csv::Error>>()?;
        debug!(rows = records.len(), "Parsed benchmark CSV");

        Ok(Self { records })
    }

    /// Keep only successful trials, preserving order
    pub fn ok_only(&self) -> Self {
        let records: Vec<BenchmarkRecord> = self
            .records
            .iter()
            .filter(|record| record.is_ok())
            .cloned()
            .collect();

        let excluded = self.records.len() - records.len();
        if excluded > 0 {
            info!("Excluded {excluded} rows whose status is not {STATUS_OK}");
        }
        Self { records }
    }

    /// Iterate over the records in file order
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter()
    }

    /// Records in file order
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = "\
KeyBits,MsgLen,Status,KeyGenMS,EncryptMS,DecryptMS
1024,16,OK,5.0,0.5,0.6
2048,16,OK,12.0,1.1,1.3
1024,16,FAIL,0,0,0
";

    #[test]
    fn test_parse_scenario() {
        let table = BenchmarkTable::from_reader(SCENARIO.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[0], BenchmarkRecord::ok(1024, 16, 5.0, 0.5, 0.6));
        assert_eq!(table.records()[2].status, "FAIL");
        assert_eq!(table.records()[2].key_gen_ms, Some(0.0));
    }

    #[test]
    fn test_ok_only_preserves_order() {
        let table = BenchmarkTable::from_records(vec![
            BenchmarkRecord::ok(2048, 16, 12.0, 1.1, 1.3),
            BenchmarkRecord::with_status(1024, 32, "FAIL"),
            BenchmarkRecord::ok(1024, 16, 5.0, 0.5, 0.6),
            BenchmarkRecord::with_status(4096, 16, "ok"),
        ]);

        let ok = table.ok_only();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.records()[0].key_bits, 2048);
        assert_eq!(ok.records()[1].key_bits, 1024);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_driver_column_order_and_err_sentinel() {
        let csv = "\
KeyBits,MsgLen,KeyGenMS,EncryptMS,DecryptMS,Status
1024,2,31,0,1,OK
1024,36,ERR,ERR,ERR,ERROR
";
        let table = BenchmarkTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.records()[0], BenchmarkRecord::ok(1024, 2, 31.0, 0.0, 1.0));
        assert_eq!(table.records()[1], BenchmarkRecord::with_status(1024, 36, "ERROR"));
        assert_eq!(table.ok_only().len(), 1);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "\
Run,KeyBits,MsgLen,Status,KeyGenMS,EncryptMS,DecryptMS,Host
1,1024,16,OK,5.0,0.5,0.6,ci-runner
";
        let table = BenchmarkTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.records(), &[BenchmarkRecord::ok(1024, 16, 5.0, 0.5, 0.6)]);
    }

    #[test]
    fn test_missing_columns_are_named() {
        let csv = "KeyBits,MsgLen,KeyGenMS\n1024,16,5.0\n";
        let err = BenchmarkTable::from_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Status"));
        assert!(message.contains("EncryptMS"));
        assert!(message.contains("DecryptMS"));
        assert!(!message.contains("KeyBits"));
    }

    #[test]
    fn test_bad_timing_reports_line() {
        let csv = "\
KeyBits,MsgLen,Status,KeyGenMS,EncryptMS,DecryptMS
1024,16,OK,5.0,0.5,0.6
2048,16,OK,fast,1.1,1.3
";
        let err = BenchmarkTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, BenchPlotError::MalformedInput { .. }));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_non_finite_timing_reports_line() {
        for bad in ["inf", "-inf", "NaN"] {
            let csv = format!(
                "KeyBits,MsgLen,Status,KeyGenMS,EncryptMS,DecryptMS\n\
                 1024,16,OK,{bad},1,1\n\
                 2048,16,OK,2,1,1\n"
            );
            let err = BenchmarkTable::from_reader(csv.as_bytes()).unwrap_err();
            assert!(matches!(err, BenchPlotError::MalformedInput { .. }), "{bad}: {err}");
            assert_eq!(err.line(), Some(2));
        }
    }

    #[test]
    fn test_empty_file_is_malformed() {
        let err = BenchmarkTable::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, BenchPlotError::MalformedInput { .. }));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let csv = "KeyBits,MsgLen,Status,KeyGenMS,EncryptMS,DecryptMS\n";
        let table = BenchmarkTable::from_reader(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build").join("rsa_benchmark.csv");

        let err = BenchmarkTable::load(&path).unwrap_err();
        assert!(matches!(err, BenchPlotError::MissingInput { .. }));
        assert!(err.to_string().contains("rsa_benchmark.csv"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();

        let table = BenchmarkTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }
}
