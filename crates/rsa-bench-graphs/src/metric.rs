//! The three timed operations a chart can be drawn for

use crate::BenchmarkRecord;
use rsa_bench_common::BenchPlotError;
use std::fmt;
use std::str::FromStr;

/// A plotted timing column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Key pair generation (`KeyGenMS`)
    KeyGen,
    /// Encryption (`EncryptMS`)
    Encrypt,
    /// Decryption (`DecryptMS`)
    Decrypt,
}

impl Metric {
    /// Every metric, in report order
    pub const ALL: [Metric; 3] = [Metric::KeyGen, Metric::Encrypt, Metric::Decrypt];

    /// CSV column holding this metric
    pub const fn column(self) -> &'static str {
        match self {
            Metric::KeyGen => "KeyGenMS",
            Metric::Encrypt => "EncryptMS",
            Metric::Decrypt => "DecryptMS",
        }
    }

    /// Field accessor for this metric
    pub fn accessor(self) -> fn(&BenchmarkRecord) -> Option<f64> {
        match self {
            Metric::KeyGen => |record: &BenchmarkRecord| record.key_gen_ms,
            Metric::Encrypt => |record: &BenchmarkRecord| record.encrypt_ms,
            Metric::Decrypt => |record: &BenchmarkRecord| record.decrypt_ms,
        }
    }

    /// Read this metric from a record
    pub fn value(self, record: &BenchmarkRecord) -> Option<f64> {
        (self.accessor())(record)
    }

    /// Default chart file name, `rsa_<column>.png`
    pub fn file_name(self) -> String {
        format!("rsa_{}.png", self.column())
    }

    /// Chart title
    pub fn title(self) -> String {
        format!("RSA {} vs Key Size", self.column())
    }

    /// Y axis description
    pub fn y_label(self) -> String {
        format!("{} (ms)", self.column())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = BenchPlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.column() == s)
            .ok_or_else(|| {
                BenchPlotError::validation_field(format!("unknown metric {s:?}"), "metric")
            })
    }
}
