//! Grouping benchmark rows into plotted series

use crate::{BenchmarkTable, DataPoint, DataSet, Metric};
use rsa_bench_common::{BenchPlotError, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// One series per distinct `MsgLen` (ascending), points sorted by `KeyBits`.
///
/// Rows with equal key sizes keep their table order. A row with no value for
/// `metric` is an error: the table handed in is expected to be OK-filtered.
pub fn build_series(table: &BenchmarkTable, metric: Metric) -> Result<Vec<DataSet>> {
    let mut groups: BTreeMap<u32, Vec<_>> = BTreeMap::new();
    for record in table.iter() {
        groups.entry(record.msg_len).or_default().push(record);
    }

    let datasets = groups
        .into_iter()
        .map(|(msg_len, mut rows)| -> Result<DataSet> {
            rows.sort_by_key(|record| record.key_bits);

            let data = rows
                .iter()
                .map(|record| -> Result<DataPoint> {
                    let y = metric.value(record).ok_or_else(|| {
                        BenchPlotError::malformed(format!(
                            "row with KeyBits={}, MsgLen={} has no {} value",
                            record.key_bits, record.msg_len, metric
                        ))
                    })?;
                    Ok(DataPoint {
                        x: f64::from(record.key_bits),
                        y,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(DataSet {
                name: format!("MsgLen={msg_len}"),
                data,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(%metric, series = datasets.len(), "Built chart series");
    Ok(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BenchmarkRecord;
    use proptest::prelude::*;

    fn points(dataset: &DataSet) -> Vec<(f64, f64)> {
        dataset.data.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_groups_by_message_length() {
        let table = BenchmarkTable::from_records(vec![
            BenchmarkRecord::ok(1024, 16, 0.0, 1.0, 0.0),
            BenchmarkRecord::ok(2048, 16, 0.0, 2.0, 0.0),
            BenchmarkRecord::ok(1024, 32, 0.0, 1.5, 0.0),
        ]);

        let series = build_series(&table, Metric::Encrypt).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "MsgLen=16");
        assert_eq!(points(&series[0]), vec![(1024.0, 1.0), (2048.0, 2.0)]);
        assert_eq!(series[1].name, "MsgLen=32");
        assert_eq!(points(&series[1]), vec![(1024.0, 1.5)]);
    }

    #[test]
    fn test_sorts_groups_and_points() {
        let table = BenchmarkTable::from_records(vec![
            BenchmarkRecord::ok(4096, 190, 900.0, 3.0, 40.0),
            BenchmarkRecord::ok(2048, 2, 120.0, 1.0, 9.0),
            BenchmarkRecord::ok(1024, 190, 30.0, 0.5, 2.0),
            BenchmarkRecord::ok(1024, 2, 25.0, 0.4, 1.5),
        ]);

        let series = build_series(&table, Metric::KeyGen).unwrap();
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["MsgLen=2", "MsgLen=190"]);
        assert_eq!(points(&series[0]), vec![(1024.0, 25.0), (2048.0, 120.0)]);
        assert_eq!(points(&series[1]), vec![(1024.0, 30.0), (4096.0, 900.0)]);
    }

    #[test]
    fn test_equal_key_sizes_keep_table_order() {
        let table = BenchmarkTable::from_records(vec![
            BenchmarkRecord::ok(1024, 16, 0.0, 0.0, 7.0),
            BenchmarkRecord::ok(1024, 16, 0.0, 0.0, 3.0),
        ]);

        let series = build_series(&table, Metric::Decrypt).unwrap();
        assert_eq!(points(&series[0]), vec![(1024.0, 7.0), (1024.0, 3.0)]);
    }

    #[test]
    fn test_empty_table_has_no_series() {
        let series = build_series(&BenchmarkTable::default(), Metric::KeyGen).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_missing_value_is_malformed() {
        let mut record = BenchmarkRecord::ok(1024, 16, 5.0, 0.5, 0.6);
        record.encrypt_ms = None;
        let table = BenchmarkTable::from_records(vec![record]);

        assert!(build_series(&table, Metric::KeyGen).is_ok());
        let err = build_series(&table, Metric::Encrypt).unwrap_err();
        assert!(matches!(err, BenchPlotError::MalformedInput { .. }));
        assert!(err.to_string().contains("EncryptMS"));
    }

    proptest! {
        #[test]
        fn prop_series_cover_rows_sorted(
            rows in proptest::collection::vec((0u32..6, 0u32..4, 0.0f64..1000.0), 0..40)
        ) {
            let table = BenchmarkTable::from_records(
                rows.iter()
                    .map(|&(bits, len, ms)| {
                        BenchmarkRecord::ok(512 * (bits + 1), 16 * (len + 1), ms, ms, ms)
                    })
                    .collect(),
            );

            let series = build_series(&table, Metric::KeyGen).unwrap();
            let total: usize = series.iter().map(|s| s.data.len()).sum();
            prop_assert_eq!(total, rows.len());

            let mut distinct: Vec<u32> = rows.iter().map(|&(_, len, _)| 16 * (len + 1)).collect();
            distinct.sort_unstable();
            distinct.dedup();
            let names: Vec<String> = distinct.iter().map(|len| format!("MsgLen={len}")).collect();
            let actual: Vec<String> = series.iter().map(|s| s.name.clone()).collect();
            prop_assert_eq!(actual, names);

            for dataset in &series {
                prop_assert!(dataset.data.windows(2).all(|w| w[0].x <= w[1].x));
            }
        }
    }
}
