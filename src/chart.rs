// Pie chart rendering for the chart output type
use crate::common::{
    MetricName,
    MAX_CHART_ITEMS,
};
use crate::error::Result;
use crate::metrics::MetricData;
use serde::Serialize;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};
use tracing::debug;

const PAGE_TITLE: &str = "s3bytes";

// A self contained ECharts page; the two markers are replaced at render
// time.
const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>s3bytes</title>
<script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
</head>
<body>
<div id="chart" style="width:1280px;height:720px;"></div>
<script>
echarts.init(document.getElementById("chart"), "light").setOption({
  title: { text: __TITLE__, left: "center" },
  legend: { orient: "vertical", left: "right", top: "bottom" },
  series: [{
    type: "pie",
    data: __DATA__,
    label: { show: true, position: "inside", formatter: "{d}%" }
  }]
});
</script>
</body>
</html>
"#;

/// One pie slice.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct PieItem {
    name:  String,
    value: f64,
}

/// Render the metrics as a pie chart HTML page and open it in a browser.
///
/// The page lands in the working directory as `s3bytes.html`, with a
/// numeric suffix when that name is taken. Returns the written path, or
/// `None` when every metric is zero and there is nothing to draw. Failing
/// to open a browser is not an error; the page is still on disk.
pub fn render_chart(data: &MetricData) -> Result<Option<PathBuf>> {
    let (title, items) = pie_items(data);

    if items.is_empty() {
        return Ok(None);
    }

    let path = next_path(Path::new("."));
    write_page(&path, title, &items)?;

    debug!("chart written to {}", path.display());

    let _ = webbrowser::open(&path.to_string_lossy());

    Ok(Some(path))
}

// Top slices plus an aggregated "others" slice, skipping zero values.
//
// The title comes from the first nonzero metric since a single run only
// ever carries one metric name.
pub(crate) fn pie_items(data: &MetricData) -> (&'static str, Vec<PieItem>) {
    let mut title = "";
    let mut items = Vec::with_capacity(MAX_CHART_ITEMS);
    let mut others_total = 0.0;

    for (i, metric) in data.metrics.iter().enumerate() {
        if metric.value == 0.0 {
            continue;
        }

        if title.is_empty() {
            title = match metric.metric_name {
                MetricName::BucketSizeBytes => "Bucket Size Bytes",
                MetricName::NumberOfObjects => "Number Of Objects",
            };
        }

        if i < MAX_CHART_ITEMS - 1 {
            items.push(PieItem {
                name:  metric.bucket_name.clone(),
                value: metric.value,
            });
        } else {
            others_total += metric.value;
        }
    }

    if others_total > 0.0 {
        items.push(PieItem {
            name:  "others".to_string(),
            value: others_total,
        });
    }

    (title, items)
}

// First free file name in `dir`: s3bytes.html, s3bytes1.html, ...
fn next_path(dir: &Path) -> PathBuf {
    let mut path = dir.join(format!("{PAGE_TITLE}.html"));
    let mut i = 1;

    while path.exists() {
        path = dir.join(format!("{PAGE_TITLE}{i}.html"));
        i += 1;
    }

    path
}

fn write_page(path: &Path, title: &str, items: &[PieItem]) -> Result<()> {
    let page = TEMPLATE
        .replace("__TITLE__", &serde_json::to_string(title)?)
        .replace("__DATA__", &serde_json::to_string(items)?);

    fs::write(path, page)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::StorageType;
    use crate::metrics::{
        Metric,
        HEADER,
    };
    use pretty_assertions::assert_eq;

    fn data(values: &[f64]) -> MetricData {
        let metrics = values
            .iter()
            .enumerate()
            .map(|(i, value)| Metric {
                bucket_name:  format!("b{i}"),
                region:       "us-east-1".to_string(),
                metric_name:  MetricName::BucketSizeBytes,
                storage_type: StorageType::StandardStorage,
                value:        *value,
            })
            .collect();

        MetricData {
            header:  &HEADER,
            metrics,
            total: values.iter().sum::<f64>() as i64,
        }
    }

    #[test]
    fn test_pie_items_top_n_plus_others() {
        let values: Vec<f64> = (0..13).map(|i| (1000 - i) as f64).collect();

        let (title, items) = pie_items(&data(&values));

        assert_eq!(title, "Bucket Size Bytes");
        assert_eq!(items.len(), MAX_CHART_ITEMS);

        // The first ten slices are individual buckets.
        assert_eq!(items[0].name, "b0");
        assert_eq!(items[9].name, "b9");

        // The rest are folded into "others".
        assert_eq!(items[10].name, "others");
        assert_eq!(items[10].value, 990.0 + 989.0 + 988.0);
    }

    #[test]
    fn test_pie_items_skips_zero_values() {
        let (_, items) = pie_items(&data(&[512.0, 0.0, 256.0]));

        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(names, vec!["b0", "b2"]);
    }

    #[test]
    fn test_pie_items_empty() {
        let (title, items) = pie_items(&data(&[0.0, 0.0]));

        assert_eq!(title, "");
        assert!(items.is_empty());
    }

    #[test]
    fn test_next_path_increments() {
        let dir = tempfile::tempdir().unwrap();

        let first = next_path(dir.path());
        assert_eq!(first, dir.path().join("s3bytes.html"));

        fs::write(&first, "x").unwrap();
        let second = next_path(dir.path());
        assert_eq!(second, dir.path().join("s3bytes1.html"));

        fs::write(&second, "x").unwrap();
        let third = next_path(dir.path());
        assert_eq!(third, dir.path().join("s3bytes2.html"));
    }

    #[test]
    fn test_write_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s3bytes.html");

        let items = vec![
            PieItem {
                name:  "b0".to_string(),
                value: 2048.0,
            },
        ];

        write_page(&path, "Bucket Size Bytes", &items).unwrap();

        let page = fs::read_to_string(&path).unwrap();

        assert!(page.contains(r#""Bucket Size Bytes""#));
        assert!(page.contains(r#"[{"name":"b0","value":2048.0}]"#));
        assert!(!page.contains("__TITLE__"));
        assert!(!page.contains("__DATA__"));
    }
}
