use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One benchmark input as consumed by the benchmark runner.
///
/// Field order matters for anyone diffing files by eye: `fun`, `name`, `type`,
/// `executions`, then the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    pub fun: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u32,
    pub executions: u32,
    pub arg: CaseArg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseArg {
    Matrices(MatrixArg),
    Sequence(Vec<u32>),
}

/// Two row-major matrices flattened to `width * height` values each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixArg {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub width: usize,
}

impl BenchmarkCase {
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Serializes the case to `<dir>/<name>.json`, replacing any existing file.
    ///
    /// `dir` must already exist.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.write_json(BufWriter::new(file), &path)?;
        Ok(path)
    }

    fn write_json<W: Write>(&self, mut writer: W, path: &Path) -> anyhow::Result<()> {
        serde_json::to_writer(&mut writer, self).with_context(|| {
            format!("failed to write case {} to {}", self.name, path.display())
        })?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))
    }

    pub fn read_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BenchmarkCase {
        BenchmarkCase {
            fun: "quicksort".to_string(),
            name: "quicksort_0m".to_string(),
            kind: 2,
            executions: 100,
            arg: CaseArg::Sequence(vec![2, 0, 1]),
        }
    }

    #[test]
    fn serializes_discriminator_as_type() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "fun": "quicksort",
                "name": "quicksort_0m",
                "type": 2,
                "executions": 100,
                "arg": [2, 0, 1],
            })
        );
    }

    #[test]
    fn keeps_field_order() {
        let text = serde_json::to_string(&sample()).unwrap();
        let positions: Vec<usize> = ["\"fun\"", "\"name\"", "\"type\"", "\"executions\"", "\"arg\""]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    }

    #[test]
    fn matrix_payload_is_an_object() {
        let case = BenchmarkCase {
            fun: "matrix_multiply".to_string(),
            name: "matmul1x1".to_string(),
            kind: 4,
            executions: 100,
            arg: CaseArg::Matrices(MatrixArg {
                a: vec![1.5],
                b: vec![2.5],
                width: 1,
            }),
        };
        let value = serde_json::to_value(&case).unwrap();
        assert_eq!(value["arg"], json!({"a": [1.5], "b": [2.5], "width": 1}));

        let back: BenchmarkCase = serde_json::from_value(value).unwrap();
        assert_eq!(back, case);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("quicksort_0m.json");
        std::fs::write(&stale, "x".repeat(4096)).unwrap();

        let path = sample().write_to(dir.path()).unwrap();
        assert_eq!(path, stale);
        assert_eq!(BenchmarkCase::read_from(&path).unwrap(), sample());
    }

    struct DiskFull;

    impl Write for DiskFull {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_error_mid_payload_names_path() {
        let path = Path::new("inputs/quicksort_0m.json");
        let err = sample().write_json(DiskFull, path).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("quicksort_0m"), "{err:#}");
        assert!(msg.contains("inputs/quicksort_0m.json"), "{err:#}");
        assert!(format!("{err:#}").contains("no space left on device"));
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("inputs");

        let err = sample().write_to(&missing).unwrap_err();
        assert!(err.to_string().contains("quicksort_0m.json"), "{err:#}");
        assert!(!missing.exists());
    }
}
