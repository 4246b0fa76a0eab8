#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the flow-report binary.
#[macro_export]
macro_rules! flow_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("flow-report"))
    };
}

/// Creates an `assert_cmd` Command for the flow-bench binary.
#[macro_export]
macro_rules! flow_bench {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("flow-bench"))
    };
}

/// Header of a complete results file.
pub const RESULTS_HEADER: &str = "V,E,Typ,Instance,EK_ms,Dinic_ms";

/// Two graph types, two sizes, quoted labels as written by older tooling.
pub const SMALL_RESULTS: &str = "\
V,E,Typ,Instance,EK_ms,Dinic_ms
100,200,\"Dünn\",1,0.412,0.221
100,200,\"Dünn\",2,0.468,0.250
200,400,\"Dünn\",1,1.302,0.610
200,400,\"Dünn\",2,1.411,0.587
100,500,\"Unit-Cap\",1,0.901,0.303
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes `results.csv` with the given content.
    pub fn create_results(&self, content: &str) {
        self.create_file("results.csv", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Names of the PNG files in the temp directory, sorted.
    pub fn png_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("Failed to read temp directory")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".png"))
            .collect();
        names.sort();
        names
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
