pub mod fixtures;

use filterpath::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Converts a `json!` literal into the engine's value tree.
pub fn doc(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Installs a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
