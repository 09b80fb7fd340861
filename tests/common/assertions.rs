//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::TestOutput;

/// Assert the binary exited successfully
pub fn assert_success(output: &TestOutput) {
    assert!(
        output.success,
        "Expected success, got exit code {:?}. Stderr: {}",
        output.code, output.stderr
    );
}

/// Assert the binary failed and printed no array
pub fn assert_failure(output: &TestOutput) {
    assert!(
        !output.success,
        "Expected failure, got success. Stdout: {}",
        output.stdout
    );
    assert_ne!(output.code, Some(0));
    assert!(
        !output.stdout.contains("const uint8_t"),
        "No array expected on failure, got: {}",
        output.stdout
    );
}

/// Assert stdout is a well formed array literal and return its bytes
pub fn assert_c_array(output: &TestOutput, name: &str) -> Vec<u8> {
    assert_success(output);
    let lines = output.lines();
    assert!(lines.len() >= 3, "Too few lines: {:?}", lines);
    assert!(lines[0].starts_with("// "), "Bad comment line: {}", lines[0]);
    assert_eq!(lines[1], format!("const uint8_t {name}[] = {{"));
    assert_eq!(*lines.last().unwrap(), "};");

    let data = output.data_lines();
    for (i, line) in data.iter().enumerate() {
        assert!(line.starts_with("    0x"), "Bad indent: {line:?}");
        let last = i + 1 == data.len();
        if last {
            assert!(!line.ends_with(','), "Trailing separator on last line: {line:?}");
        } else {
            assert!(line.ends_with(", "), "Missing separator on line {i}: {line:?}");
        }
    }

    g4hex::rendering::c_array::parse(&output.stdout).expect("Array should parse")
}
