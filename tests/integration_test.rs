use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "xhtml2odt_{}_{}_{}.{}",
        prefix,
        std::process::id(),
        nanos,
        extension
    ))
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_xhtml2odt"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_converts_file_to_stdout() {
    let input = temp_path("stdout", "xhtml");
    std::fs::write(
        &input,
        r#"<html xmlns="http://www.w3.org/1999/xhtml"><p>Top text<pre>Test</pre></p></html>"#,
    )
    .expect("failed to write input");

    let output = Command::new(env!("CARGO_BIN_EXE_xhtml2odt"))
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&input);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        concat!(
            r#"<text:p text:style-name="Text_20_body">Top text</text:p>"#,
            r#"<text:p text:style-name="Preformatted_20_Text">Test</text:p>"#,
            r#"<text:p text:style-name="Text_20_body"/>"#
        )
    );
}

#[test]
fn test_cli_strict_mode_reports_structure_errors() {
    let input = temp_path("strict", "xhtml");
    std::fs::write(
        &input,
        r#"<html xmlns="http://www.w3.org/1999/xhtml"><ul><p>stray</p></ul></html>"#,
    )
    .expect("failed to write input");

    let lenient = Command::new(env!("CARGO_BIN_EXE_xhtml2odt"))
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    let strict = Command::new(env!("CARGO_BIN_EXE_xhtml2odt"))
        .arg("--strict")
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&input);

    assert!(lenient.status.success());
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("Unsupported structure"));
}

#[test]
fn test_cli_writes_standalone_output_file() {
    let input = temp_path("standalone_in", "xhtml");
    let output_path = temp_path("standalone_out", "xml");
    std::fs::write(
        &input,
        r#"<html xmlns="http://www.w3.org/1999/xhtml"><p>Test</p></html>"#,
    )
    .expect("failed to write input");

    let status = Command::new(env!("CARGO_BIN_EXE_xhtml2odt"))
        .arg("--standalone")
        .arg(&input)
        .arg(&output_path)
        .status()
        .expect("Failed to execute command");
    let written = std::fs::read_to_string(&output_path).unwrap_or_default();
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output_path);

    assert!(status.success());
    assert!(written.starts_with("<?xml"));
    assert!(written.contains("<office:text><text:p text:style-name=\"Text_20_body\">Test</text:p></office:text>"));
}
