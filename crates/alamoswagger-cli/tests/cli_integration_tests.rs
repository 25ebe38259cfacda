//! Integration tests for the alamoswagger binary.

#![allow(non_snake_case)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CATEGORY: &str = r#"import Foundation


public class Category: JSONEncodable {

    public var id: Int?
    public var name: String?

    public init() {}

    // MARK: JSONEncodable
    func encodeToJSON() -> AnyObject {
        var nillableDictionary = [String:AnyObject?]()
        nillableDictionary["id"] = self.id
        nillableDictionary["name"] = self.name
        let dictionary: [String:AnyObject] = APIHelper.rejectNil(nillableDictionary) ?? [:]
        return dictionary
    }
}
"#;

fn alamoswagger(args: &[&Path], extra: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_alamoswagger"));
    cmd.args(args).args(extra).env("RUST_LOG", "info");
    cmd.output().expect("failed to run alamoswagger")
}

#[test]
fn alamoswagger___valid_models___writes_converted_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("Category.swift"), CATEGORY).unwrap();

    let result = alamoswagger(&[input.path(), output.path()], &[]);

    assert!(result.status.success());
    let written = fs::read_to_string(output.path().join("Category.swift")).unwrap();
    assert!(written.contains("public class Category: ResponseObjectSerializable {"));
    assert!(written.contains("if let idVal = representation.valueForKeyPath(\"id\") as? Int {"));
    let logs = String::from_utf8_lossy(&result.stderr);
    assert!(logs.contains("converted"));
}

#[test]
fn alamoswagger___broken_model___logs_error_and_exits_successfully() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("Category.swift"), CATEGORY).unwrap();
    fs::write(
        input.path().join("Broken.swift"),
        CATEGORY.replace("public class Category: JSONEncodable {", "struct Category {"),
    )
    .unwrap();

    let result = alamoswagger(&[input.path(), output.path()], &[]);

    assert!(result.status.success());
    assert!(output.path().join("Category.swift").exists());
    assert!(!output.path().join("Broken.swift").exists());
    let logs = String::from_utf8_lossy(&result.stderr);
    assert!(logs.contains("couldn't find class name"));
}

#[test]
fn alamoswagger___non_empty_output_without_force___fails_before_converting() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("Category.swift"), CATEGORY).unwrap();
    fs::write(output.path().join("Category.swift"), "stale").unwrap();

    let result = alamoswagger(&[input.path(), output.path()], &[]);

    assert!(!result.status.success());
    assert_eq!(
        fs::read_to_string(output.path().join("Category.swift")).unwrap(),
        "stale"
    );
}

#[test]
fn alamoswagger___non_empty_output_with_force___overwrites() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("Category.swift"), CATEGORY).unwrap();
    fs::write(output.path().join("Category.swift"), "stale").unwrap();

    let result = alamoswagger(&[input.path(), output.path()], &["--force"]);

    assert!(result.status.success());
    let written = fs::read_to_string(output.path().join("Category.swift")).unwrap();
    assert!(written.contains("ResponseObjectSerializable"));
}

#[test]
fn alamoswagger___input_not_directory___fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Category.swift");
    fs::write(&file, CATEGORY).unwrap();

    let out = dir.path().join("out");

    let result = alamoswagger(&[file.as_path(), out.as_path()], &[]);

    assert!(!result.status.success());
    assert!(!out.exists());
}

#[test]
fn alamoswagger___config_attribution___used_in_header() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    let config = config_dir.path().join("alamoswagger.toml");
    fs::write(&config, "[generator]\nattribution = \"Generated for the iOS app\"\n").unwrap();
    fs::write(input.path().join("Category.swift"), CATEGORY).unwrap();

    let result = alamoswagger(
        &[input.path(), output.path()],
        &["--config", config.to_str().unwrap()],
    );

    assert!(result.status.success());
    let written = fs::read_to_string(output.path().join("Category.swift")).unwrap();
    assert!(written.contains("// Generated for the iOS app\n"));
}

#[test]
fn alamoswagger___missing_config___fails() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let result = alamoswagger(
        &[input.path(), output.path()],
        &["--config", "/definitely/not/here/alamoswagger.toml"],
    );

    assert!(!result.status.success());
}
