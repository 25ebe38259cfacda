#![allow(non_snake_case)]

use super::*;
use crate::error::ErrorKind;

const PET: &str = r#"import Foundation


public class Pet: JSONEncodable {

    public var id: Int?
    public var category: Category?
    public var name: String?
    public var tags: [Tag]?

    public init() {}

    // MARK: JSONEncodable
    func encodeToJSON() -> AnyObject {
        var nillableDictionary = [String:AnyObject?]()
        nillableDictionary["id"] = self.id
        nillableDictionary["category"] = self.category?.encodeToJSON()
        nillableDictionary["name"] = self.name
        nillableDictionary["tags"] = self.tags?.encodeToJSON()
        let dictionary: [String:AnyObject] = APIHelper.rejectNil(nillableDictionary) ?? [:]
        return dictionary
    }
}
"#;

fn pet_path() -> &'static Path {
    Path::new("Models/Pet.swift")
}

#[test]
fn ModelFile___from_source___collects_structure() {
    let model = ModelFile::from_source(pet_path(), PET, &GeneratorOptions::default()).unwrap();

    assert_eq!(model.class_name, "Pet");
    assert_eq!(model.imports, vec!["import Foundation".to_string()]);
    let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["category", "id", "name", "tags"]);
    assert!(model.encode_method.starts_with("func encodeToJSON()"));
    assert!(model.decode_method.starts_with("required public init?"));
    assert_eq!(model.source_path, PathBuf::from("Models/Pet.swift"));
}

#[test]
fn ModelFile___header___names_file_and_attribution() {
    let model = ModelFile::from_source(pet_path(), PET, &GeneratorOptions::default()).unwrap();

    assert_eq!(
        model.header,
        "//\n// Pet.swift\n//\n// Generated by swagger-codegen, made Alamofire compatible by Alamoswagger\n//"
    );
}

#[test]
fn ModelFile___custom_attribution___used_in_header() {
    let options = GeneratorOptions {
        attribution: "Made by hand".to_string(),
    };

    let model = ModelFile::from_source(pet_path(), PET, &options).unwrap();

    assert!(model.header.contains("// Made by hand\n"));
}

#[test]
fn ModelFile___render___declares_sorted_fields_and_keeps_encode_method() {
    let model = ModelFile::from_source(pet_path(), PET, &GeneratorOptions::default()).unwrap();

    let output = model.render().unwrap();

    assert!(output.contains("public class Pet: ResponseObjectSerializable {\n"));
    assert!(output.contains(
        "    public var category: Category?\n    public var id: Int?\n    public var name: String?\n    public var tags: [Tag]?\n"
    ));
    assert!(output.contains("    public init() {}\n"));
    assert!(output.contains(&model.encode_method));
    assert!(!output.contains("// MARK: JSONEncodable"));
    assert!(output.ends_with("    }\n}\n"));
}

#[test]
fn ModelFile___no_imports___renders_empty_import_section() {
    let source = PET.replace("import Foundation\n", "");

    let output = generate_from_source(pet_path(), &source, &GeneratorOptions::default()).unwrap();

    assert!(output.contains("//\n\n\n\n\npublic class Pet"));
}

#[test]
fn generate_from_source___missing_class___fails_with_class_name_error() {
    let source = PET.replace("public class Pet: JSONEncodable {", "struct Pet {");

    let err = generate_from_source(pet_path(), &source, &GeneratorOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::ClassNameNotFound { .. }));
    assert!(err.to_string().contains("couldn't find class name"));
    assert!(err.to_string().contains("Pet.swift"));
}

#[test]
fn generate_from_source___missing_encode_method___fails() {
    let source = PET.replace("return dictionary", "dictionary");

    let err = generate_from_source(pet_path(), &source, &GeneratorOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::EncodeMethodNotFound { .. }));
}

#[test]
fn generate_from_source___no_public_vars___fails_with_no_fields() {
    let source = "import Foundation\n\npublic class Empty: JSONEncodable {\n    func encodeToJSON() -> AnyObject {\n        return dictionary\n    }\n}\n";

    let err = generate_from_source(Path::new("Empty.swift"), source, &GeneratorOptions::default())
        .unwrap_err();

    assert!(matches!(err, ConvertError::NoFields { ref file } if file == "Empty.swift"));
    assert_eq!(err.kind(), ErrorKind::MissingStructure);
}

#[test]
fn generate_from_source___undeclared_mapping___fails_with_extraction_error() {
    let source = PET.replace("    public var name: String?\n", "");

    let err = generate_from_source(pet_path(), &source, &GeneratorOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Extraction);
}

#[test]
fn generate_serializable_class___missing_file___fails_with_io_error() {
    let err = generate_serializable_class(
        Path::new("/definitely/not/here/Pet.swift"),
        &GeneratorOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn generate_from_source___own_output___regenerates_identically() {
    let options = GeneratorOptions::default();
    let first = generate_from_source(pet_path(), PET, &options).unwrap();

    let second = generate_from_source(pet_path(), &first, &options).unwrap();

    assert_eq!(first, second);
}
