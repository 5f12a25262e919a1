use pretty_assertions::assert_eq;
use revid_git::{Error, RevisionSettings, render_source, validate_names, write_source};
use tempfile::TempDir;

#[test]
fn test_render_default_module() {
    let source = render_source(&RevisionSettings::default(), "1.0.0+abc1234");
    assert_eq!(
        source,
        "// @generated by revid. Do not edit.\n\
         \n\
         pub mod revision {\n\
         \x20   pub struct Revision;\n\
         \n\
         \x20   impl Revision {\n\
         \x20       pub const DESCRIPTOR: &str = \"1.0.0+abc1234\";\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn test_render_nested_namespace() {
    let settings = RevisionSettings {
        generated_namespace: "build.info".to_string(),
        ..RevisionSettings::default()
    };
    let source = render_source(&settings, "x");
    assert!(source.contains("pub mod build {\n    pub mod info {\n        pub struct Revision;"));
    assert!(source.ends_with("    }\n}\n"));
}

#[test]
fn test_render_without_namespace() {
    let settings = RevisionSettings {
        generated_namespace: String::new(),
        ..RevisionSettings::default()
    };
    let source = render_source(&settings, "x");
    assert!(source.contains("\npub struct Revision;\n"));
    assert!(!source.contains("pub mod"));
}

#[test]
fn test_render_escapes_descriptor() {
    let source = render_source(&RevisionSettings::default(), "quote\"back\\slash");
    assert!(source.contains(r#"= "quote\"back\\slash";"#));
}

#[test]
fn test_write_source_creates_file() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("generated");
    let settings = RevisionSettings {
        generated_file_name: "version.rs".to_string(),
        ..RevisionSettings::default()
    };

    let path = write_source(&settings, "2.0.0", &out_dir).unwrap();
    assert_eq!(path, out_dir.join("version.rs"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("pub const DESCRIPTOR: &str = \"2.0.0\";"));
}

#[test]
fn test_invalid_namespace_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();
    let settings = RevisionSettings {
        generated_namespace: "build::my-mod".to_string(),
        ..RevisionSettings::default()
    };

    let err = write_source(&settings, "1.0.0", temp.path()).unwrap_err();
    assert!(matches!(
        &err,
        Error::InvalidIdentifier { setting: "GeneratedNamespace", value } if value == "my-mod"
    ));
    assert!(err.to_string().contains("my-mod"));
    assert!(!temp.path().join("revision.rs").exists());
}

#[test]
fn test_type_and_field_names_are_validated() {
    let bad_type = RevisionSettings {
        generated_type_name: "2Revision".to_string(),
        ..RevisionSettings::default()
    };
    assert!(matches!(
        validate_names(&bad_type),
        Err(Error::InvalidIdentifier { setting: "GeneratedTypeName", .. })
    ));

    let keyword_field = RevisionSettings {
        generated_field_name: "const".to_string(),
        ..RevisionSettings::default()
    };
    assert!(matches!(
        validate_names(&keyword_field),
        Err(Error::InvalidIdentifier { setting: "GeneratedFieldName", .. })
    ));

    assert!(validate_names(&RevisionSettings::default()).is_ok());
}
