//! Stratus Codegen
//!
//! Generates Rust property type structs from the CloudFormation resource
//! specification document.
//!
//! ## Module Structure
//!
//! - `generator` - Turns a `Specification` into source modules
//! - `naming` - Module, struct and field naming rules
//! - `error` - Code generation errors

pub mod error;
pub mod generator;
pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use stratus_core::Specification;

pub use error::{CodegenError, CodegenResult};
pub use generator::{GeneratedModule, Generator};

/// Validate the specification and generate all modules
pub fn generate(spec: &Specification) -> CodegenResult<Vec<GeneratedModule>> {
    spec.validate()?;
    Generator::new(spec)?.generate()
}

/// Write generated modules into `out_dir`, creating it if needed.
///
/// Returns the paths written, in generation order.
pub fn write_modules(out_dir: &Path, modules: &[GeneratedModule]) -> CodegenResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| CodegenError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(modules.len());
    for module in modules {
        let path = out_dir.join(module.file_name());
        fs::write(&path, &module.code).map_err(|source| CodegenError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec() -> Specification {
        serde_json::from_value(json!({
            "ResourceSpecificationVersion": "210.1.0",
            "PropertyTypes": {
                "AWS::S3::Bucket.CorsRule": {
                    "Properties": {
                        "AllowedOrigins": {"Required": true, "Type": "List", "PrimitiveItemType": "String"}
                    }
                },
                "Tag": {
                    "Properties": {
                        "Key": {"Required": true, "PrimitiveType": "String"},
                        "Value": {"Required": true, "PrimitiveType": "String"}
                    }
                }
            },
            "ResourceTypes": {
                "AWS::S3::Bucket": {
                    "Properties": {
                        "Tags": {"Required": false, "Type": "List", "ItemType": "Tag"}
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_generate_and_write_modules() {
        let modules = generate(&spec()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("generated");

        let written = write_modules(&out_dir, &modules).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["s3_bucket.rs", "tag.rs", "mod.rs"]);

        let s3 = fs::read_to_string(out_dir.join("s3_bucket.rs")).unwrap();
        assert!(s3.contains("pub struct BucketCorsRule {"));
        assert!(s3.contains("DO NOT EDIT MANUALLY"));
    }

    #[test]
    fn test_generate_rejects_invalid_specification() {
        let mut spec = spec();
        spec.resource_types
            .get_mut("AWS::S3::Bucket")
            .unwrap()
            .properties
            .get_mut("Tags")
            .unwrap()
            .item_type = Some("Label".to_string());

        assert!(matches!(
            generate(&spec),
            Err(CodegenError::Specification(_))
        ));
    }

    #[test]
    fn test_checked_in_aws_modules_are_up_to_date() {
        let spec = Specification::from_json_str(include_str!(
            "../../schemas/CloudFormationResourceSpecification.json"
        ))
        .unwrap();
        let modules = generate(&spec).unwrap();

        let checked_in = [
            ("iam_role", include_str!("../../stratus-aws/src/generated/iam_role.rs")),
            ("s3_bucket", include_str!("../../stratus-aws/src/generated/s3_bucket.rs")),
            (
                "step_functions_state_machine",
                include_str!("../../stratus-aws/src/generated/step_functions_state_machine.rs"),
            ),
            ("tag", include_str!("../../stratus-aws/src/generated/tag.rs")),
            ("mod", include_str!("../../stratus-aws/src/generated/mod.rs")),
        ];
        assert_eq!(modules.len(), checked_in.len());

        for (name, expected) in checked_in {
            let module = modules.iter().find(|m| m.name == name).unwrap();
            assert_eq!(
                module.code, expected,
                "stratus-aws/src/generated/{}.rs is stale, regenerate it",
                name
            );
        }
    }

    #[test]
    fn test_write_modules_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let modules = generate(&spec()).unwrap();
        match write_modules(&blocker, &modules) {
            Err(CodegenError::Io { path, .. }) => assert_eq!(path, blocker),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
