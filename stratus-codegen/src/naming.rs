//! Naming rules for generated modules, structs and fields

use heck::{ToPascalCase, ToSnakeCase};
use stratus_core::TypeName;

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be used as raw identifiers
const RESERVED_PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Module a type is generated into
///
/// - `AWS::S3::Bucket.CorsRule` -> `s3_bucket`
/// - `AWS::StepFunctions::StateMachine.S3Location` -> `step_functions_state_machine`
/// - `Tag` -> `tag`
pub fn module_name(name: &TypeName) -> String {
    match (&name.service, &name.resource, &name.property) {
        (Some(service), Some(resource), _) => {
            format!("{}_{}", service.to_snake_case(), resource.to_snake_case())
        }
        (_, _, Some(property)) => {
            let module = property.to_snake_case();
            if RUST_KEYWORDS.contains(&module.as_str())
                || RESERVED_PATH_KEYWORDS.contains(&module.as_str())
            {
                format!("{}_", module)
            } else {
                module
            }
        }
        _ => String::new(),
    }
}

/// Struct name of a property type
///
/// - `AWS::S3::Bucket.CorsRule` -> `BucketCorsRule`
/// - `Tag` -> `Tag`
pub fn struct_name(name: &TypeName) -> String {
    match (&name.resource, &name.property) {
        (Some(resource), Some(property)) => {
            format!("{}{}", resource.to_pascal_case(), property.to_pascal_case())
        }
        (Some(resource), None) => resource.to_pascal_case(),
        (None, Some(property)) => property.to_pascal_case(),
        (None, None) => String::new(),
    }
}

/// Field name for a CloudFormation property (e.g., `AllowedMethods` -> `allowed_methods`)
pub fn field_name(property: &str) -> String {
    escape_identifier(property.to_snake_case())
}

fn escape_identifier(ident: String) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", ident)
    } else {
        ident
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> TypeName {
        TypeName::parse(name).unwrap()
    }

    #[test]
    fn test_module_name() {
        assert_eq!(module_name(&parse("AWS::S3::Bucket.CorsRule")), "s3_bucket");
        assert_eq!(module_name(&parse("AWS::IAM::Role.Policy")), "iam_role");
        assert_eq!(
            module_name(&parse("AWS::StepFunctions::StateMachine.S3Location")),
            "step_functions_state_machine"
        );
        assert_eq!(module_name(&parse("Tag")), "tag");
        assert_eq!(module_name(&parse("Type")), "type_");
    }

    #[test]
    fn test_struct_name() {
        assert_eq!(
            struct_name(&parse("AWS::S3::Bucket.CorsConfiguration")),
            "BucketCorsConfiguration"
        );
        assert_eq!(
            struct_name(&parse("AWS::StepFunctions::StateMachine.S3Location")),
            "StateMachineS3Location"
        );
        assert_eq!(struct_name(&parse("Tag")), "Tag");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("AllowedMethods"), "allowed_methods");
        assert_eq!(field_name("MaxAge"), "max_age");
        assert_eq!(field_name("DefinitionS3Location"), "definition_s3_location");
        assert_eq!(field_name("Id"), "id");
    }

    #[test]
    fn test_field_name_escapes_keywords() {
        assert_eq!(field_name("Type"), "r#type");
        assert_eq!(field_name("Match"), "r#match");
        assert_eq!(field_name("Self"), "self_");
        assert_eq!(field_name("Super"), "super_");
    }
}
