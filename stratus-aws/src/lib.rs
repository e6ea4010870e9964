//! Stratus AWS
//!
//! Generated CloudFormation resource and property types for AWS services.
//!
//! ## Module Structure
//!
//! - `generated` - Auto-generated from `schemas/CloudFormationResourceSpecification.json`
//!
//! Regenerate with:
//!   stratus-codegen --file schemas/CloudFormationResourceSpecification.json \
//!     --output-dir stratus-aws/src/generated

pub mod generated;

pub use generated::{
    SPECIFICATION_VERSION, iam_role, property_type_names, resource_type_names, s3_bucket,
    step_functions_state_machine, tag,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stratus_core::{PropertyType, ResourceType, Specification, StringOrJson};

    const SPECIFICATION_JSON: &str =
        include_str!("../../schemas/CloudFormationResourceSpecification.json");

    fn specification() -> Specification {
        Specification::from_json_str(SPECIFICATION_JSON).unwrap()
    }

    #[test]
    fn test_generated_names_match_specification() {
        let spec = specification();
        assert_eq!(spec.resource_specification_version, SPECIFICATION_VERSION);

        let property_types: Vec<&str> = spec.property_types.keys().map(|k| k.as_str()).collect();
        assert_eq!(property_type_names(), property_types);

        let resource_types: Vec<&str> = spec.resource_types.keys().map(|k| k.as_str()).collect();
        assert_eq!(resource_type_names(), resource_types);
    }

    #[test]
    fn test_generated_attributes_match_specification() {
        let spec = specification();
        let attributes = |name: &str| -> Vec<String> {
            spec.resource_types[name].attributes.keys().cloned().collect()
        };
        assert_eq!(iam_role::Role::ATTRIBUTES, attributes("AWS::IAM::Role"));
        assert_eq!(s3_bucket::Bucket::ATTRIBUTES, attributes("AWS::S3::Bucket"));
        assert_eq!(
            step_functions_state_machine::StateMachine::ATTRIBUTES,
            attributes("AWS::StepFunctions::StateMachine")
        );
    }

    #[test]
    fn test_property_type_accessors() {
        let rule = s3_bucket::BucketCorsRule::default();
        assert_eq!(rule.aws_cloudformation_type(), "AWS::S3::Bucket.CorsRule");
        assert_eq!(
            rule.aws_cloudformation_specification_version(),
            SPECIFICATION_VERSION
        );
        assert_eq!(tag::Tag::AWS_CLOUDFORMATION_TYPE, "Tag");
    }

    #[test]
    fn test_bucket_cors_configuration() {
        let bucket: s3_bucket::Bucket = serde_json::from_value(json!({
            "BucketName": "assets",
            "CorsConfiguration": {
                "CorsRules": [
                    {
                        "AllowedMethods": ["GET", "HEAD"],
                        "AllowedOrigins": ["https://example.com"],
                        "MaxAge": 3600
                    }
                ]
            },
            "Tags": [{"Key": "team", "Value": "web"}]
        }))
        .unwrap();

        let cors = bucket.cors_configuration.as_ref().unwrap();
        assert_eq!(cors.cors_rules.len(), 1);
        assert_eq!(cors.cors_rules[0].allowed_methods, vec!["GET", "HEAD"]);
        assert_eq!(cors.cors_rules[0].max_age, Some(3600));
        assert_eq!(cors.cors_rules[0].allowed_headers, None);
        assert_eq!(
            bucket.tags,
            Some(vec![tag::Tag {
                key: "team".to_string(),
                value: "web".to_string(),
            }])
        );

        // Unset optional fields are omitted
        let encoded = serde_json::to_value(&cors.cors_rules[0]).unwrap();
        assert_eq!(
            encoded,
            json!({
                "AllowedMethods": ["GET", "HEAD"],
                "AllowedOrigins": ["https://example.com"],
                "MaxAge": 3600
            })
        );
    }

    #[test]
    fn test_missing_required_property_is_rejected() {
        let result: Result<s3_bucket::BucketCorsRule, _> =
            serde_json::from_value(json!({"AllowedMethods": ["GET"]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_role_policy_document_forms() {
        let role: iam_role::Role = serde_json::from_value(json!({
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": {"Service": "states.amazonaws.com"},
                    "Action": "sts:AssumeRole"
                }]
            },
            "Policies": [
                {
                    "PolicyName": "inline-string",
                    "PolicyDocument": "{\"Version\":\"2012-10-17\",\"Statement\":[]}"
                }
            ]
        }))
        .unwrap();

        assert_eq!(
            role.assume_role_policy_document
                .as_document()
                .and_then(|d| d.get("Version")),
            Some(&json!("2012-10-17"))
        );

        let policies = role.policies.as_ref().unwrap();
        assert_eq!(
            policies[0].policy_document.as_str(),
            Some("{\"Version\":\"2012-10-17\",\"Statement\":[]}")
        );

        // Each form is written back the way it was given
        let encoded = serde_json::to_value(&role).unwrap();
        assert!(encoded["AssumeRolePolicyDocument"].is_object());
        assert!(encoded["Policies"][0]["PolicyDocument"].is_string());
    }

    #[test]
    fn test_state_machine_template_round_trip() {
        let machine = step_functions_state_machine::StateMachine {
            definition: Some(StringOrJson::document(json!({
                "StartAt": "Hello",
                "States": {"Hello": {"Type": "Pass", "End": true}}
            }))),
            definition_substitutions: Some(
                [("Bucket".to_string(), "assets".to_string())]
                    .into_iter()
                    .collect(),
            ),
            role_arn: "arn:aws:iam::123456789012:role/states".to_string(),
            tracing_configuration: Some(
                step_functions_state_machine::StateMachineTracingConfiguration {
                    enabled: Some(true),
                },
            ),
            ..Default::default()
        };

        let entry = machine.to_template_resource().unwrap();
        assert_eq!(entry["Type"], json!("AWS::StepFunctions::StateMachine"));
        assert_eq!(entry["Properties"]["Definition"]["StartAt"], json!("Hello"));
        assert_eq!(
            entry["Properties"]["DefinitionSubstitutions"],
            json!({"Bucket": "assets"})
        );
        assert!(entry["Properties"].get("DefinitionS3Location").is_none());

        let decoded =
            step_functions_state_machine::StateMachine::from_template_resource(&entry).unwrap();
        assert_eq!(decoded, machine);
    }

    #[test]
    fn test_state_machine_definition_string() {
        let entry = json!({
            "Type": "AWS::StepFunctions::StateMachine",
            "Properties": {
                "Definition": "{\"StartAt\":\"Hello\"}",
                "RoleArn": "arn:aws:iam::123456789012:role/states"
            }
        });
        let machine =
            step_functions_state_machine::StateMachine::from_template_resource(&entry).unwrap();
        assert_eq!(
            machine.definition.as_ref().and_then(|d| d.as_str()),
            Some("{\"StartAt\":\"Hello\"}")
        );
    }

    #[test]
    fn test_template_entry_type_mismatch() {
        let entry = json!({
            "Type": "AWS::S3::Bucket",
            "Properties": {"RoleArn": "arn"}
        });
        let result = step_functions_state_machine::StateMachine::from_template_resource(&entry);
        assert!(matches!(
            result,
            Err(stratus_core::Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_intrinsic_functions_only_fit_json_fields() {
        // Typed fields hold literal values; an intrinsic function there is a parse error
        let entry = json!({
            "Type": "AWS::StepFunctions::StateMachine",
            "Properties": {
                "RoleArn": {"Fn::GetAtt": ["Role", "Arn"]}
            }
        });
        let result = step_functions_state_machine::StateMachine::from_template_resource(&entry);
        assert!(matches!(result, Err(stratus_core::Error::Parse(_))));

        // Json fields keep it as a document
        let entry = json!({
            "Type": "AWS::StepFunctions::StateMachine",
            "Properties": {
                "Definition": {"Fn::Sub": "${Definition}"},
                "RoleArn": "arn:aws:iam::123456789012:role/states"
            }
        });
        let machine =
            step_functions_state_machine::StateMachine::from_template_resource(&entry).unwrap();
        assert_eq!(
            machine.definition.as_ref().and_then(|d| d.as_document()),
            Some(&json!({"Fn::Sub": "${Definition}"}))
        );
    }
}
