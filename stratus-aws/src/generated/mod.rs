//! Auto-generated CloudFormation resource and property types
//!
//! Generated from CloudFormation resource specification 210.1.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use stratus_core::{PropertyType, ResourceType};

pub mod iam_role;
pub mod s3_bucket;
pub mod step_functions_state_machine;
pub mod tag;

/// Version of the resource specification these types were generated from
pub const SPECIFICATION_VERSION: &str = "210.1.0";

/// Returns the CloudFormation type names of all generated property types
pub fn property_type_names() -> Vec<&'static str> {
    vec![
        iam_role::RolePolicy::AWS_CLOUDFORMATION_TYPE,
        s3_bucket::BucketCorsConfiguration::AWS_CLOUDFORMATION_TYPE,
        s3_bucket::BucketCorsRule::AWS_CLOUDFORMATION_TYPE,
        step_functions_state_machine::StateMachineS3Location::AWS_CLOUDFORMATION_TYPE,
        step_functions_state_machine::StateMachineTracingConfiguration::AWS_CLOUDFORMATION_TYPE,
        tag::Tag::AWS_CLOUDFORMATION_TYPE,
    ]
}

/// Returns the CloudFormation type names of all generated resource types
pub fn resource_type_names() -> Vec<&'static str> {
    vec![
        iam_role::Role::AWS_CLOUDFORMATION_TYPE,
        s3_bucket::Bucket::AWS_CLOUDFORMATION_TYPE,
        step_functions_state_machine::StateMachine::AWS_CLOUDFORMATION_TYPE,
    ]
}
