//! AWS::StepFunctions::StateMachine resource and property types
//!
//! Auto-generated from CloudFormation resource specification 210.1.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stratus_core::{PropertyType, ResourceType, StringOrJson};

/// `AWS::StepFunctions::StateMachine`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateMachine {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html#cfn-stepfunctions-statemachine-definition>
    ///
    /// Update type: Mutable
    #[serde(rename = "Definition", skip_serializing_if = "Option::is_none")]
    pub definition: Option<StringOrJson>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html#cfn-stepfunctions-statemachine-definitions3location>
    ///
    /// Update type: Mutable
    #[serde(rename = "DefinitionS3Location", skip_serializing_if = "Option::is_none")]
    pub definition_s3_location: Option<StateMachineS3Location>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html#cfn-stepfunctions-statemachine-definitionsubstitutions>
    ///
    /// Update type: Mutable
    #[serde(rename = "DefinitionSubstitutions", skip_serializing_if = "Option::is_none")]
    pub definition_substitutions: Option<BTreeMap<String, String>>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html#cfn-stepfunctions-statemachine-rolearn>
    ///
    /// Update type: Mutable
    #[serde(rename = "RoleArn")]
    pub role_arn: String,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-stepfunctions-statemachine.html#cfn-stepfunctions-statemachine-tracingconfiguration>
    ///
    /// Update type: Mutable
    #[serde(rename = "TracingConfiguration", skip_serializing_if = "Option::is_none")]
    pub tracing_configuration: Option<StateMachineTracingConfiguration>,
}

impl ResourceType for StateMachine {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::StepFunctions::StateMachine";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
    const ATTRIBUTES: &'static [&'static str] = &["Arn", "Name"];
}

/// `AWS::StepFunctions::StateMachine.S3Location`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-s3location.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateMachineS3Location {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-s3location.html#cfn-stepfunctions-statemachine-s3location-bucket>
    ///
    /// Update type: Mutable
    #[serde(rename = "Bucket")]
    pub bucket: String,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-s3location.html#cfn-stepfunctions-statemachine-s3location-key>
    ///
    /// Update type: Mutable
    #[serde(rename = "Key")]
    pub key: String,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-s3location.html#cfn-stepfunctions-statemachine-s3location-version>
    ///
    /// Update type: Mutable
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PropertyType for StateMachineS3Location {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::StepFunctions::StateMachine.S3Location";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
}

/// `AWS::StepFunctions::StateMachine.TracingConfiguration`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-tracingconfiguration.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateMachineTracingConfiguration {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-stepfunctions-statemachine-tracingconfiguration.html#cfn-stepfunctions-statemachine-tracingconfiguration-enabled>
    ///
    /// Update type: Mutable
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl PropertyType for StateMachineTracingConfiguration {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::StepFunctions::StateMachine.TracingConfiguration";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
}
