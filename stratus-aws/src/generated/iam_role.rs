//! AWS::IAM::Role resource and property types
//!
//! Auto-generated from CloudFormation resource specification 210.1.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use serde::{Deserialize, Serialize};
use stratus_core::{PropertyType, ResourceType, StringOrJson};

/// `AWS::IAM::Role`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Role {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html#cfn-iam-role-assumerolepolicydocument>
    ///
    /// Update type: Mutable
    #[serde(rename = "AssumeRolePolicyDocument")]
    pub assume_role_policy_document: StringOrJson,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html#cfn-iam-role-path>
    ///
    /// Update type: Immutable
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html#cfn-iam-role-policies>
    ///
    /// Update type: Mutable
    #[serde(rename = "Policies", skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<RolePolicy>>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-iam-role.html#cfn-iam-role-tags>
    ///
    /// Update type: Mutable
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<super::tag::Tag>>,
}

impl ResourceType for Role {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::IAM::Role";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
    const ATTRIBUTES: &'static [&'static str] = &["Arn", "RoleId"];
}

/// `AWS::IAM::Role.Policy`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-policy.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RolePolicy {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-policy.html#cfn-iam-policies-policydocument>
    ///
    /// Update type: Mutable
    #[serde(rename = "PolicyDocument")]
    pub policy_document: StringOrJson,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-iam-policy.html#cfn-iam-policies-policyname>
    ///
    /// Update type: Mutable
    #[serde(rename = "PolicyName")]
    pub policy_name: String,
}

impl PropertyType for RolePolicy {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::IAM::Role.Policy";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
}
