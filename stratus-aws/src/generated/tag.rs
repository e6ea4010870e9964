//! Tag property type
//!
//! Auto-generated from CloudFormation resource specification 210.1.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use serde::{Deserialize, Serialize};
use stratus_core::PropertyType;

/// `Tag`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tag {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html#cfn-resource-tags-key>
    ///
    /// Update type: Mutable
    #[serde(rename = "Key")]
    pub key: String,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-resource-tags.html#cfn-resource-tags-value>
    ///
    /// Update type: Mutable
    #[serde(rename = "Value")]
    pub value: String,
}

impl PropertyType for Tag {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "Tag";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
}
