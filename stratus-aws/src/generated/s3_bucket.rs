//! AWS::S3::Bucket resource and property types
//!
//! Auto-generated from CloudFormation resource specification 210.1.0
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use serde::{Deserialize, Serialize};
use stratus_core::{PropertyType, ResourceType};

/// `AWS::S3::Bucket`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bucket {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket.html#cfn-s3-bucket-name>
    ///
    /// Update type: Immutable
    #[serde(rename = "BucketName", skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket.html#cfn-s3-bucket-crossoriginconfig>
    ///
    /// Update type: Mutable
    #[serde(rename = "CorsConfiguration", skip_serializing_if = "Option::is_none")]
    pub cors_configuration: Option<BucketCorsConfiguration>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket.html#cfn-s3-bucket-tags>
    ///
    /// Update type: Mutable
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<super::tag::Tag>>,
}

impl ResourceType for Bucket {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::S3::Bucket";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
    const ATTRIBUTES: &'static [&'static str] = &["Arn", "DomainName"];
}

/// `AWS::S3::Bucket.CorsConfiguration`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BucketCorsConfiguration {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors.html#cfn-s3-bucket-cors-corsrule>
    ///
    /// Update type: Mutable
    #[serde(rename = "CorsRules")]
    pub cors_rules: Vec<BucketCorsRule>,
}

impl PropertyType for BucketCorsConfiguration {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::S3::Bucket.CorsConfiguration";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
}

/// `AWS::S3::Bucket.CorsRule`
///
/// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BucketCorsRule {
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html#cfn-s3-bucket-cors-corsrule-allowedheaders>
    ///
    /// Update type: Mutable
    #[serde(rename = "AllowedHeaders", skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html#cfn-s3-bucket-cors-corsrule-allowedmethods>
    ///
    /// Update type: Mutable
    #[serde(rename = "AllowedMethods")]
    pub allowed_methods: Vec<String>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html#cfn-s3-bucket-cors-corsrule-allowedorigins>
    ///
    /// Update type: Mutable
    #[serde(rename = "AllowedOrigins")]
    pub allowed_origins: Vec<String>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html#cfn-s3-bucket-cors-corsrule-exposedheaders>
    ///
    /// Update type: Mutable
    #[serde(rename = "ExposedHeaders", skip_serializing_if = "Option::is_none")]
    pub exposed_headers: Option<Vec<String>>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html#cfn-s3-bucket-cors-corsrule-id>
    ///
    /// Update type: Mutable
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// See: <http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-s3-bucket-cors-corsrule.html#cfn-s3-bucket-cors-corsrule-maxage>
    ///
    /// Update type: Mutable
    #[serde(rename = "MaxAge", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
}

impl PropertyType for BucketCorsRule {
    const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::S3::Bucket.CorsRule";
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
}
