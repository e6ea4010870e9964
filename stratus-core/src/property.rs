//! Property - Contract implemented by generated CloudFormation property types

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{Error, Result};

/// A struct generated from a CloudFormation property type definition
///
/// Generated code implements this with the full type name
/// (e.g., `AWS::S3::Bucket.CorsRule`) and the version of the resource
/// specification it was generated from.
pub trait PropertyType {
    /// CloudFormation type name (e.g., "AWS::S3::Bucket.CorsConfiguration")
    const AWS_CLOUDFORMATION_TYPE: &'static str;
    /// Version of the resource specification the type was generated from
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str;

    fn aws_cloudformation_type(&self) -> &'static str {
        Self::AWS_CLOUDFORMATION_TYPE
    }

    fn aws_cloudformation_specification_version(&self) -> &'static str {
        Self::AWS_CLOUDFORMATION_SPECIFICATION_VERSION
    }
}

/// A struct generated from a CloudFormation resource type definition
///
/// Besides its own properties, a resource knows the attributes it exposes
/// through `Fn::GetAtt` and how it is laid out in a template.
pub trait ResourceType: Serialize + DeserializeOwned {
    /// CloudFormation type name (e.g., "AWS::S3::Bucket")
    const AWS_CLOUDFORMATION_TYPE: &'static str;
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str;
    /// Attribute names available through `Fn::GetAtt`
    const ATTRIBUTES: &'static [&'static str];

    fn aws_cloudformation_type(&self) -> &'static str {
        Self::AWS_CLOUDFORMATION_TYPE
    }

    fn aws_cloudformation_specification_version(&self) -> &'static str {
        Self::AWS_CLOUDFORMATION_SPECIFICATION_VERSION
    }

    /// Build the template entry `{"Type": ..., "Properties": {...}}`
    fn to_template_resource(&self) -> Result<Value> {
        let properties = serde_json::to_value(self)?;
        Ok(json!({
            "Type": Self::AWS_CLOUDFORMATION_TYPE,
            "Properties": properties,
        }))
    }

    /// Read a template entry, checking that its `Type` matches this resource
    fn from_template_resource(entry: &Value) -> Result<Self> {
        let actual = entry.get("Type").and_then(Value::as_str).unwrap_or_default();
        if actual != Self::AWS_CLOUDFORMATION_TYPE {
            return Err(Error::TypeMismatch {
                expected: Self::AWS_CLOUDFORMATION_TYPE.to_string(),
                actual: actual.to_string(),
            });
        }

        // A resource without properties is written with the key omitted
        let properties = entry.get("Properties").cloned().unwrap_or_else(|| json!({}));
        Ok(serde_json::from_value(properties)?)
    }
}

/// Parsed CloudFormation type name
///
/// - `AWS::S3::Bucket` -> resource type
/// - `AWS::S3::Bucket.CorsRule` -> property type of a resource
/// - `Tag` -> global property type shared by all resources
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub vendor: Option<String>,
    pub service: Option<String>,
    pub resource: Option<String>,
    pub property: Option<String>,
}

impl TypeName {
    /// Parse a type name in `Vendor::Service::Resource[.Property]` form, or a bare global name
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || Error::InvalidTypeName(name.to_string());

        if !name.contains("::") {
            if name.is_empty() || name.contains('.') || !is_identifier(name) {
                return Err(invalid());
            }
            return Ok(Self {
                vendor: None,
                service: None,
                resource: None,
                property: Some(name.to_string()),
            });
        }

        let (resource_part, property) = match name.split_once('.') {
            Some((r, p)) => {
                if !is_identifier(p) {
                    return Err(invalid());
                }
                (r, Some(p.to_string()))
            }
            None => (name, None),
        };

        let parts: Vec<&str> = resource_part.split("::").collect();
        if parts.len() != 3 || parts.iter().any(|p| !is_identifier(p)) {
            return Err(invalid());
        }

        Ok(Self {
            vendor: Some(parts[0].to_string()),
            service: Some(parts[1].to_string()),
            resource: Some(parts[2].to_string()),
            property,
        })
    }

    /// Returns true for property types not scoped to a resource (e.g., `Tag`)
    pub fn is_global(&self) -> bool {
        self.resource.is_none()
    }

    pub fn is_property_type(&self) -> bool {
        self.property.is_some()
    }

    /// Resource type this name belongs to (e.g., "AWS::S3::Bucket")
    pub fn resource_type(&self) -> Option<String> {
        match (&self.vendor, &self.service, &self.resource) {
            (Some(v), Some(s), Some(r)) => Some(format!("{}::{}::{}", v, s, r)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.resource_type(), &self.property) {
            (Some(resource), Some(property)) => write!(f, "{}.{}", resource, property),
            (Some(resource), None) => write!(f, "{}", resource),
            (None, Some(property)) => write!(f, "{}", property),
            (None, None) => Ok(()),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a type name, see [`TypeName::parse`]
pub fn split_type_name(name: &str) -> Result<TypeName> {
    TypeName::parse(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CorsRule;

    impl PropertyType for CorsRule {
        const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::S3::Bucket.CorsRule";
        const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
    }

    #[test]
    fn test_property_type_accessors() {
        let rule = CorsRule;
        assert_eq!(rule.aws_cloudformation_type(), "AWS::S3::Bucket.CorsRule");
        assert_eq!(rule.aws_cloudformation_specification_version(), "210.1.0");
    }

    #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
    struct Queue {
        #[serde(rename = "QueueName", skip_serializing_if = "Option::is_none")]
        queue_name: Option<String>,
    }

    impl ResourceType for Queue {
        const AWS_CLOUDFORMATION_TYPE: &'static str = "AWS::SQS::Queue";
        const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = "210.1.0";
        const ATTRIBUTES: &'static [&'static str] = &["Arn", "QueueName", "QueueUrl"];
    }

    #[test]
    fn test_resource_type_template_round_trip() {
        let queue = Queue {
            queue_name: Some("jobs".to_string()),
        };
        assert_eq!(queue.aws_cloudformation_type(), "AWS::SQS::Queue");

        let entry = queue.to_template_resource().unwrap();
        assert_eq!(
            entry,
            json!({"Type": "AWS::SQS::Queue", "Properties": {"QueueName": "jobs"}})
        );
        assert_eq!(Queue::from_template_resource(&entry).unwrap(), queue);
    }

    #[test]
    fn test_resource_type_without_properties() {
        let queue = Queue::from_template_resource(&json!({"Type": "AWS::SQS::Queue"})).unwrap();
        assert_eq!(queue, Queue { queue_name: None });
    }

    #[test]
    fn test_resource_type_mismatch() {
        let result = Queue::from_template_resource(&json!({"Type": "AWS::SNS::Topic"}));
        match result {
            Err(Error::TypeMismatch { expected, actual }) => {
                assert_eq!(expected, "AWS::SQS::Queue");
                assert_eq!(actual, "AWS::SNS::Topic");
            }
            other => panic!("expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_property_type_name() {
        let name = TypeName::parse("AWS::S3::Bucket.CorsConfiguration").unwrap();
        assert_eq!(name.vendor.as_deref(), Some("AWS"));
        assert_eq!(name.service.as_deref(), Some("S3"));
        assert_eq!(name.resource.as_deref(), Some("Bucket"));
        assert_eq!(name.property.as_deref(), Some("CorsConfiguration"));
        assert_eq!(name.resource_type().as_deref(), Some("AWS::S3::Bucket"));
        assert!(name.is_property_type());
        assert!(!name.is_global());
        assert_eq!(name.to_string(), "AWS::S3::Bucket.CorsConfiguration");
    }

    #[test]
    fn test_parse_resource_type_name() {
        let name = split_type_name("AWS::IAM::Role").unwrap();
        assert!(!name.is_property_type());
        assert_eq!(name.to_string(), "AWS::IAM::Role");
    }

    #[test]
    fn test_parse_global_type_name() {
        let name = TypeName::parse("Tag").unwrap();
        assert!(name.is_global());
        assert_eq!(name.property.as_deref(), Some("Tag"));
        assert_eq!(name.to_string(), "Tag");
    }

    #[test]
    fn test_parse_invalid_type_names() {
        for name in [
            "",
            "AWS::S3",
            "AWS::S3::Bucket::Extra",
            "AWS::S3::Bucket.",
            "AWS::::Bucket",
            "AWS::S3::Bucket.Cors.Rule",
            "Tag.Key",
            "has space",
        ] {
            assert!(
                matches!(TypeName::parse(name), Err(Error::InvalidTypeName(_))),
                "expected {:?} to be rejected",
                name
            );
        }
    }
}
