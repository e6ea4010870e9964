//! Specification - Model of the CloudFormation resource specification document
//!
//! The resource specification is the machine-readable catalog that property
//! type structs are generated from. Only the parts needed for code generation
//! are modelled; unknown keys are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::property::TypeName;

/// The CloudFormation resource specification document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Specification {
    pub resource_specification_version: String,
    #[serde(default)]
    pub property_types: BTreeMap<String, PropertyTypeSpec>,
    #[serde(default)]
    pub resource_types: BTreeMap<String, ResourceTypeSpec>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyTypeSpec {
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySpec>,
    /// Set instead of `Properties` when the property type is an alias
    /// (e.g., `AWS::Transfer::Server.Protocol` is a plain `String`)
    pub primitive_type: Option<PrimitiveType>,
    #[serde(rename = "Type")]
    pub property_type: Option<String>,
    pub item_type: Option<String>,
    pub primitive_item_type: Option<PrimitiveType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTypeSpec {
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySpec>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSpec>,
}

/// A single property of a resource or property type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertySpec {
    pub documentation: Option<String>,
    pub primitive_type: Option<PrimitiveType>,
    /// `List`, `Map`, or the name of another property type
    #[serde(rename = "Type")]
    pub property_type: Option<String>,
    pub item_type: Option<String>,
    pub primitive_item_type: Option<PrimitiveType>,
    #[serde(default)]
    pub required: bool,
    pub update_type: Option<UpdateType>,
    pub duplicates_allowed: Option<bool>,
}

/// A read-only attribute returned by `Fn::GetAtt`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeSpec {
    pub primitive_type: Option<PrimitiveType>,
    #[serde(rename = "Type")]
    pub attribute_type: Option<String>,
    pub primitive_item_type: Option<PrimitiveType>,
    pub item_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Long,
    Integer,
    Double,
    Boolean,
    Timestamp,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateType {
    Mutable,
    Immutable,
    Conditional,
}

/// Classified shape of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyShape<'a> {
    Primitive(PrimitiveType),
    PrimitiveList(PrimitiveType),
    PrimitiveMap(PrimitiveType),
    /// Reference to another property type by its short name (e.g., "CorsRule")
    Named(&'a str),
    NamedList(&'a str),
    NamedMap(&'a str),
}

impl<'a> PropertyShape<'a> {
    /// Short name of the referenced property type, if any
    pub fn referenced_type(&self) -> Option<&'a str> {
        match self {
            PropertyShape::Named(n) | PropertyShape::NamedList(n) | PropertyShape::NamedMap(n) => {
                Some(n)
            }
            _ => None,
        }
    }
}

impl PropertySpec {
    /// Classify this property. `type_name` and `property` are used for error reporting.
    pub fn shape(&self, type_name: &str, property: &str) -> Result<PropertyShape<'_>> {
        classify(
            self.primitive_type,
            self.property_type.as_deref(),
            self.item_type.as_deref(),
            self.primitive_item_type,
        )
        .map_err(|reason| Error::invalid_property(type_name, property, reason))
    }
}

impl PropertyTypeSpec {
    /// Shape of an alias property type, or `None` for one with `Properties`
    pub fn alias_shape(&self, type_name: &str) -> Result<Option<PropertyShape<'_>>> {
        if self.primitive_type.is_none() && self.property_type.is_none() {
            return Ok(None);
        }
        if !self.properties.is_empty() {
            return Err(Error::invalid_property(
                type_name,
                "Type",
                "both Properties and a type are set",
            ));
        }
        classify(
            self.primitive_type,
            self.property_type.as_deref(),
            self.item_type.as_deref(),
            self.primitive_item_type,
        )
        .map(Some)
        .map_err(|reason| Error::invalid_property(type_name, "Type", reason))
    }

    pub fn is_alias(&self) -> bool {
        self.primitive_type.is_some() || self.property_type.is_some()
    }
}

fn classify<'a>(
    primitive_type: Option<PrimitiveType>,
    property_type: Option<&'a str>,
    item_type: Option<&'a str>,
    primitive_item_type: Option<PrimitiveType>,
) -> std::result::Result<PropertyShape<'a>, String> {
    if let Some(primitive) = primitive_type {
        return Ok(PropertyShape::Primitive(primitive));
    }

    match property_type {
        Some(container @ ("List" | "Map")) => {
            let is_list = container == "List";
            match (primitive_item_type, item_type) {
                (Some(p), _) if is_list => Ok(PropertyShape::PrimitiveList(p)),
                (Some(p), _) => Ok(PropertyShape::PrimitiveMap(p)),
                (None, Some(item)) if is_list => Ok(PropertyShape::NamedList(item)),
                (None, Some(item)) => Ok(PropertyShape::NamedMap(item)),
                (None, None) => Err(format!(
                    "{} without ItemType or PrimitiveItemType",
                    container
                )),
            }
        }
        Some(named) => Ok(PropertyShape::Named(named)),
        None => Err("neither PrimitiveType nor Type is set".to_string()),
    }
}

impl Specification {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn property_type(&self, name: &str) -> Option<&PropertyTypeSpec> {
        self.property_types.get(name)
    }

    /// Resolve a short type reference made by `owner` to a full property type name.
    ///
    /// References are looked up under the owner's resource first
    /// (`AWS::S3::Bucket.CorsRule`), then as a global type (`Tag`).
    pub fn resolve_reference(&self, owner: &TypeName, target: &str) -> Option<String> {
        if let Some(resource) = owner.resource_type() {
            let scoped = format!("{}.{}", resource, target);
            if self.property_types.contains_key(&scoped) {
                return Some(scoped);
            }
        }
        if self.property_types.contains_key(target) {
            return Some(target.to_string());
        }
        None
    }

    /// Keep only types whose names start with `prefix` (e.g., "AWS::S3::").
    ///
    /// Global property types are always kept since any resource may reference them.
    pub fn filter_prefix(&self, prefix: &str) -> Specification {
        self.filter_prefixes(&[prefix])
    }

    pub fn filter_prefixes<S: AsRef<str>>(&self, prefixes: &[S]) -> Specification {
        let keep = |name: &str| {
            !name.contains("::") || prefixes.iter().any(|p| name.starts_with(p.as_ref()))
        };

        Specification {
            resource_specification_version: self.resource_specification_version.clone(),
            property_types: self
                .property_types
                .iter()
                .filter(|(name, _)| keep(name))
                .map(|(name, spec)| (name.clone(), spec.clone()))
                .collect(),
            resource_types: self
                .resource_types
                .iter()
                .filter(|(name, _)| keep(name))
                .map(|(name, spec)| (name.clone(), spec.clone()))
                .collect(),
        }
    }

    /// Check type names and that every named reference resolves to a property type
    pub fn validate(&self) -> Result<()> {
        let property_owners = self
            .property_types
            .iter()
            .map(|(name, spec)| (name, &spec.properties));
        let resource_owners = self
            .resource_types
            .iter()
            .map(|(name, spec)| (name, &spec.properties));

        for (owner_name, properties) in property_owners.chain(resource_owners) {
            let owner = TypeName::parse(owner_name)?;
            for (property_name, property) in properties {
                let shape = property.shape(owner_name, property_name)?;
                self.check_reference(&owner, owner_name, property_name, shape)?;
            }
        }

        for (alias_name, spec) in &self.property_types {
            let Some(shape) = spec.alias_shape(alias_name)? else {
                continue;
            };
            let owner = TypeName::parse(alias_name)?;
            self.check_reference(&owner, alias_name, "Type", shape)?;
            // Rust type aliases cannot refer to themselves, not even through a collection
            if let Some(target) = shape.referenced_type()
                && self.resolve_reference(&owner, target).as_deref() == Some(alias_name.as_str())
            {
                return Err(Error::invalid_property(
                    alias_name.as_str(),
                    "Type",
                    "alias refers to itself",
                ));
            }
        }

        log::debug!(
            "Validated specification {} ({} property types, {} resource types)",
            self.resource_specification_version,
            self.property_types.len(),
            self.resource_types.len()
        );
        Ok(())
    }

    fn check_reference(
        &self,
        owner: &TypeName,
        owner_name: &str,
        property_name: &str,
        shape: PropertyShape<'_>,
    ) -> Result<()> {
        if let Some(target) = shape.referenced_type()
            && self.resolve_reference(owner, target).is_none()
        {
            return Err(Error::UnresolvedReference {
                type_name: owner_name.to_string(),
                property: property_name.to_string(),
                target: target.to_string(),
            });
        }
        Ok(())
    }
}
