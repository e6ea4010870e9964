//! Generator - Turns a resource specification into Rust source modules
//!
//! Every property type becomes a serde struct implementing
//! `stratus_core::PropertyType`, every resource type one implementing
//! `stratus_core::ResourceType`. Types are grouped into one module per
//! resource (`s3_bucket.rs`), global types get their own module (`tag.rs`),
//! and a `mod.rs` ties them together.

use std::collections::{BTreeMap, HashSet};

use stratus_core::specification::{PrimitiveType, PropertyShape, PropertySpec};
use stratus_core::{Specification, TypeName};

use crate::error::{CodegenError, CodegenResult};
use crate::naming;

/// A generated Rust source file
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModule {
    /// Module name without extension (e.g., "s3_bucket", "mod")
    pub name: String,
    pub code: String,
}

impl GeneratedModule {
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }
}

/// Where a property type ends up in the generated tree
#[derive(Debug, Clone)]
struct TypeLocation {
    type_name: TypeName,
    module: String,
    struct_name: String,
}

pub struct Generator<'a> {
    spec: &'a Specification,
    /// Full CloudFormation name -> location, for property and resource types
    locations: BTreeMap<String, TypeLocation>,
}

impl<'a> Generator<'a> {
    /// Prepare generation, assigning every type a module and struct name
    pub fn new(spec: &'a Specification) -> CodegenResult<Self> {
        let mut locations = BTreeMap::new();
        let mut taken: BTreeMap<(String, String), String> = BTreeMap::new();

        let names = spec.property_types.keys().chain(spec.resource_types.keys());
        for full_name in names {
            let type_name = TypeName::parse(full_name)?;
            let module = naming::module_name(&type_name);
            let struct_name = naming::struct_name(&type_name);

            if let Some(first) = taken.insert((module.clone(), struct_name.clone()), full_name.clone())
            {
                return Err(CodegenError::NameCollision {
                    module,
                    struct_name,
                    first,
                    second: full_name.clone(),
                });
            }

            locations.insert(
                full_name.clone(),
                TypeLocation {
                    type_name,
                    module,
                    struct_name,
                },
            );
        }

        Ok(Self { spec, locations })
    }

    /// Generate all modules plus `mod.rs`
    pub fn generate(&self) -> CodegenResult<Vec<GeneratedModule>> {
        let mut by_module: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (full_name, location) in &self.locations {
            by_module
                .entry(location.module.as_str())
                .or_default()
                .push(full_name.as_str());
        }

        let mut modules = Vec::with_capacity(by_module.len() + 1);
        for (module, type_names) in &by_module {
            log::debug!("Generating module {} ({} types)", module, type_names.len());
            modules.push(GeneratedModule {
                name: module.to_string(),
                code: self.generate_module(type_names)?,
            });
        }

        modules.push(GeneratedModule {
            name: "mod".to_string(),
            code: self.generate_mod_rs(&by_module),
        });

        Ok(modules)
    }

    fn generate_module(&self, type_names: &[&str]) -> CodegenResult<String> {
        let first = &self.locations[type_names[0]];
        let has_properties = type_names
            .iter()
            .any(|n| self.locations[*n].type_name.is_property_type() && !self.is_alias(n));
        let has_resources = type_names
            .iter()
            .any(|n| !self.locations[*n].type_name.is_property_type());

        let title = match (first.type_name.resource_type(), has_resources) {
            (Some(resource), true) => format!("{} resource and property types", resource),
            (Some(resource), false) => format!("{} property types", resource),
            (None, _) => format!("{} property type", first.type_name),
        };

        let mut body = String::new();
        for full_name in type_names {
            body.push_str(&self.generate_struct(full_name)?);
        }

        // Imports depend on what the generated structs ended up using
        let mut core_imports = Vec::new();
        if has_properties {
            core_imports.push("PropertyType");
        }
        if has_resources {
            core_imports.push("ResourceType");
        }
        if body.contains("StringOrJson") {
            core_imports.push("StringOrJson");
        }
        let needs_btree_map = body.contains("BTreeMap<");

        let mut code = format!(
            r#"//! {}
//!
//! Auto-generated from CloudFormation resource specification {}
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

use serde::{{Deserialize, Serialize}};
"#,
            title, self.spec.resource_specification_version
        );
        if needs_btree_map {
            code.push_str("use std::collections::BTreeMap;\n");
        }
        code.push_str(&use_statement("stratus_core", &core_imports));

        code.push_str(&body);
        Ok(code)
    }

    fn generate_struct(&self, full_name: &str) -> CodegenResult<String> {
        let location = &self.locations[full_name];
        let is_property_type = location.type_name.is_property_type();
        let (documentation, properties) = if is_property_type {
            let spec = &self.spec.property_types[full_name];
            (&spec.documentation, &spec.properties)
        } else {
            let spec = &self.spec.resource_types[full_name];
            (&spec.documentation, &spec.properties)
        };

        let mut code = format!("\n/// `{}`\n", full_name);
        if let Some(doc) = documentation {
            code.push_str(&format!("///\n/// See: <{}>\n", sanitize_doc(doc)));
        }

        if is_property_type
            && let Some(shape) = self.spec.property_types[full_name].alias_shape(full_name)?
        {
            let rust_type = self.rust_type(full_name, location, "Type", shape)?;
            code.push_str(&format!("pub type {} = {};\n", location.struct_name, rust_type));
            return Ok(code);
        }

        code.push_str("#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]\n");

        if properties.is_empty() {
            log::warn!("{} has no properties", full_name);
            code.push_str(&format!("pub struct {} {{}}\n", location.struct_name));
        } else {
            code.push_str(&format!("pub struct {} {{\n", location.struct_name));
            for (property_name, property) in properties {
                code.push_str(&self.generate_field(full_name, location, property_name, property)?);
            }
            code.push_str("}\n");
        }

        if is_property_type {
            code.push_str(&format!(
                r#"
impl PropertyType for {} {{
    const AWS_CLOUDFORMATION_TYPE: &'static str = {:?};
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = {:?};
}}
"#,
                location.struct_name, full_name, self.spec.resource_specification_version
            ));
        } else {
            let attributes = self.spec.resource_types[full_name]
                .attributes
                .keys()
                .map(|a| format!("{:?}", a))
                .collect::<Vec<_>>()
                .join(", ");
            code.push_str(&format!(
                r#"
impl ResourceType for {} {{
    const AWS_CLOUDFORMATION_TYPE: &'static str = {:?};
    const AWS_CLOUDFORMATION_SPECIFICATION_VERSION: &'static str = {:?};
    const ATTRIBUTES: &'static [&'static str] = &[{}];
}}
"#,
                location.struct_name,
                full_name,
                self.spec.resource_specification_version,
                attributes
            ));
        }

        Ok(code)
    }

    fn generate_field(
        &self,
        owner_name: &str,
        owner: &TypeLocation,
        property_name: &str,
        property: &PropertySpec,
    ) -> CodegenResult<String> {
        let shape = property.shape(owner_name, property_name)?;
        let rust_type = self.rust_type(owner_name, owner, property_name, shape)?;

        let mut doc_lines = Vec::new();
        if let Some(doc) = &property.documentation {
            doc_lines.push(format!("See: <{}>", sanitize_doc(doc)));
        }
        if let Some(update_type) = property.update_type {
            doc_lines.push(format!("Update type: {:?}", update_type));
        }

        let mut code = String::new();
        for (i, line) in doc_lines.iter().enumerate() {
            if i > 0 {
                code.push_str("    ///\n");
            }
            code.push_str(&format!("    /// {}\n", line));
        }

        if property.required {
            code.push_str(&format!("    #[serde(rename = {:?})]\n", property_name));
            code.push_str(&format!(
                "    pub {}: {},\n",
                naming::field_name(property_name),
                rust_type
            ));
        } else {
            code.push_str(&format!(
                "    #[serde(rename = {:?}, skip_serializing_if = \"Option::is_none\")]\n",
                property_name
            ));
            code.push_str(&format!(
                "    pub {}: Option<{}>,\n",
                naming::field_name(property_name),
                rust_type
            ));
        }

        Ok(code)
    }

    fn rust_type(
        &self,
        owner_name: &str,
        owner: &TypeLocation,
        property_name: &str,
        shape: PropertyShape<'_>,
    ) -> CodegenResult<String> {
        let rust_type = match shape {
            PropertyShape::Primitive(p) => primitive_rust_type(p).to_string(),
            PropertyShape::PrimitiveList(p) => format!("Vec<{}>", primitive_rust_type(p)),
            PropertyShape::PrimitiveMap(p) => {
                format!("BTreeMap<String, {}>", primitive_rust_type(p))
            }
            PropertyShape::Named(target) => {
                let target_name = self.resolve(owner_name, owner, property_name, target)?;
                let path = self.type_path(owner, &target_name);
                // Direct struct nesting needs indirection when it can cycle back
                if self.reaches(&target_name, owner_name) {
                    format!("Box<{}>", path)
                } else {
                    path
                }
            }
            PropertyShape::NamedList(target) => {
                let target_name = self.resolve(owner_name, owner, property_name, target)?;
                format!("Vec<{}>", self.type_path(owner, &target_name))
            }
            PropertyShape::NamedMap(target) => {
                let target_name = self.resolve(owner_name, owner, property_name, target)?;
                format!("BTreeMap<String, {}>", self.type_path(owner, &target_name))
            }
        };
        Ok(rust_type)
    }

    fn resolve(
        &self,
        owner_name: &str,
        owner: &TypeLocation,
        property_name: &str,
        target: &str,
    ) -> CodegenResult<String> {
        self.spec
            .resolve_reference(&owner.type_name, target)
            .ok_or_else(|| {
                stratus_core::Error::UnresolvedReference {
                    type_name: owner_name.to_string(),
                    property: property_name.to_string(),
                    target: target.to_string(),
                }
                .into()
            })
    }

    /// Path to `target` as seen from the owner's module
    fn type_path(&self, owner: &TypeLocation, target_name: &str) -> String {
        let target = &self.locations[target_name];
        if target.module == owner.module {
            target.struct_name.clone()
        } else {
            format!("super::{}::{}", target.module, target.struct_name)
        }
    }

    /// Returns true if `from` leads back to `to` through directly nested (non-collection) fields
    fn reaches(&self, from: &str, to: &str) -> bool {
        let mut stack = vec![from.to_string()];
        let mut visited = HashSet::new();

        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            let (Some(location), Some(spec)) = (
                self.locations.get(&current),
                self.spec.property_types.get(&current),
            ) else {
                continue;
            };
            let alias = spec.alias_shape(&current).ok().flatten();
            let shapes = spec
                .properties
                .iter()
                .filter_map(|(property_name, property)| property.shape(&current, property_name).ok())
                .chain(alias);
            for shape in shapes {
                if let PropertyShape::Named(target) = shape
                    && let Some(next) = self.spec.resolve_reference(&location.type_name, target)
                {
                    stack.push(next);
                }
            }
        }
        false
    }

    fn is_alias(&self, full_name: &str) -> bool {
        self.spec
            .property_types
            .get(full_name)
            .is_some_and(|spec| spec.is_alias())
    }

    fn generate_mod_rs(&self, by_module: &BTreeMap<&str, Vec<&str>>) -> String {
        let mut property_entries = Vec::new();
        let mut resource_entries = Vec::new();
        let mut has_property_impls = false;
        for (module, type_names) in by_module {
            for full_name in type_names {
                let location = &self.locations[*full_name];
                // Aliases have no trait impl to read the name from
                if self.is_alias(full_name) {
                    property_entries.push(format!("        {:?},\n", full_name));
                    continue;
                }
                let entry = format!(
                    "        {}::{}::AWS_CLOUDFORMATION_TYPE,\n",
                    module, location.struct_name
                );
                if location.type_name.is_property_type() {
                    has_property_impls = true;
                    property_entries.push(entry);
                } else {
                    resource_entries.push(entry);
                }
            }
        }

        let mut core_imports = Vec::new();
        if has_property_impls {
            core_imports.push("PropertyType");
        }
        if !resource_entries.is_empty() {
            core_imports.push("ResourceType");
        }

        let mut code = format!(
            r#"//! Auto-generated CloudFormation resource and property types
//!
//! Generated from CloudFormation resource specification {}
//!
//! DO NOT EDIT MANUALLY - regenerate with stratus-codegen

{}
"#,
            self.spec.resource_specification_version,
            use_statement("stratus_core", &core_imports)
        );

        for module in by_module.keys() {
            code.push_str(&format!("pub mod {};\n", module));
        }

        code.push_str(&format!(
            r#"
/// Version of the resource specification these types were generated from
pub const SPECIFICATION_VERSION: &str = {:?};

/// Returns the CloudFormation type names of all generated property types
pub fn property_type_names() -> Vec<&'static str> {{
    vec![
"#,
            self.spec.resource_specification_version
        ));

        for entry in &property_entries {
            code.push_str(entry);
        }
        code.push_str(
            r#"    ]
}

/// Returns the CloudFormation type names of all generated resource types
pub fn resource_type_names() -> Vec<&'static str> {
    vec![
"#,
        );
        for entry in &resource_entries {
            code.push_str(entry);
        }
        code.push_str("    ]\n}\n");
        code
    }
}

fn primitive_rust_type(primitive: PrimitiveType) -> &'static str {
    match primitive {
        PrimitiveType::String | PrimitiveType::Timestamp => "String",
        PrimitiveType::Long | PrimitiveType::Integer => "i64",
        PrimitiveType::Double => "f64",
        PrimitiveType::Boolean => "bool",
        PrimitiveType::Json => "StringOrJson",
    }
}

fn use_statement(krate: &str, items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [single] => format!("use {}::{};\n", krate, single),
        _ => format!("use {}::{{{}}};\n", krate, items.join(", ")),
    }
}

fn sanitize_doc(doc: &str) -> String {
    doc.replace(['\n', '\r'], " ").trim().to_string()
}
