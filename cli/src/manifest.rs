//! TOML interface description.
//!
//! The manifest is a serialized overload registry, not a native header:
//! declaration parsing stays outside this tool. Loading converts the
//! declarations into `interface` registrations in file order, so the
//! manifest order is the dispatch order.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;

use interface::{
    is_basic_type, Argument, ArgumentList, Class, Module, ReturnSlot, ReturnValue,
};

#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Name of the generated boundary function, shared by every proxy call.
    pub wrapper: String,
    /// `using namespace` lines for the generated translation unit.
    #[serde(default)]
    pub using: Vec<String>,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

#[derive(Debug, Deserialize)]
pub struct ClassDecl {
    /// Qualified C++ class name, e.g. `gtsam::Point3`.
    pub cpp: String,
    /// MATLAB-visible class name.
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub args: Vec<ArgDecl>,
    /// 0, 1, or 2 return slots; more is rejected at load time.
    #[serde(default)]
    pub returns: Vec<SlotDecl>,
}

#[derive(Debug, Deserialize)]
pub struct ArgDecl {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SlotDecl {
    #[serde(rename = "type")]
    pub ty: String,
    /// `"basic"` or `"class"`; inferred from the type when omitted.
    pub category: Option<String>,
}

fn slot(decl: &SlotDecl, method: &str) -> Result<ReturnSlot> {
    match decl.category.as_deref() {
        Some("basic") => Ok(ReturnSlot::basic(&decl.ty)),
        Some("class") => Ok(ReturnSlot::class(&decl.ty)),
        Some(other) => bail!(
            "method `{method}`: unknown return category `{other}` (expected `basic` or `class`)"
        ),
        None if is_basic_type(&decl.ty) => Ok(ReturnSlot::basic(&decl.ty)),
        None => Ok(ReturnSlot::class(&decl.ty)),
    }
}

fn return_value(decls: &[SlotDecl], method: &str) -> Result<ReturnValue> {
    match decls {
        [] => Ok(ReturnValue::Void),
        [single] => Ok(ReturnValue::Single(slot(single, method)?)),
        [first, second] => Ok(ReturnValue::Pair(
            slot(first, method)?,
            slot(second, method)?,
        )),
        _ => bail!("method `{method}`: at most two return values are supported"),
    }
}

impl Manifest {
    pub fn into_module(self) -> Result<Module> {
        let mut module = Module::new(&self.wrapper);
        module.using_namespaces = self.using;
        for class_decl in &self.classes {
            let mut class = Class::new(&class_decl.cpp, &class_decl.name);
            for method in &class_decl.methods {
                let args = ArgumentList::new(
                    method
                        .args
                        .iter()
                        .map(|a| Argument::new(&a.ty, &a.name))
                        .collect(),
                );
                let ret = return_value(&method.returns, &method.name)?;
                class.methods.register(&method.name, args, ret);
            }
            module.classes.push(class);
        }
        Ok(module)
    }
}

/// Read and convert an interface description file.
pub fn load(path: &str) -> Result<Module> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read interface description `{path}`"))?;
    let manifest: Manifest = toml::from_str(&text)
        .with_context(|| format!("failed to parse interface description `{path}`"))?;
    if manifest.wrapper.is_empty() {
        bail!("`wrapper` must name the generated boundary function");
    }
    manifest.into_module()
}
