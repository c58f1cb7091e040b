use crate::api_table::API_TABLE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The primitive tags a parameter type can mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Boolean,
    Number,
    String,
    Table,
}

impl TypeTag {
    fn keyword(self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Table => "table",
        }
    }
}

/// Declared parameter type as written in the catalog, e.g. `number`, `table|number` or `WPOINT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamType(String);

impl ParamType {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when any `|`-separated component of the type names `tag`.
    pub fn mentions(&self, tag: TypeTag) -> bool {
        self.0
            .split('|')
            .any(|part| part.trim().eq_ignore_ascii_case(tag.keyword()))
    }
}

impl Display for ParamType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: ParamType,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub return_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub functions: Vec<Function>,
}

/// Read-only registry of callable API functions, grouped by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

pub(crate) struct ParamDef {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

pub(crate) struct FunctionDef {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamDef],
    pub return_type: &'static str,
    pub return_description: &'static str,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|mut category| {
                for function in &mut category.functions {
                    if function.category.is_none() {
                        function.category = Some(category.name.clone());
                    }
                }
                category
            })
            .collect();
        Self { categories }
    }

    /// The API table shipped with the editor.
    pub fn builtin() -> Self {
        let categories = API_TABLE
            .iter()
            .map(|(name, functions)| Category {
                name: name.to_string(),
                functions: functions.iter().map(|def| def.to_function(name)).collect(),
            })
            .collect();
        Self::new(categories)
    }

    /// Load a catalog from a JSON array of categories.
    pub fn from_json(source: &str) -> Result<Self> {
        let categories: Vec<Category> =
            serde_json::from_str(source).context("Failed to parse catalog JSON.")?;
        Ok(Self::new(categories))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Finds a function by name across all categories.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.categories
            .iter()
            .flat_map(|c| c.functions.iter())
            .find(|f| f.name == name)
    }

    pub fn function_in(&self, category: &str, name: &str) -> Option<&Function> {
        self.category(category)?
            .functions
            .iter()
            .find(|f| f.name == name)
    }

    /// Case-insensitive match against function names and descriptions.
    /// Categories left without matches are dropped.
    pub fn search(&self, term: &str) -> Vec<Category> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.categories.clone();
        }
        self.categories
            .iter()
            .filter_map(|category| {
                let functions = category
                    .functions
                    .iter()
                    .filter(|f| {
                        f.name.to_lowercase().contains(&needle)
                            || f.description.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect::<Vec<_>>();
                if functions.is_empty() {
                    None
                } else {
                    Some(Category {
                        name: category.name.clone(),
                        functions,
                    })
                }
            })
            .collect()
    }

    pub fn function_count(&self) -> usize {
        self.categories.iter().map(|c| c.functions.len()).sum()
    }
}

impl FunctionDef {
    fn to_function(&self, category: &str) -> Function {
        Function {
            name: self.name.to_string(),
            description: self.description.to_string(),
            parameters: self
                .params
                .iter()
                .map(|p| Parameter {
                    name: p.name.to_string(),
                    typ: ParamType::new(p.typ),
                    description: p.description.to_string(),
                    default_value: p.default.map(str::to_string),
                })
                .collect(),
            return_type: self.return_type.to_string(),
            return_description: self.return_description.to_string(),
            category: Some(category.to_string()),
        }
    }
}

/// Renders a function signature, e.g. `Sleep_tick(count) -> boolean`.
pub fn signature(function: &Function) -> String {
    let params = function
        .parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({}) -> {}", function.name, params, function.return_type)
}
