use crate::catalog::{Function, ParamType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementId(String);

impl StatementId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub(crate) fn from_counter(n: u64) -> Self {
        Self(format!("statement-{}", n))
    }

    /// The `n` of a `statement-<n>` id, if it has that shape.
    pub(crate) fn counter(&self) -> Option<u64> {
        self.0.strip_prefix("statement-")?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StatementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The catalog fields a call statement keeps after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: ParamType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub function: FunctionRef,
    #[serde(default)]
    pub parameters: Vec<StatementParameter>,
}

impl FunctionCall {
    pub fn from_function(function: &Function) -> Self {
        Self {
            function: FunctionRef {
                name: function.name.clone(),
                description: function.description.clone(),
                category: function.category.clone(),
            },
            parameters: function
                .parameters
                .iter()
                .map(|p| StatementParameter {
                    name: p.name.clone(),
                    typ: p.typ.clone(),
                    description: p.description.clone(),
                    value: p.default_value.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub params: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    If {
        condition: String,
    },
    While {
        condition: String,
    },
    #[serde(rename_all = "camelCase")]
    For {
        loop_variable: String,
        start_value: String,
        end_value: String,
        #[serde(default = "default_step")]
        step_value: String,
    },
    End,
    Function(FunctionDecl),
}

fn default_step() -> String {
    "1".to_string()
}

impl Control {
    pub fn keyword(&self) -> &'static str {
        match self {
            Control::If { .. } => "if",
            Control::While { .. } => "while",
            Control::For { .. } => "for",
            Control::End => "end",
            Control::Function(_) => "function",
        }
    }

    /// if/while/for open a block that a later `end` statement closes.
    pub fn opens_block(&self) -> bool {
        matches!(self, Control::If { .. } | Control::While { .. } | Control::For { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatementBody {
    Call(FunctionCall),
    Control(Control),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub id: StatementId,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    in_main_loop: bool,
    pub body: StatementBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Statement {
    pub fn new(id: StatementId, body: StatementBody, in_main_loop: bool) -> Self {
        let mut statement = Self {
            id,
            enabled: true,
            in_main_loop,
            body,
            notes: None,
        };
        statement.set_in_main_loop(in_main_loop);
        statement
    }

    pub fn call(id: StatementId, function: &Function) -> Self {
        Self::new(id, StatementBody::Call(FunctionCall::from_function(function)), true)
    }

    pub fn control(id: StatementId, control: Control, in_main_loop: bool) -> Self {
        Self::new(id, StatementBody::Control(control), in_main_loop)
    }

    /// Function declarations always live outside the main loop.
    pub fn in_main_loop(&self) -> bool {
        self.in_main_loop && !self.is_declaration()
    }

    pub fn set_in_main_loop(&mut self, inside: bool) {
        self.in_main_loop = inside && !self.is_declaration();
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.body, StatementBody::Control(Control::Function(_)))
    }

    pub fn as_call(&self) -> Option<&FunctionCall> {
        match &self.body {
            StatementBody::Call(call) => Some(call),
            StatementBody::Control(_) => None,
        }
    }

    pub fn as_control(&self) -> Option<&Control> {
        match &self.body {
            StatementBody::Control(control) => Some(control),
            StatementBody::Call(_) => None,
        }
    }

    /// Function name for calls, control keyword otherwise.
    pub fn sort_key(&self) -> &str {
        match &self.body {
            StatementBody::Call(call) => &call.function.name,
            StatementBody::Control(control) => control.keyword(),
        }
    }

    /// One-line summary as shown on the editor card.
    pub fn label(&self) -> String {
        match &self.body {
            StatementBody::Call(call) => {
                let values = call
                    .parameters
                    .iter()
                    .map(|p| if p.value.is_empty() { "nil" } else { p.value.as_str() })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", call.function.name, values)
            }
            StatementBody::Control(control) => match control {
                Control::If { condition } => format!("if {} then", condition),
                Control::While { condition } => format!("while {} do", condition),
                Control::For {
                    loop_variable,
                    start_value,
                    end_value,
                    step_value,
                } => format!(
                    "for {} = {}, {}{} do",
                    loop_variable,
                    start_value,
                    end_value,
                    step_clause(step_value)
                ),
                Control::Function(decl) => format!("function {}({})", decl.name, decl.params),
                Control::End => "end".to_string(),
            },
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub(crate) fn step_clause(step: &str) -> String {
    if step == "1" {
        String::new()
    } else {
        format!(", {}", step)
    }
}

/// Payload of the "add control statement" dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlSpec {
    If {
        condition: String,
        in_main_loop: bool,
    },
    While {
        condition: String,
        in_main_loop: bool,
    },
    For {
        loop_variable: String,
        start_value: String,
        end_value: String,
        step_value: String,
        in_main_loop: bool,
    },
    End {
        in_main_loop: bool,
    },
    Function {
        name: String,
        params: String,
        body: String,
    },
}

impl ControlSpec {
    /// Builds the control statement, or `None` when a required field is blank.
    pub fn into_control(self) -> Option<(Control, bool)> {
        match self {
            ControlSpec::If {
                condition,
                in_main_loop,
            } => (!is_blank(&condition)).then_some((Control::If { condition }, in_main_loop)),
            ControlSpec::While {
                condition,
                in_main_loop,
            } => (!is_blank(&condition)).then_some((Control::While { condition }, in_main_loop)),
            ControlSpec::For {
                loop_variable,
                start_value,
                end_value,
                step_value,
                in_main_loop,
            } => {
                if is_blank(&loop_variable) || is_blank(&start_value) || is_blank(&end_value) {
                    return None;
                }
                let step_value = if is_blank(&step_value) {
                    default_step()
                } else {
                    step_value
                };
                Some((
                    Control::For {
                        loop_variable,
                        start_value,
                        end_value,
                        step_value,
                    },
                    in_main_loop,
                ))
            }
            ControlSpec::End { in_main_loop } => Some((Control::End, in_main_loop)),
            ControlSpec::Function { name, params, body } => {
                if is_blank(&name) {
                    return None;
                }
                let body = if body.trim().is_empty() { None } else { Some(body) };
                Some((Control::Function(FunctionDecl { name, params, body }), false))
            }
        }
    }
}
