use crate::catalog::{Catalog, Function};
use crate::statement::{Control, ControlSpec, Statement, StatementBody, StatementId};
use std::cmp::Ordering;
use tracing::debug;

/// Which side of the main loop a sort applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortScope {
    Inside,
    Outside,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    AlphabeticalAsc,
    AlphabeticalDesc,
    ByCategory,
    RemoveDisabled,
}

/// Field-level update merged into an existing statement. Fields that do not apply to the
/// statement's variant are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementPatch {
    pub enabled: Option<bool>,
    pub in_main_loop: Option<bool>,
    pub parameters: Vec<(String, String)>,
    pub condition: Option<String>,
    pub loop_variable: Option<String>,
    pub start_value: Option<String>,
    pub end_value: Option<String>,
    pub step_value: Option<String>,
    pub function_name: Option<String>,
    pub function_params: Option<String>,
    pub function_body: Option<String>,
    pub notes: Option<String>,
}

impl StatementPatch {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn in_main_loop(inside: bool) -> Self {
        Self {
            in_main_loop: Some(inside),
            ..Self::default()
        }
    }

    pub fn parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameters: vec![(name.into(), value.into())],
            ..Self::default()
        }
    }

    pub fn condition(condition: impl Into<String>) -> Self {
        Self {
            condition: Some(condition.into()),
            ..Self::default()
        }
    }

    fn apply(self, statement: &mut Statement) {
        if let Some(enabled) = self.enabled {
            statement.enabled = enabled;
        }
        if let Some(inside) = self.in_main_loop {
            statement.set_in_main_loop(inside);
        }
        if let Some(notes) = self.notes {
            statement.notes = Some(notes);
        }
        match &mut statement.body {
            StatementBody::Call(call) => {
                for (name, value) in self.parameters {
                    if let Some(param) = call.parameters.iter_mut().find(|p| p.name == name) {
                        param.value = value;
                    }
                }
            }
            StatementBody::Control(control) => match control {
                Control::If { condition } | Control::While { condition } => {
                    if let Some(new) = self.condition {
                        *condition = new;
                    }
                }
                Control::For {
                    loop_variable,
                    start_value,
                    end_value,
                    step_value,
                } => {
                    merge(loop_variable, self.loop_variable);
                    merge(start_value, self.start_value);
                    merge(end_value, self.end_value);
                    merge(step_value, self.step_value);
                }
                Control::Function(decl) => {
                    merge(&mut decl.name, self.function_name);
                    merge(&mut decl.params, self.function_params);
                    if let Some(body) = self.function_body {
                        decl.body = if body.trim().is_empty() { None } else { Some(body) };
                    }
                }
                Control::End => {}
            },
        }
    }
}

fn merge(field: &mut String, update: Option<String>) {
    if let Some(value) = update {
        *field = value;
    }
}

/// The user's program: an owned, ordered statement list. Every successful mutation bumps
/// `version`.
#[derive(Debug, Clone, Default)]
pub struct StatementList {
    statements: Vec<Statement>,
    version: u64,
    next_id: u64,
}

impl StatementList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a loaded list. New ids continue after the highest `statement-<n>` already present.
    pub fn from_statements(statements: Vec<Statement>) -> Self {
        let next_id = statements
            .iter()
            .filter_map(|s| s.id.counter())
            .max()
            .map_or(0, |n| n + 1);
        Self {
            statements,
            version: 0,
            next_id,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, id: &StatementId) -> Option<&Statement> {
        self.statements.iter().find(|s| &s.id == id)
    }

    pub fn position(&self, id: &StatementId) -> Option<usize> {
        self.statements.iter().position(|s| &s.id == id)
    }

    fn allocate_id(&mut self) -> StatementId {
        loop {
            let id = StatementId::from_counter(self.next_id);
            self.next_id += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Appends a call to `function` inside the main loop with parameters at their defaults.
    pub fn add(&mut self, function: &Function) -> StatementId {
        let id = self.allocate_id();
        self.statements.push(Statement::call(id.clone(), function));
        self.touch();
        debug!(id = %id, function = %function.name, "added call statement");
        id
    }

    /// Inserts a call right after `anchor`; an unknown anchor appends.
    pub fn add_after(&mut self, anchor: &StatementId, function: &Function) -> StatementId {
        let Some(index) = self.position(anchor) else {
            return self.add(function);
        };
        let id = self.allocate_id();
        self.statements
            .insert(index + 1, Statement::call(id.clone(), function));
        self.touch();
        debug!(id = %id, anchor = %anchor, function = %function.name, "inserted call statement");
        id
    }

    /// Resolves a drag payload against the catalog. A lookup miss adds nothing.
    pub fn add_from_catalog(
        &mut self,
        catalog: &Catalog,
        category: &str,
        name: &str,
    ) -> Option<StatementId> {
        let Some(function) = catalog.function_in(category, name) else {
            debug!(category, name, "catalog lookup missed, nothing added");
            return None;
        };
        Some(self.add(function))
    }

    /// Appends a control statement. Specs with blank required fields add nothing.
    pub fn add_control(&mut self, spec: ControlSpec) -> Option<StatementId> {
        let (control, in_main_loop) = spec.into_control()?;
        let id = self.allocate_id();
        let keyword = control.keyword();
        self.statements
            .push(Statement::control(id.clone(), control, in_main_loop));
        self.touch();
        debug!(id = %id, keyword, "added control statement");
        Some(id)
    }

    pub fn update(&mut self, id: &StatementId, patch: StatementPatch) -> bool {
        let Some(statement) = self.statements.iter_mut().find(|s| &s.id == id) else {
            return false;
        };
        patch.apply(statement);
        self.touch();
        true
    }

    pub fn remove(&mut self, id: &StatementId) -> Option<Statement> {
        let index = self.position(id)?;
        let removed = self.statements.remove(index);
        self.touch();
        debug!(id = %id, "removed statement");
        Some(removed)
    }

    /// Moves the statement at `from` to `to`, shifting the ones in between.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.statements.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let statement = self.statements.remove(from);
            self.statements.insert(to, statement);
            self.touch();
        }
        true
    }

    /// Drag-and-drop reorder: moves `active` to the slot currently held by `over`.
    pub fn move_statement(&mut self, active: &StatementId, over: &StatementId) -> bool {
        match (self.position(active), self.position(over)) {
            (Some(from), Some(to)) => self.reorder(from, to),
            _ => false,
        }
    }

    pub fn sort(&mut self, scope: SortScope, mode: SortMode) {
        if mode == SortMode::RemoveDisabled {
            let before = self.statements.len();
            self.statements.retain(|s| s.enabled);
            let removed = before - self.statements.len();
            debug!(removed, "removed disabled statements");
            if removed > 0 {
                self.touch();
            }
            return;
        }
        match scope {
            SortScope::Inside => self.sort_partition(true, mode),
            SortScope::Outside => self.sort_partition(false, mode),
            SortScope::All => {
                self.sort_partition(true, mode);
                self.sort_partition(false, mode);
            }
        }
        self.touch();
    }

    /// Sorts one side of the loop in place, reusing the slots that side already occupies.
    fn sort_partition(&mut self, inside: bool, mode: SortMode) {
        let slots = self
            .statements
            .iter()
            .enumerate()
            .filter(|(_, s)| s.in_main_loop() == inside)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        let members = slots
            .iter()
            .map(|&i| self.statements[i].clone())
            .collect::<Vec<_>>();
        let sorted = order_statements(members, mode);
        for (slot, statement) in slots.into_iter().zip(sorted) {
            self.statements[slot] = statement;
        }
    }
}

fn compare_keys(a: &Statement, b: &Statement) -> Ordering {
    let (ka, kb) = (a.sort_key(), b.sort_key());
    ka.to_lowercase()
        .cmp(&kb.to_lowercase())
        .then_with(|| ka.cmp(kb))
}

fn order_statements(mut statements: Vec<Statement>, mode: SortMode) -> Vec<Statement> {
    match mode {
        SortMode::AlphabeticalAsc => {
            statements.sort_by(compare_keys);
            statements
        }
        SortMode::AlphabeticalDesc => {
            statements.sort_by(|a, b| compare_keys(b, a));
            statements
        }
        SortMode::ByCategory => {
            let mut groups: Vec<(String, Vec<Statement>)> = Vec::new();
            let mut controls = Vec::new();
            for statement in statements {
                let group = match &statement.body {
                    StatementBody::Control(_) => {
                        controls.push(statement);
                        continue;
                    }
                    StatementBody::Call(call) => match &call.function.category {
                        Some(category) => category.clone(),
                        None => call
                            .function
                            .name
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().collect())
                            .unwrap_or_default(),
                    },
                };
                match groups.iter_mut().find(|(name, _)| *name == group) {
                    Some((_, members)) => members.push(statement),
                    None => groups.push((group, vec![statement])),
                }
            }
            groups
                .into_iter()
                .flat_map(|(_, members)| members)
                .chain(controls)
                .collect()
        }
        SortMode::RemoveDisabled => statements,
    }
}
