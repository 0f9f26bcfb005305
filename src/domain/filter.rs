use crate::domain::board::PropertyTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the clauses of a filter group combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperation {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCondition {
    Includes,
    NotIncludes,
    IsEmpty,
    IsNotEmpty,
}

/// A single `property <condition> values` test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub property_id: String,
    pub condition: FilterCondition,
    #[serde(default)]
    pub values: Vec<String>,
}

impl FilterClause {
    pub fn new(
        property_id: impl Into<String>,
        condition: FilterCondition,
        values: Vec<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            condition,
            values,
        }
    }

    /// The value a new card needs for this clause to hold, if any
    fn satisfying_value(&self, templates: &[PropertyTemplate]) -> Option<String> {
        let template = templates.iter().find(|t| t.id == self.property_id)?;

        match self.condition {
            FilterCondition::Includes => self.values.first().cloned(),
            FilterCondition::NotIncludes => {
                if self.values.is_empty() || !template.is_select() {
                    return None;
                }
                template
                    .options
                    .iter()
                    .find(|o| !self.values.contains(&o.id))
                    .map(|o| o.id.clone())
            }
            FilterCondition::IsEmpty => None,
            FilterCondition::IsNotEmpty => {
                if template.is_select() {
                    template.options.first().map(|o| o.id.clone())
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterEntry {
    Clause(FilterClause),
    Group(FilterGroup),
}

/// Filter expression attached to a view.
///
/// Evaluating a filter against cards belongs to the board model; this crate
/// only derives values that new cards need to stay visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(default)]
    pub operation: FilterOperation,
    #[serde(default)]
    pub filters: Vec<FilterEntry>,
}

impl FilterGroup {
    pub fn new(operation: FilterOperation, clauses: Vec<FilterClause>) -> Self {
        Self {
            operation,
            filters: clauses.into_iter().map(FilterEntry::Clause).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    fn clauses(&self) -> impl Iterator<Item = &FilterClause> {
        self.filters.iter().filter_map(|entry| match entry {
            FilterEntry::Clause(clause) => Some(clause),
            FilterEntry::Group(_) => None,
        })
    }

    /// Property values that make a new card pass this filter.
    ///
    /// Nested groups are not considered. For `Or` only the first clause
    /// needs to hold.
    pub fn properties_that_meet(&self, templates: &[PropertyTemplate]) -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();
        let mut clauses = self.clauses();

        let selected: Vec<&FilterClause> = match self.operation {
            FilterOperation::Or => clauses.next().into_iter().collect(),
            FilterOperation::And => clauses.collect(),
        };

        for clause in selected {
            if let Some(value) = clause.satisfying_value(templates) {
                properties.insert(clause.property_id.clone(), value);
            }
        }

        properties
    }
}
