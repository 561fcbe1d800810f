use crate::Rating;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStory {
    /// Caller-assigned code (e.g. `STORY-001`), also the dependency key.
    pub id: String,
    /// "As a ..., I want to ... so that ..." narrative.
    pub story: String,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    /// None when the generator omitted it; no priority is sent then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_value: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_impact: Option<Rating>,
    /// Ids of other stories in the same graph this story depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl UserStory {
    pub fn new(id: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            story: story.into(),
            acceptance_criteria: Vec::new(),
            business_value: None,
            risk_impact: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_acceptance_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acceptance_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_business_value(mut self, value: Rating) -> Self {
        self.business_value = Some(value);
        self
    }

    pub fn with_risk_impact(mut self, risk: Rating) -> Self {
        self.risk_impact = Some(risk);
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn depends_on_itself(&self) -> bool {
        self.dependencies.iter().any(|dep| dep == &self.id)
    }
}
