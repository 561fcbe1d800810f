use spo_core::{Epic, Feature, Rating, UserStory};

/// Optional fields sent alongside the title when a work item is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkItemDetails {
    pub description: Option<String>,
    pub acceptance_criteria: Option<Vec<String>>,
    pub business_value: Option<Rating>,
    pub risk_impact: Option<Rating>,
}

impl WorkItemDetails {
    pub fn for_epic(epic: &Epic) -> Self {
        Self {
            description: Some(epic.epic_description.clone()),
            ..Self::default()
        }
    }

    pub fn for_feature(feature: &Feature) -> Self {
        Self {
            description: Some(feature.feature_description.clone()),
            ..Self::default()
        }
    }

    /// Stories carry no description of their own; the narrative is the title.
    pub fn for_story(story: &UserStory) -> Self {
        Self {
            description: None,
            acceptance_criteria: Some(story.acceptance_criteria.clone()),
            business_value: story.business_value.clone(),
            risk_impact: story.risk_impact.clone(),
        }
    }

    /// `<p>description</p>` followed by the risk/impact line, or None when
    /// neither is present.
    pub fn rendered_description(&self) -> Option<String> {
        let mut html = String::new();

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            html.push_str(&format!("<p>{description}</p>"));
        }
        if let Some(risk) = self.risk_impact.as_ref().filter(|r| !r.as_str().is_empty()) {
            html.push_str(&format!("<br><b>Risk/Impact:</b> {risk}"));
        }

        (!html.is_empty()).then_some(html)
    }

    pub fn rendered_acceptance_criteria(&self) -> Option<String> {
        self.acceptance_criteria.as_ref().map(|criteria| {
            let items: String = criteria.iter().map(|ac| format!("<li>{ac}</li>")).collect();
            format!("<ul>{items}</ul>")
        })
    }

    pub fn priority(&self) -> Option<u8> {
        self.business_value
            .as_ref()
            .filter(|value| !value.as_str().is_empty())
            .map(Rating::priority)
    }
}
