use crate::tests::checkout_graph;
use crate::{BacklogGraph, GenerationError, Rating};

#[test]
fn test_from_generated_json_parses_generator_shape() {
    let text = r#"
        [
          {
            "epic": "Checkout",
            "epic_description": "Let shoppers pay",
            "features": [
              {
                "feature": "Cart",
                "feature_description": "Hold items",
                "user_stories": [
                  {
                    "id": "STORY-001",
                    "story": "As a shopper, I want to add items so that I can buy them",
                    "acceptance_criteria": ["Item appears in cart"],
                    "business_value": "High",
                    "risk_impact": "Low",
                    "dependencies": []
                  },
                  {
                    "id": "STORY-002",
                    "story": "As a shopper, I want to see totals",
                    "acceptance_criteria": [],
                    "business_value": "Medium",
                    "risk_impact": "Medium",
                    "dependencies": ["STORY-001"]
                  }
                ]
              }
            ]
          }
        ]
    "#;

    let graph = BacklogGraph::from_generated_json(text).unwrap();

    assert_eq!(graph.epics.len(), 1);
    let story = graph.find_story("STORY-001").unwrap();
    assert_eq!(story.business_value, Some(Rating::High));
    assert_eq!(story.risk_impact, Some(Rating::Low));
    assert_eq!(
        graph.find_story("STORY-002").unwrap().dependencies,
        vec!["STORY-001".to_string()]
    );
}

#[test]
fn test_from_generated_json_defaults_missing_dependencies() {
    let text = r#"[{"epic":"E","epic_description":"d","features":[{"feature":"F","feature_description":"d","user_stories":[{"id":"S1","story":"s","acceptance_criteria":[],"business_value":"Low","risk_impact":"Low"}]}]}]"#;

    let graph = BacklogGraph::from_generated_json(text).unwrap();
    assert!(graph.find_story("S1").unwrap().dependencies.is_empty());
}

#[test]
fn test_from_generated_json_leaves_missing_ratings_unset() {
    let text = r#"[{"epic":"E","epic_description":"d","features":[{"feature":"F","feature_description":"d","user_stories":[{"id":"S1","story":"As a user","acceptance_criteria":["a"]}]}]}]"#;

    let graph = BacklogGraph::from_generated_json(text).unwrap();

    let story = graph.find_story("S1").unwrap();
    assert_eq!(story.business_value, None);
    assert_eq!(story.risk_impact, None);

    let json = serde_json::to_value(&graph).unwrap();
    let story_json = &json[0]["features"][0]["user_stories"][0];
    assert!(story_json.get("business_value").is_none());
    assert!(story_json.get("risk_impact").is_none());
}

#[test]
fn test_from_generated_json_rejects_malformed_output() {
    let result = BacklogGraph::from_generated_json("{\"epic\": \"not an array\"}");
    assert!(matches!(
        result,
        Err(GenerationError::MalformedOutput { .. })
    ));
}

#[test]
fn test_counts_for_checkout_graph() {
    let counts = checkout_graph().counts();
    assert_eq!(counts.epics, 1);
    assert_eq!(counts.features, 1);
    assert_eq!(counts.stories, 2);
    assert_eq!(counts.dependency_edges, 1);
    assert_eq!(counts.work_items(), 4);
    assert_eq!(counts.parent_links(), 3);
}

#[test]
fn test_stories_iterates_in_export_order() {
    let ids: Vec<_> = checkout_graph().stories().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec!["S1", "S2"]);
}

#[test]
fn test_graph_serializes_as_bare_array() {
    let json = serde_json::to_value(checkout_graph()).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["epic"], "Checkout");
    assert_eq!(json[0]["features"][0]["user_stories"][1]["dependencies"][0], "S1");
}
