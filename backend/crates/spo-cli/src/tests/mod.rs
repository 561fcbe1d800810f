
use std::path::Path;

pub(crate) const CHECKOUT_JSON: &str = r#"[
  {
    "epic": "Checkout",
    "epic_description": "Let shoppers pay",
    "features": [
      {
        "feature": "Cart",
        "feature_description": "Hold items before purchase",
        "user_stories": [
          {
            "id": "S1",
            "story": "As a shopper, I want to add items",
            "acceptance_criteria": ["Item appears in cart"],
            "business_value": "High",
            "risk_impact": "Low",
            "dependencies": []
          },
          {
            "id": "S2",
            "story": "As a shopper, I want to remove items",
            "acceptance_criteria": [],
            "business_value": "Medium",
            "risk_impact": "Medium",
            "dependencies": ["S1", "S99"]
          }
        ]
      }
    ]
  }
]"#;

pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
