//! HAX editor schema
//!
//! Describes the widget to page editors: what it is, which settings can be
//! configured, and a demo instance.

use crate::counter::{CounterApp, COUNT, DEFAULT_COUNT, DEFAULT_MAX, DEFAULT_MIN, MAX, MIN};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HaxProperties {
    pub can_scale: bool,
    pub can_edit_source: bool,
    pub gizmo: Gizmo,
    pub settings: Settings,
    pub demo_schema: Vec<DemoElement>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Gizmo {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Settings {
    pub configure: Vec<Setting>,
    pub advanced: Vec<Setting>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub property: String,
    pub title: String,
    pub description: String,
    pub input_method: InputMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    Number,
    Textfield,
    Boolean,
}

#[derive(Clone, Debug, Serialize)]
pub struct DemoElement {
    pub tag: String,
    pub properties: BTreeMap<String, i32>,
    pub content: String,
}

fn number(property: &str, title: &str, description: &str) -> Setting {
    Setting {
        property: property.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        input_method: InputMethod::Number,
    }
}

impl HaxProperties {
    pub fn for_counter() -> Self {
        let properties = [(COUNT, DEFAULT_COUNT), (MIN, DEFAULT_MIN), (MAX, DEFAULT_MAX)]
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        Self {
            can_scale: true,
            can_edit_source: true,
            gizmo: Gizmo {
                title: "Counter app".to_string(),
                description: "A bounded counter with increment and decrement buttons"
                    .to_string(),
                icon: "icons:add-circle-outline".to_string(),
                color: "purple".to_string(),
                tags: vec!["Other".to_string(), "counter".to_string()],
            },
            settings: Settings {
                configure: vec![
                    number(COUNT, "Count", "Current value"),
                    number(MIN, "Minimum", "Lowest reachable value"),
                    number(MAX, "Maximum", "Highest reachable value"),
                ],
                advanced: Vec::new(),
            },
            demo_schema: vec![DemoElement {
                tag: CounterApp::TAG.to_string(),
                properties,
                content: String::new(),
            }],
        }
    }
}

pub fn to_json(properties: &HaxProperties) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(properties)?)
}
