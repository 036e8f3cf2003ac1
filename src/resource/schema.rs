use serde::Serialize;
use serde_json::Value;

/// Value kind of an attribute
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int,
    Set(Vec<Attribute>),
}

/// One attribute of a resource schema
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
    pub computed: bool,
    pub force_new: bool,
}

impl Attribute {
    /// Required string; changing it replaces the resource
    pub fn required_string_force_new(name: &'static str) -> Self {
        Attribute {
            name,
            kind: AttributeKind::String,
            required: true,
            computed: false,
            force_new: true,
        }
    }

    /// Server-populated string
    pub fn computed_string(name: &'static str) -> Self {
        Attribute {
            name,
            kind: AttributeKind::String,
            required: false,
            computed: true,
            force_new: false,
        }
    }

    /// Server-populated integer
    pub fn computed_int(name: &'static str) -> Self {
        Attribute {
            kind: AttributeKind::Int,
            ..Attribute::computed_string(name)
        }
    }

    /// Server-populated set of nested objects
    pub fn computed_set(name: &'static str, elem: Vec<Attribute>) -> Self {
        Attribute {
            kind: AttributeKind::Set(elem),
            ..Attribute::computed_string(name)
        }
    }
}

/// Declared attributes of a resource type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Top level attributes; `id` is implicit
    pub attributes: Vec<Attribute>,
}

impl Schema {
    /// Looks up a top level attribute
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Required attributes that are missing or empty in `attributes`
    pub fn missing_required(&self, attributes: &Value) -> Vec<&'static str> {
        self.attributes
            .iter()
            .filter(|a| a.required)
            .filter(|a| match attributes.get(a.name) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            })
            .map(|a| a.name)
            .collect()
    }

    /// Force-new attributes whose values differ between two attribute bags
    pub fn force_new_changes(&self, prior: &Value, proposed: &Value) -> Vec<&'static str> {
        self.attributes
            .iter()
            .filter(|a| a.force_new)
            .filter(|a| prior.get(a.name) != proposed.get(a.name))
            .map(|a| a.name)
            .collect()
    }
}
