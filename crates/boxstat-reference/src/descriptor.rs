use serde::Serialize;

/// Display descriptor shared by all reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub code: String,
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

/// A reference table entry that can describe itself for display.
pub trait Describe {
    fn describe(&self) -> Descriptor;
}
