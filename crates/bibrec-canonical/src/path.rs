use std::fmt;

/// Location of a value inside a JSON payload, e.g. `creators[2].creatorType`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    /// The payload root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a child path for an object member.
    pub fn field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    /// Returns a child path for an array element.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        match segments.last_mut() {
            Some(last) => last.push_str(&format!("[{}]", index)),
            None => segments.push(format!("[{}]", index)),
        }
        Self { segments }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}
