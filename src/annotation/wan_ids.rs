use indexmap::IndexMap;

/// Identifiers found in a device's notes, in discovery order. The first one is `Wan 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WanIds {
    ids: Vec<String>,
}

impl WanIds {
    pub fn new(ids: Vec<String>) -> Self {
        WanIds { ids }
    }

    pub fn label(position: usize) -> String {
        format!("Wan {}", position)
    }

    /// 1-based, like the labels.
    pub fn nth(&self, position: usize) -> Option<&str> {
        position.checked_sub(1).and_then(|index| self.ids.get(index)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        self.ids.iter().enumerate().map(|(index, id)| (Self::label(index + 1), id.as_str()))
    }

    pub fn to_map(&self) -> IndexMap<String, String> {
        self.iter().map(|(label, id)| (label, id.to_string())).collect()
    }
}
