//! Inline style declarations.
//!
//! The live counterpart of an element's `style` attribute. Declarations keep
//! insertion order; setting an existing property replaces it in place.

/// Ordered list of `property: value` declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    entries: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw style text (`"color: red; margin: 0 4px"`).
    ///
    /// Malformed declarations (no colon, empty name) are skipped.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        style.set_css_text(text);
        style
    }

    /// Replace every declaration with the ones in `text`.
    pub fn set_css_text(&mut self, text: &str) {
        self.entries.clear();
        for declaration in text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            self.set_property(name, value);
        }
    }

    /// Serialize as `name: value;` pairs separated by spaces.
    pub fn css_text(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Set one property. Accepts camelCase (`fontSize`) or kebab-case
    /// (`font-size`) names. An empty value removes the property.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let name = to_kebab_case(name);
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(&name);
            return;
        }
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name, value.to_string())),
        }
    }

    /// Get one property value.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        let name = to_kebab_case(name);
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove one property, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = to_kebab_case(name);
        let pos = self.entries.iter().position(|(n, _)| *n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// `backgroundColor` -> `background-color`. Custom properties (`--x`) and
/// names that are already kebab-case pass through untouched.
pub fn to_kebab_case(name: &str) -> String {
    if name.starts_with("--") || name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
