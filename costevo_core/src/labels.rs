//! Spreadsheet-style component names (`A`..`Z`, `AA`, `AB`, ...).

/// Display names for the components of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    names: Vec<String>,
}

impl ComponentLabels {
    /// Generates the first `n` labels.
    pub fn new(n: usize) -> Self {
        Self {
            names: (0..n).map(Self::label).collect(),
        }
    }

    /// Returns the label for a single component index.
    ///
    /// 0 → `A`, 25 → `Z`, 26 → `AA`, 701 → `ZZ`, 702 → `AAA`.
    pub fn label(index: usize) -> String {
        let mut letters = Vec::new();
        let mut rest = index;
        loop {
            letters.push(b'A' + (rest % 26) as u8);
            if rest < 26 {
                break;
            }
            rest = rest / 26 - 1;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }

    /// Returns the label of component `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Finds the index of a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.names.iter().position(|name| name == label)
    }
}
