use serde::Serialize;
use std::fmt;

/// The four dashboard views. The shell starts on [`Tab::Overview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Tab {
    #[default]
    Overview,
    Revenue,
    Retention,
    Activation,
}

impl Tab {
    /// Display order of the tab bar.
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Revenue, Tab::Retention, Tab::Activation];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Revenue => "Revenue",
            Tab::Retention => "Retention",
            Tab::Activation => "Activation",
        }
    }

    /// Stable identifier used for DOM ids and report anchors.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Revenue => "revenue",
            Tab::Retention => "retention",
            Tab::Activation => "activation",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_slugs_are_lowercase_labels() {
        for tab in Tab::ALL {
            assert_eq!(tab.slug(), tab.label().to_lowercase());
            assert_eq!(tab.to_string(), tab.label());
        }
    }
}
