use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Youtube,
    Apps,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Youtube => "youtube",
            Tab::Apps => "apps",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab {0:?} (expected \"youtube\" or \"apps\")")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "youtube" => Ok(Tab::Youtube),
            "apps" => Ok(Tab::Apps),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tab, UnknownTab};

    #[test]
    fn parses_known_tabs() {
        assert_eq!("youtube".parse::<Tab>(), Ok(Tab::Youtube));
        assert_eq!(" apps ".parse::<Tab>(), Ok(Tab::Apps));
    }

    #[test]
    fn unknown_tab_is_an_error_not_a_panic() {
        assert_eq!(
            "podcasts".parse::<Tab>(),
            Err(UnknownTab("podcasts".to_string()))
        );
    }

    #[test]
    fn default_is_youtube() {
        assert_eq!(Tab::default(), Tab::Youtube);
    }
}
