//! Screenshot asset keys and the load lifecycle of a screenshot area.

use crate::config;

pub const SCREENSHOT_SELECTOR: &str = ".screenshot-area[data-asset]";
pub const DEFAULT_LABEL: &str = "Screenshot";

/// Logical asset key → file under `config::IMAGE_DIR`.
pub const ASSET_MAP: [(&str, &str); 6] = [
    ("slackChat", "slack-chat.png"),
    ("roiDashboard", "roi-dashboard.png"),
    ("alertAgentWorkflow", "alert-agent-workflow.png"),
    ("distributionListWF", "distribution-list-workflow.png"),
    ("ticketAnalysis", "ticket-analysis.png"),
    ("workflowBuilder", "workflow-builder.png"),
];

pub fn resolve(key: &str) -> Option<&'static str> {
    ASSET_MAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, file)| *file)
}

pub fn asset_url(file: &str) -> String {
    format!("{}{}", config::IMAGE_DIR, file)
}

/// Caption for a screenshot area; absent or empty labels fall back to the default.
pub fn caption(label: Option<String>) -> String {
    label
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| DEFAULT_LABEL.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderReason {
    Unmapped,
    LoadFailed,
}

impl PlaceholderReason {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceholderReason::Unmapped => "unmapped",
            PlaceholderReason::LoadFailed => "load-failed",
        }
    }
}

/// `Loaded` and `Placeholder` are terminal: a failed load is never retried.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Pending(String),
    Loaded(String),
    Placeholder(PlaceholderReason),
}

impl AssetState {
    pub fn for_key(key: &str) -> Self {
        match resolve(key) {
            Some(file) => AssetState::Pending(asset_url(file)),
            None => AssetState::Placeholder(PlaceholderReason::Unmapped),
        }
    }

    pub fn loaded(self) -> Self {
        match self {
            AssetState::Pending(url) => AssetState::Loaded(url),
            other => other,
        }
    }

    pub fn failed(self) -> Self {
        match self {
            AssetState::Pending(_) => AssetState::Placeholder(PlaceholderReason::LoadFailed),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_keys_resolve_under_image_dir() {
        assert_eq!(resolve("slackChat"), Some("slack-chat.png"));
        assert_eq!(
            AssetState::for_key("roiDashboard"),
            AssetState::Pending("assets/images/roi-dashboard.png".into())
        );
    }

    #[test]
    fn every_mapped_key_starts_pending() {
        for (key, file) in ASSET_MAP {
            assert_eq!(AssetState::for_key(key), AssetState::Pending(asset_url(file)));
        }
    }

    #[test]
    fn unmapped_key_is_placeholder_immediately() {
        assert_eq!(resolve("noSuchShot"), None);
        assert_eq!(
            AssetState::for_key("noSuchShot"),
            AssetState::Placeholder(PlaceholderReason::Unmapped)
        );
        // keys are case-sensitive
        assert_eq!(resolve("SlackChat"), None);
    }

    #[test]
    fn load_and_error_transitions() {
        let pending = AssetState::for_key("ticketAnalysis");
        assert_eq!(
            pending.clone().loaded(),
            AssetState::Loaded("assets/images/ticket-analysis.png".into())
        );
        assert_eq!(
            pending.failed(),
            AssetState::Placeholder(PlaceholderReason::LoadFailed)
        );
    }

    #[test]
    fn terminal_states_do_not_move() {
        let loaded = AssetState::for_key("slackChat").loaded();
        assert_eq!(loaded.clone().failed(), loaded);

        let failed = AssetState::for_key("slackChat").failed();
        assert_eq!(failed.clone().loaded(), failed);

        let unmapped = AssetState::for_key("missing");
        assert_eq!(unmapped.clone().loaded(), unmapped);
    }

    #[test]
    fn caption_defaults() {
        assert_eq!(caption(None), "Screenshot");
        assert_eq!(caption(Some(String::new())), "Screenshot");
        assert_eq!(caption(Some("RITA Conversation".into())), "RITA Conversation");
    }
}
