use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

/// Detail views that open over the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modal {
    About,
    VisionMission,
    Service(String),
    Project(String),
}

#[derive(Debug, thiserror::Error)]
#[error("unknown modal `{0}`")]
pub struct UnknownModal(pub String);

impl Modal {
    fn same_kind(&self, other: &Modal) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// DOM id of the rendered dialog.
    pub fn dom_id(&self) -> String {
        let key: String = self
            .to_string()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
            .collect();
        format!("modal-{key}")
    }
}

/// Query key of the modal. Slugs and ids are form encoded so they never
/// contain the `,` separator or characters that end a query value.
impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::About => f.write_str("about"),
            Self::VisionMission => f.write_str("vision"),
            Self::Service(slug) => write!(f, "service:{}", encode(slug)),
            Self::Project(id) => write!(f, "project:{}", encode(id)),
        }
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn decode(value: &str) -> Option<String> {
    if value.is_empty() || value.contains(['&', '=']) {
        return None;
    }
    form_urlencoded::parse(value.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .filter(|key| !key.is_empty())
}

impl FromStr for Modal {
    type Err = UnknownModal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let modal = match key.split_once(':') {
            None if key == "about" => Some(Self::About),
            None if key == "vision" => Some(Self::VisionMission),
            Some(("service", slug)) => decode(slug).map(Self::Service),
            Some(("project", id)) => decode(id).map(Self::Project),
            _ => None,
        };
        modal.ok_or_else(|| UnknownModal(key.to_string()))
    }
}

/// Open modals, oldest first. Escape and backdrop clicks close the newest.
///
/// At most one modal of each kind is open: opening a second service detail
/// replaces the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalStack {
    open: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a stack from a decoded, comma separated `open` query value.
    /// Unknown entries are skipped.
    pub fn from_query(value: &str) -> Self {
        let mut stack = Self::new();
        for modal in value.split(',').filter_map(|part| part.parse().ok()) {
            stack.open(modal);
        }
        stack
    }

    pub fn to_query(&self) -> String {
        self.open
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn open(&mut self, modal: Modal) {
        if self.open.contains(&modal) {
            return;
        }
        self.open.retain(|m| !m.same_kind(&modal));
        self.open.push(modal);
    }

    /// Close a specific modal (its close button).
    pub fn close(&mut self, modal: &Modal) -> bool {
        let before = self.open.len();
        self.open.retain(|m| m != modal);
        before != self.open.len()
    }

    pub fn close_top(&mut self) -> Option<Modal> {
        self.open.pop()
    }

    pub fn handle_escape(&mut self) -> Option<Modal> {
        self.close_top()
    }

    pub fn handle_backdrop_click(&mut self) -> Option<Modal> {
        self.close_top()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.open.last()
    }

    pub fn is_open(&self, modal: &Modal) -> bool {
        self.open.contains(modal)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Page scrolling is suspended while anything is open.
    pub fn scroll_locked(&self) -> bool {
        !self.is_empty()
    }

    pub fn with(&self, modal: Modal) -> Self {
        let mut next = self.clone();
        next.open(modal);
        next
    }

    pub fn without(&self, modal: &Modal) -> Self {
        let mut next = self.clone();
        next.close(modal);
        next
    }

    /// Link target for a page showing this stack.
    pub fn href(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?open={}", encode(&self.to_query()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_most_recent_first() {
        let mut stack = ModalStack::new();
        stack.open(Modal::About);
        stack.open(Modal::VisionMission);

        assert_eq!(stack.handle_escape(), Some(Modal::VisionMission));
        assert!(stack.is_open(&Modal::About));
        assert_eq!(stack.handle_escape(), Some(Modal::About));
        assert_eq!(stack.handle_escape(), None);
    }

    #[test]
    fn backdrop_click_closes_top_only() {
        let mut stack = ModalStack::from_query("about,service:printing");
        assert_eq!(
            stack.handle_backdrop_click(),
            Some(Modal::Service("printing".into()))
        );
        assert_eq!(stack.top(), Some(&Modal::About));
    }

    #[test]
    fn scroll_lock_follows_open_state() {
        let mut stack = ModalStack::new();
        assert!(!stack.scroll_locked());
        stack.open(Modal::About);
        assert!(stack.scroll_locked());
        stack.close(&Modal::About);
        assert!(!stack.scroll_locked());
    }

    #[test]
    fn one_modal_per_kind() {
        let mut stack = ModalStack::new();
        stack.open(Modal::Service("a".into()));
        stack.open(Modal::About);
        stack.open(Modal::Service("b".into()));
        assert_eq!(stack.to_query(), "about,service:b");

        stack.open(Modal::About);
        assert_eq!(stack.to_query(), "about,service:b");
    }

    #[test]
    fn query_round_trip_skips_garbage() {
        let stack = ModalStack::from_query("about,,bogus,project:p1,service:");
        assert_eq!(stack.to_query(), "about,project:p1");
        assert_eq!(ModalStack::from_query(&stack.to_query()), stack);
    }

    #[test]
    fn hrefs_open_and_close() {
        let stack = ModalStack::new().with(Modal::About);
        assert_eq!(stack.href("/"), "/?open=about");
        let both = stack.with(Modal::VisionMission);
        assert_eq!(both.href("/"), "/?open=about%2Cvision");
        assert_eq!(both.without(&Modal::VisionMission).href("/"), "/?open=about");
        assert_eq!(stack.without(&Modal::About).href("/"), "/");
    }

    #[test]
    fn dom_ids_are_attribute_safe() {
        assert_eq!(Modal::Service("print".into()).dom_id(), "modal-service-print");
        assert_eq!(Modal::VisionMission.dom_id(), "modal-vision");
        assert_eq!(
            Modal::Service("print,pack".into()).dom_id(),
            "modal-service-print-2Cpack"
        );
    }

    fn open_value(href: &str) -> String {
        let query = href.split_once('?').map_or("", |(_, q)| q);
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "open")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn slugs_with_separators_survive_the_url() {
        for slug in ["print,pack", "print&pack", "a b#c?d", "x:y=z", "50%+off"] {
            let modal = Modal::Service(slug.into());
            let stack = ModalStack::new().with(Modal::About).with(modal.clone());
            let href = stack.href("/");

            let raw = href.split_once("?open=").unwrap().1;
            assert!(!raw.contains(['&', ',', '#', '?', ' ']), "{href}");

            let restored = ModalStack::from_query(&open_value(&href));
            assert_eq!(restored, stack, "{href}");
            assert!(restored.is_open(&modal));
        }
    }

    #[test]
    fn parse_errors_name_the_key() {
        let err = "gallery".parse::<Modal>().unwrap_err();
        assert_eq!(err.to_string(), "unknown modal `gallery`");
        assert!("service:a&b".parse::<Modal>().is_err());
        assert_eq!(
            "project:p%201".parse::<Modal>().unwrap(),
            Modal::Project("p 1".into())
        );
    }
}
