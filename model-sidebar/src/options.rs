const DEFAULT_NAMESPACE: &str = "ModelSidebar";
const DEFAULT_ANIM_SPEED_MS: u64 = 1000;
const DEFAULT_PLACEHOLDER_RESPONSE: &str = "Testing response..";

/// Sidebar instance options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarOptions {
    /// `jsontype` tag inbound events must carry to reach this sidebar.
    pub namespace: String,
    /// Show/hide animation speed handed to the host on load.
    pub anim_speed_ms: u64,
    /// Stand-in response logged after every console command.
    pub placeholder_response: String,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            namespace: String::from(DEFAULT_NAMESPACE),
            anim_speed_ms: DEFAULT_ANIM_SPEED_MS,
            placeholder_response: String::from(DEFAULT_PLACEHOLDER_RESPONSE),
        }
    }
}

impl SidebarOptions {
    /// Read options leniently: missing or mistyped fields keep defaults.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut options = SidebarOptions::default();

        if let Some(namespace) = read_string_field(value, "namespace")
            .filter(|value| !value.trim().is_empty())
        {
            options.namespace = namespace;
        }

        if let Some(speed) =
            value.get("anim_speed_ms").and_then(serde_json::Value::as_u64)
        {
            options.anim_speed_ms = speed;
        }

        if let Some(placeholder) =
            read_string_field(value, "placeholder_response")
        {
            options.placeholder_response = placeholder;
        }

        options
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}
