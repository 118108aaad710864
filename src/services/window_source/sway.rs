use crate::error::Result;
use crate::keynav_error;
use crate::model::{Rectangle, ScreenBounds, ScreenSnapshot, WindowFlags, WindowHandle, WindowId};
use crate::utils::run_command;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::r#trait::WindowSourceTrait;

/// Окна sway через `swaymsg -t get_tree`
pub struct SwaySource {
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SwayRect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct SwayNode {
    id: u64,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    name: Option<String>,
    rect: SwayRect,
    #[serde(default)]
    focused: bool,
    #[serde(default)]
    visible: Option<bool>,
    #[serde(default)]
    pid: Option<u32>,
    #[serde(default)]
    app_id: Option<String>,
    #[serde(default)]
    window_properties: Option<serde_json::Value>,
    #[serde(default)]
    nodes: Vec<SwayNode>,
    #[serde(default)]
    floating_nodes: Vec<SwayNode>,
}

impl SwayNode {
    fn is_view(&self) -> bool {
        matches!(self.node_type.as_str(), "con" | "floating_con")
            && self.nodes.is_empty()
            && (self.pid.is_some() || self.app_id.is_some() || self.window_properties.is_some())
    }

    fn children(&self) -> impl Iterator<Item = &SwayNode> {
        self.nodes.iter().chain(self.floating_nodes.iter())
    }

    fn contains_focus(&self) -> bool {
        self.focused || self.children().any(SwayNode::contains_focus)
    }
}

/// Окно вместе с именем рабочего стола, на котором оно лежит
struct PlacedView<'a> {
    workspace: &'a str,
    node: &'a SwayNode,
}

fn collect_views<'a>(node: &'a SwayNode, workspace: &'a str, out: &mut Vec<PlacedView<'a>>) {
    if node.is_view() {
        out.push(PlacedView { workspace, node });
        return;
    }
    for child in node.children() {
        collect_views(child, workspace, out);
    }
}

/// Построить снимок экрана с фокусом из дерева sway.
///
/// Экраном считается output с активным окном, координаты переводятся в
/// систему output. Окна других output'ов в снимок не попадают.
pub(crate) fn parse_tree(json: &str) -> Result<ScreenSnapshot> {
    let root: SwayNode = serde_json::from_str(json)?;

    let output = root
        .nodes
        .iter()
        .filter(|node| node.node_type == "output")
        .find(|node| node.contains_focus())
        .ok_or_else(|| keynav_error!(parse, "В дереве sway нет output с фокусом"))?;

    let mut views = Vec::new();
    let mut current_workspace = None;
    for workspace in output.nodes.iter().filter(|node| node.node_type == "workspace") {
        let name = workspace.name.as_deref().unwrap_or_default();
        if workspace.contains_focus() {
            current_workspace = Some(name);
        }
        collect_views(workspace, name, &mut views);
    }

    let mut snapshot = ScreenSnapshot::new(ScreenBounds::new(output.rect.width, output.rect.height));

    for view in views {
        let node = view.node;
        let rect = Rectangle::new(node.rect.x, node.rect.y, node.rect.width, node.rect.height)
            .translated(output.rect.x, output.rect.y);

        let flags = WindowFlags {
            viewable: node.visible.unwrap_or(false),
            on_current_desktop: Some(view.workspace) == current_workspace,
            ..WindowFlags::default()
        };

        if node.focused {
            snapshot.active = Some(WindowId(node.id));
        }

        snapshot.windows.push(
            WindowHandle::new(node.id, rect)
                .with_title(node.name.clone().unwrap_or_default())
                .with_flags(flags),
        );
    }

    Ok(snapshot)
}

impl SwaySource {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl WindowSourceTrait for SwaySource {
    fn name(&self) -> &'static str {
        "sway"
    }

    async fn snapshot(&self) -> Result<ScreenSnapshot> {
        let tree = run_command("swaymsg", &["-t", "get_tree", "-r"], self.timeout).await?;
        let snapshot = parse_tree(&tree)?;
        debug!(
            "sway: экран {}, окон {}, активное {:?}",
            snapshot.screen,
            snapshot.windows.len(),
            snapshot.active
        );
        Ok(snapshot)
    }

    async fn focus(&self, window: &WindowHandle, _raise: bool) -> Result<()> {
        // В sway плавающее окно поднимается вместе с фокусом, отдельного raise нет
        let criteria = format!("[con_id={}]", window.id.value());
        run_command("swaymsg", &[criteria.as_str(), "focus"], self.timeout).await?;
        Ok(())
    }
}
