//! Host page markup.
//!
//! A page exposes target slots by string id. Each slot has a label and a value child; writing
//! replaces the value child only. [`MemoryPage`] keeps the slots in document order and can
//! render itself as HTML.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use deviceinfo_core_types::TargetId;
use serde::{Deserialize, Serialize};

use crate::content::{Content, SlotStatus};
use crate::errors::PageError;

/// Named slots of the host page.
pub trait HostPage {
    fn target(&self, id: &str) -> Option<&TargetSlot>;

    fn target_mut(&mut self, id: &str) -> Option<&mut TargetSlot>;
}

impl<T> HostPage for &mut T
where
    T: HostPage + ?Sized,
{
    fn target(&self, id: &str) -> Option<&TargetSlot> {
        (**self).target(id)
    }

    fn target_mut(&mut self, id: &str) -> Option<&mut TargetSlot> {
        (**self).target_mut(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSlot {
    id: String,
    label: String,
    value: Option<Content>,
}

impl TargetSlot {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Last written content, if any.
    pub fn value(&self) -> Option<&Content> {
        self.value.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().map(Content::text)
    }

    pub fn status(&self) -> Option<SlotStatus> {
        self.value.as_ref().map(Content::status)
    }

    /// Replace the value child.
    pub fn replace_value(&mut self, content: Content) {
        self.value = Some(content);
    }

    /// Markup of the value child.
    pub fn value_html(&self) -> String {
        match &self.value {
            Some(content) => format!(
                "<span class=\"{}\">{}</span>",
                content.status().css_class(),
                escape_html(content.text())
            ),
            None => String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTarget {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Serialized page layout: which slots exist, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplate {
    pub targets: Vec<TemplateTarget>,
}

impl PageTemplate {
    pub fn standard() -> Self {
        Self {
            targets: TargetId::ALL
                .iter()
                .map(|target| TemplateTarget {
                    id: target.as_str().to_string(),
                    label: Some(target.label().to_string()),
                })
                .collect(),
        }
    }

    /// Load a template file; the format follows the extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&raw)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&raw)?),
            other => Err(PageError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// In-memory page holding its slots in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPage {
    slots: Vec<TargetSlot>,
}

impl MemoryPage {
    /// Page with every standard target, labelled.
    pub fn standard() -> Self {
        Self {
            slots: TargetId::ALL
                .iter()
                .map(|target| TargetSlot::new(target.as_str(), target.label()))
                .collect(),
        }
    }

    pub fn from_template(template: &PageTemplate) -> Result<Self, PageError> {
        let mut seen = HashSet::new();
        let mut slots = Vec::with_capacity(template.targets.len());
        for target in &template.targets {
            if !seen.insert(target.id.as_str()) {
                return Err(PageError::DuplicateTarget(target.id.clone()));
            }
            let label = target.label.clone().unwrap_or_else(|| {
                target
                    .id
                    .parse::<TargetId>()
                    .map(|known| known.label().to_string())
                    .unwrap_or_else(|_| target.id.clone())
            });
            slots.push(TargetSlot::new(target.id.clone(), label));
        }
        Ok(Self { slots })
    }

    /// Drop a slot, as if the page never had it.
    pub fn without(mut self, id: &str) -> Self {
        self.slots.retain(|slot| slot.id != id);
        self
    }

    pub fn slots(&self) -> &[TargetSlot] {
        &self.slots
    }

    pub fn render_html(&self) -> String {
        let mut html = String::from("<dl id=\"device-info\">\n");
        for slot in &self.slots {
            let _ = writeln!(
                html,
                "  <div id=\"{}\"><dt>{}</dt><dd>{}</dd></div>",
                escape_html(&slot.id),
                escape_html(&slot.label),
                slot.value_html()
            );
        }
        html.push_str("</dl>\n");
        html
    }
}

impl HostPage for MemoryPage {
    fn target(&self, id: &str) -> Option<&TargetSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    fn target_mut(&mut self, id: &str) -> Option<&mut TargetSlot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_page_has_every_target() {
        let page = MemoryPage::standard();
        assert_eq!(page.slots().len(), TargetId::ALL.len());
        assert_eq!(
            page.target("window-size").map(TargetSlot::label),
            Some("Window Size")
        );
        assert!(page.target("lorem-ipsum").is_none());
    }

    #[test]
    fn template_labels_fall_back_to_known_or_id() {
        let template = PageTemplate {
            targets: vec![
                TemplateTarget {
                    id: "screen-type".into(),
                    label: None,
                },
                TemplateTarget {
                    id: "custom-slot".into(),
                    label: None,
                },
            ],
        };
        let page = MemoryPage::from_template(&template).unwrap();
        assert_eq!(page.slots()[0].label(), "Screen Type");
        assert_eq!(page.slots()[1].label(), "custom-slot");
    }

    #[test]
    fn duplicate_template_ids_are_rejected() {
        let target = TemplateTarget {
            id: "window-size".into(),
            label: None,
        };
        let template = PageTemplate {
            targets: vec![target.clone(), target],
        };
        assert!(matches!(
            MemoryPage::from_template(&template),
            Err(PageError::DuplicateTarget(id)) if id == "window-size"
        ));
    }

    #[test]
    fn rendered_values_are_escaped_and_classed() {
        let mut page = MemoryPage::standard();
        page.target_mut("window-size")
            .unwrap()
            .replace_value(Content::new("<b>", true));
        page.target_mut("screen-type")
            .unwrap()
            .replace_value(Content::from("undefined"));

        let html = page.render_html();
        assert!(html.contains(
            "<div id=\"window-size\"><dt>Window Size</dt><dd><span class=\"text-success\">&lt;b&gt;</span></dd></div>"
        ));
        assert!(html.contains("<span class=\"text-danger\">undefined</span>"));
    }
}
