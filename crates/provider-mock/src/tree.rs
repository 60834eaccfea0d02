use quick_xml::de::from_str;
use serde::Deserialize;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use thiserror::Error;
use uiscope_core::{AttrValue, PatternId, PropertyId, Rect, TextAttribute, UiValue};

static CURRENT_TREE: LazyLock<RwLock<Option<StaticMockTree>>> = LazyLock::new(|| RwLock::new(None));

/// Pattern support of one mock element.
#[derive(Clone, Debug)]
pub struct PatternSpec {
    pub(crate) id: PatternId,
    pub(crate) properties: Vec<(String, UiValue)>,
    pub(crate) text: Vec<(TextAttribute, AttrValue)>,
}

impl PatternSpec {
    pub fn new(id: PatternId) -> Self {
        Self { id, properties: Vec::new(), text: Vec::new() }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<UiValue>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Document-range text attribute, including the mixed / not-supported sentinels.
    pub fn with_text(mut self, attribute: TextAttribute, value: AttrValue) -> Self {
        self.text.push((attribute, value));
        self
    }

    pub fn id(&self) -> PatternId {
        self.id
    }
}

/// Declarative description of one mock element and its subtree.
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    pub(crate) properties: Vec<(PropertyId, UiValue)>,
    pub(crate) patterns: Vec<PatternSpec>,
    pub(crate) children: Vec<Arc<ElementSpec>>,
    pub(crate) fail_children_at: Option<usize>,
    pub(crate) dead: bool,
}

impl ElementSpec {
    pub fn new(control_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::default()
            .with_property(PropertyId::ControlType, control_type.into())
            .with_property(PropertyId::Name, name.into())
    }

    /// Element without any properties; reads report "not supported".
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn with_automation_id(self, automation_id: impl Into<String>) -> Self {
        self.with_property(PropertyId::AutomationId, automation_id.into())
    }

    pub fn with_property(mut self, property: PropertyId, value: impl Into<UiValue>) -> Self {
        let value = value.into();
        match self.properties.iter_mut().find(|(id, _)| *id == property) {
            Some(entry) => entry.1 = value,
            None => self.properties.push((property, value)),
        }
        self
    }

    pub fn with_pattern(mut self, pattern: PatternSpec) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ElementSpec>,
    {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    /// Child enumeration fails when it reaches `index`.
    pub fn failing_children_at(mut self, index: usize) -> Self {
        self.fail_children_at = Some(index);
        self
    }

    /// Every platform call on this element fails as if it had been destroyed.
    pub fn dead(mut self) -> Self {
        self.dead = true;
        self
    }

    pub fn property(&self, property: PropertyId) -> Option<&UiValue> {
        self.properties.iter().find(|(id, _)| *id == property).map(|(_, value)| value)
    }

    pub fn patterns(&self) -> &[PatternSpec] {
        &self.patterns
    }

    pub fn children(&self) -> &[Arc<ElementSpec>] {
        &self.children
    }
}

/// A complete mock tree with a single root element.
#[derive(Clone, Debug)]
pub struct StaticMockTree {
    root: Arc<ElementSpec>,
}

impl StaticMockTree {
    pub fn new(root: ElementSpec) -> Self {
        Self { root: Arc::new(root) }
    }

    pub fn root(&self) -> &Arc<ElementSpec> {
        &self.root
    }

    /// Tree shipped with the crate (an order entry window on a desktop).
    pub fn embedded() -> Result<Self, MockTreeLoadError> {
        const XML: &str = include_str!("../assets/mock_tree.xml");
        Self::from_xml(XML)
    }

    pub fn from_xml(xml: &str) -> Result<Self, MockTreeLoadError> {
        let parsed: XmlTree = from_str(xml)?;
        let mut roots = parsed.elements.into_iter();
        let root = roots.next().ok_or(MockTreeLoadError::MissingRoot)?;
        if roots.next().is_some() {
            return Err(MockTreeLoadError::MultipleRoots);
        }
        Ok(Self::new(build_element(root)?))
    }
}

#[derive(Debug, Error)]
pub enum MockTreeLoadError {
    #[error("failed to parse mock tree XML: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("mock tree has no root element")]
    MissingRoot,

    #[error("mock tree has more than one root element")]
    MultipleRoots,

    #[error("unknown element property '{0}'")]
    UnknownProperty(String),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("unknown text attribute '{0}'")]
    UnknownTextAttribute(String),

    #[error("invalid rectangle '{0}' (expected x,y,width,height)")]
    InvalidRect(String),

    #[error("text attribute '{attribute}' needs a value or a state of mixed / unsupported")]
    InvalidTextValue { attribute: String },
}

#[derive(Debug, Deserialize)]
struct XmlTree {
    #[serde(rename = "element", default)]
    elements: Vec<XmlElement>,
}

#[derive(Debug, Deserialize)]
struct XmlElement {
    #[serde(rename = "@control_type")]
    control_type: Option<String>,
    #[serde(rename = "@name")]
    name: Option<String>,
    #[serde(rename = "@automation_id")]
    automation_id: Option<String>,
    #[serde(rename = "@fail_children_at")]
    fail_children_at: Option<usize>,
    #[serde(rename = "@dead")]
    dead: Option<bool>,
    #[serde(rename = "property", default)]
    properties: Vec<XmlProperty>,
    #[serde(rename = "pattern", default)]
    patterns: Vec<XmlPattern>,
    #[serde(rename = "element", default)]
    children: Vec<XmlElement>,
}

#[derive(Debug, Deserialize)]
struct XmlProperty {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct XmlPattern {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "property", default)]
    properties: Vec<XmlProperty>,
    #[serde(rename = "text", default)]
    text: Vec<XmlTextAttribute>,
}

#[derive(Debug, Deserialize)]
struct XmlTextAttribute {
    #[serde(rename = "@attribute")]
    attribute: String,
    #[serde(rename = "@value")]
    value: Option<String>,
    #[serde(rename = "@state")]
    state: Option<String>,
}

fn build_element(node: XmlElement) -> Result<ElementSpec, MockTreeLoadError> {
    let mut spec = ElementSpec::bare();
    if let Some(control_type) = node.control_type {
        spec = spec.with_property(PropertyId::ControlType, control_type);
    }
    if let Some(name) = node.name {
        spec = spec.with_property(PropertyId::Name, name);
    }
    if let Some(automation_id) = node.automation_id {
        spec = spec.with_automation_id(automation_id);
    }

    for property in node.properties {
        let id = PropertyId::from_name(&property.name)
            .ok_or_else(|| MockTreeLoadError::UnknownProperty(property.name.clone()))?;
        let value = if id == PropertyId::BoundingRectangle {
            UiValue::Rect(parse_rect(&property.value)?)
        } else {
            parse_value(&property.value)
        };
        spec = spec.with_property(id, value);
    }

    for pattern in node.patterns {
        spec = spec.with_pattern(build_pattern(pattern)?);
    }

    if let Some(index) = node.fail_children_at {
        spec = spec.failing_children_at(index);
    }
    if node.dead.unwrap_or(false) {
        spec = spec.dead();
    }

    for child in node.children {
        spec = spec.with_child(build_element(child)?);
    }
    Ok(spec)
}

fn build_pattern(pattern: XmlPattern) -> Result<PatternSpec, MockTreeLoadError> {
    let id = PatternId::from_name(&pattern.id).ok_or(MockTreeLoadError::UnknownPattern(pattern.id))?;
    let mut spec = PatternSpec::new(id);
    for property in pattern.properties {
        spec = spec.with(property.name, parse_value(&property.value));
    }
    for text in pattern.text {
        let attribute = TextAttribute::from_name(&text.attribute)
            .ok_or_else(|| MockTreeLoadError::UnknownTextAttribute(text.attribute.clone()))?;
        let value = match (text.state.as_deref(), text.value) {
            (Some("mixed"), _) => AttrValue::Mixed,
            (Some("unsupported"), _) => AttrValue::NotSupported,
            (None, Some(value)) => AttrValue::Value(parse_value(&value)),
            _ => return Err(MockTreeLoadError::InvalidTextValue { attribute: text.attribute }),
        };
        spec = spec.with_text(attribute, value);
    }
    Ok(spec)
}

fn parse_rect(value: &str) -> Result<Rect, MockTreeLoadError> {
    let parts: Vec<f64> = value
        .split(',')
        .map(|chunk| chunk.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| MockTreeLoadError::InvalidRect(value.to_owned()))?;
    match parts.as_slice() {
        [x, y, width, height] => Ok(Rect::new(*x, *y, *width, *height)),
        _ => Err(MockTreeLoadError::InvalidRect(value.to_owned())),
    }
}

fn parse_value(value: &str) -> UiValue {
    if let Ok(boolean) = value.parse::<bool>() {
        return UiValue::from(boolean);
    }
    if let Ok(integer) = value.parse::<i64>() {
        return UiValue::from(integer);
    }
    if let Ok(number) = value.parse::<f64>() {
        return UiValue::from(number);
    }
    UiValue::from(value)
}

/// Restores the previously installed tree when dropped.
pub struct TreeGuard {
    previous: Option<StaticMockTree>,
}

impl Drop for TreeGuard {
    fn drop(&mut self) {
        *CURRENT_TREE.write().unwrap_or_else(PoisonError::into_inner) = self.previous.take();
    }
}

/// Makes `tree` the tree served by the registered mock source.
pub fn install_mock_tree(tree: StaticMockTree) -> TreeGuard {
    let mut current = CURRENT_TREE.write().unwrap_or_else(PoisonError::into_inner);
    let previous = current.replace(tree);
    TreeGuard { previous }
}

pub(crate) fn current_tree() -> Result<StaticMockTree, MockTreeLoadError> {
    if let Some(tree) = CURRENT_TREE.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Ok(tree.clone());
    }
    StaticMockTree::embedded()
}
